use bintree::Tree;
use color_eyre::Result;
use pretty_assertions::assert_eq;
use tree_tool::report::{SearchResult, TreeReport};

use crate::helpers::sample_tree;

#[test]
fn sample_report_values() {
    let report = TreeReport::new(&sample_tree(), &[3, 9]);

    assert_eq!(report.serialized, "1,2,None,None,3,4,None,None,5,None,None,");
    assert_eq!(report.pre_order, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.in_order, vec![2, 1, 4, 3, 5]);
    assert_eq!(report.post_order, vec![2, 4, 5, 3, 1]);
    assert_eq!(report.node_count, 5);
    assert_eq!(report.height, 3);
    assert!(report.balanced);
    assert_eq!(
        report.searches,
        vec![
            SearchResult { value: 3, found: true },
            SearchResult { value: 9, found: false },
        ]
    );
}

#[test]
fn sample_report_text() {
    let report = TreeReport::new(&sample_tree(), &[3]);

    assert_eq!(
        report.to_string(),
        "Serialized Tree: 1,2,None,None,3,4,None,None,5,None,None,\n\
         Pre-order Traversal: [1, 2, 3, 4, 5]\n\
         In-order Traversal: [2, 1, 4, 3, 5]\n\
         Post-order Traversal: [2, 4, 5, 3, 1]\n\
         Node Count: 5\n\
         Height: 3\n\
         Is Tree Balanced: true\n\
         Search 3: true\n"
    );
}

#[test]
fn report_json_has_every_field() -> Result<()> {
    let report = TreeReport::new(&Tree::empty(), &[0]);
    let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;

    assert_eq!(json["serialized"], "None,");
    assert_eq!(json["node_count"], 0);
    assert_eq!(json["height"], 0);
    assert_eq!(json["balanced"], true);
    assert_eq!(json["pre_order"], serde_json::json!([]));
    assert_eq!(json["searches"][0]["found"], false);
    Ok(())
}

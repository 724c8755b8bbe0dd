use color_eyre::Result;
use pretty_assertions::assert_eq;
use tree_tool::convert::TreeFormat;

use crate::helpers::{get_tree, sample_tree};

#[test]
fn sample_table_builds_sample_tree() -> Result<()> {
    let tree = get_tree("./tests/test-trees/sample.csv", TreeFormat::Table)?;
    assert_eq!(tree, sample_tree());
    Ok(())
}

#[test]
fn rows_listed_bottom_up_build_the_same_chain() -> Result<()> {
    let tree = get_tree("./tests/test-trees/chain.csv", TreeFormat::Table)?;

    assert_eq!(tree.serialize(), "-1,None,-2,None,-3,None,-4,None,None,");
    assert_eq!(tree.height(), 4);
    assert!(!tree.is_balanced());
    Ok(())
}

#[test]
fn node_with_two_parents_is_rejected() {
    assert!(get_tree("./tests/test-trees/two_parents.csv", TreeFormat::Table).is_err());
}

#[test]
fn unreachable_cycle_is_rejected() {
    assert!(get_tree("./tests/test-trees/detached_cycle.csv", TreeFormat::Table).is_err());
}

#[test]
fn dangling_child_is_rejected() {
    assert!(get_tree("./tests/test-trees/missing_child.csv", TreeFormat::Table).is_err());
}

#[test]
fn table_without_root_is_rejected() {
    assert!(get_tree("./tests/test-trees/no_root.csv", TreeFormat::Table).is_err());
}

#[test]
fn duplicate_node_is_rejected() {
    assert!(get_tree("./tests/test-trees/duplicate.csv", TreeFormat::Table).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(get_tree("./tests/test-trees/does_not_exist.csv", TreeFormat::Table).is_err());
}

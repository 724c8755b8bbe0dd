use std::fmt;

use bintree::{Tree, Value};
use color_eyre::Result;
use serde::Serialize;

/// Outcome of looking up one value in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub value: Value,
    pub found: bool,
}

/// Everything the tool knows how to say about a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    pub serialized: String,
    pub pre_order: Vec<Value>,
    pub in_order: Vec<Value>,
    pub post_order: Vec<Value>,
    pub node_count: usize,
    pub height: usize,
    pub balanced: bool,
    pub searches: Vec<SearchResult>,
}

impl TreeReport {
    /// Analyze `tree`, looking up each of `targets` in it.
    pub fn new(tree: &Tree, targets: &[Value]) -> Self {
        let searches = targets
            .iter()
            .map(|&value| SearchResult {
                value,
                found: tree.contains(value),
            })
            .collect();

        Self {
            serialized: tree.serialize(),
            pre_order: tree.pre_order(),
            in_order: tree.in_order(),
            post_order: tree.post_order(),
            node_count: tree.count_nodes(),
            height: tree.height(),
            balanced: tree.is_balanced(),
            searches,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for TreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Serialized Tree: {}", self.serialized)?;
        writeln!(f, "Pre-order Traversal: {:?}", self.pre_order)?;
        writeln!(f, "In-order Traversal: {:?}", self.in_order)?;
        writeln!(f, "Post-order Traversal: {:?}", self.post_order)?;
        writeln!(f, "Node Count: {}", self.node_count)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Is Tree Balanced: {}", self.balanced)?;

        for search in &self.searches {
            writeln!(f, "Search {}: {}", search.value, search.found)?;
        }

        Ok(())
    }
}

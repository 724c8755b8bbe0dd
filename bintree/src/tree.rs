use alloc::{boxed::Box, string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{Error, Node, Value, codec, query, traversal};

/// An owned, possibly empty binary tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn new(root: Option<Box<Node>>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }

    pub fn into_root(self) -> Option<Box<Node>> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn serialize(&self) -> String {
        codec::serialize(self.root())
    }

    pub fn deserialize(text: &str) -> Result<Self, Error> {
        codec::deserialize(text).map(Self::new)
    }

    pub fn pre_order(&self) -> Vec<Value> {
        traversal::pre_order(self.root())
    }

    pub fn in_order(&self) -> Vec<Value> {
        traversal::in_order(self.root())
    }

    pub fn post_order(&self) -> Vec<Value> {
        traversal::post_order(self.root())
    }

    pub fn contains(&self, target: Value) -> bool {
        query::search_value(self.root(), target)
    }

    pub fn height(&self) -> usize {
        query::height(self.root())
    }

    pub fn count_nodes(&self) -> usize {
        query::count_nodes(self.root())
    }

    pub fn is_balanced(&self) -> bool {
        query::is_balanced(self.root())
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self::new(Some(Box::new(root)))
    }
}

/// Writes the serialized form.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_tokens(self.root(), f)
    }
}

impl FromStr for Tree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s)
    }
}

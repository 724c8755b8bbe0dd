//! Depth-first visitors.
//!
//! Each order is available as a lazy iterator over `&Node` and as a function
//! collecting the visited values. The iterators keep their own stack, so the
//! depth of a tree is only bounded by available memory.

use alloc::vec::Vec;

use crate::{Node, Value};

/// Visits self, then the left subtree, then the right subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// Visits the left subtree, then self, then the right subtree.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
    current: Option<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        // Descend to the leftmost node not yet visited
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }

        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node)
    }
}

/// Visits the left subtree, then the right subtree, then self.
pub struct PostOrder<'a> {
    /// Nodes paired with whether their children have already been pushed.
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrder<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }

        None
    }
}

pub fn pre_order(root: Option<&Node>) -> Vec<Value> {
    PreOrder::new(root).map(Node::value).collect()
}

pub fn in_order(root: Option<&Node>) -> Vec<Value> {
    InOrder::new(root).map(Node::value).collect()
}

pub fn post_order(root: Option<&Node>) -> Vec<Value> {
    PostOrder::new(root).map(Node::value).collect()
}

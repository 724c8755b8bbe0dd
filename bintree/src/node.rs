use alloc::{boxed::Box, vec, vec::Vec};

use crate::traversal::PostOrder;

/// Payload type carried by every node.
pub type Value = i64;

/// A single vertex of a binary tree.
///
/// Each node exclusively owns its children, so a tree is always a finite,
/// acyclic structure. Children are attached after construction by moving a
/// subtree into one of the two slots.
#[derive(Debug)]
pub struct Node {
    value: Value,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Builder form of [`Node::set_left`].
    pub fn with_left(mut self, child: Node) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Builder form of [`Node::set_right`].
    pub fn with_right(mut self, child: Node) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    #[inline]
    pub fn value(&self) -> Value {
        self.value
    }

    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node> {
        self.right.as_deref_mut()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Move `child` into the left slot, returning the subtree it displaced.
    pub fn set_left(&mut self, child: Node) -> Option<Box<Node>> {
        self.left.replace(Box::new(child))
    }

    /// Move `child` into the right slot, returning the subtree it displaced.
    pub fn set_right(&mut self, child: Node) -> Option<Box<Node>> {
        self.right.replace(Box::new(child))
    }

    pub fn take_left(&mut self) -> Option<Box<Node>> {
        self.left.take()
    }

    pub fn take_right(&mut self) -> Option<Box<Node>> {
        self.right.take()
    }

    /// Attach already boxed children. Used by the deserializer, which builds
    /// nodes bottom-up.
    pub(crate) fn set_children(&mut self, left: Option<Box<Node>>, right: Option<Box<Node>>) {
        self.left = left;
        self.right = right;
    }
}

impl Clone for Node {
    // Copies are assembled bottom-up: when a node comes out of the post-order
    // walk, the copies of its subtrees sit on top of `done`, right above left.
    fn clone(&self) -> Self {
        let mut done: Vec<Box<Node>> = Vec::new();

        for node in PostOrder::new(Some(self)) {
            let right = node.right.as_ref().and_then(|_| done.pop());
            let left = node.left.as_ref().and_then(|_| done.pop());

            let mut copy = Box::new(Node::new(node.value));
            copy.set_children(left, right);
            done.push(copy);
        }

        done.pop().map_or_else(|| Node::new(self.value), |root| *root)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }

            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(a), Some(b)) => pending.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    // Unlink the subtree one node at a time, so that dropping a long chain
    // doesn't recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

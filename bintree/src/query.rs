use alloc::{vec, vec::Vec};

use crate::{
    Node, Value,
    traversal::{PostOrder, PreOrder},
};

/// Whether `target` is held by any node of the tree. Stops at the first match,
/// checking each node before its left subtree and the left before the right.
pub fn search_value(root: Option<&Node>, target: Value) -> bool {
    PreOrder::new(root).any(|node| node.value() == target)
}

/// Number of nodes on the longest root-to-leaf path. The empty tree has
/// height 0 and a single node height 1.
pub fn height(root: Option<&Node>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&Node, usize)> = root.into_iter().map(|node| (node, 1)).collect();

    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(node.left().map(|left| (left, depth + 1)));
        stack.extend(node.right().map(|right| (right, depth + 1)));
    }

    deepest
}

pub fn count_nodes(root: Option<&Node>) -> usize {
    PreOrder::new(root).count()
}

/// Whether, at every node, the heights of the two subtrees differ by at most
/// one. The empty tree is balanced.
///
/// Heights are computed bottom-up in a single post-order pass: when a node is
/// visited, the heights of its finished subtrees sit on top of `heights`,
/// right above left.
pub fn is_balanced(root: Option<&Node>) -> bool {
    let mut heights: Vec<usize> = vec![];

    for node in PostOrder::new(root) {
        let right = match node.right() {
            Some(_) => heights.pop().unwrap_or_default(),
            None => 0,
        };
        let left = match node.left() {
            Some(_) => heights.pop().unwrap_or_default(),
            None => 0,
        };

        if left.abs_diff(right) > 1 {
            return false;
        }
        heights.push(1 + left.max(right));
    }

    true
}

use std::path::Path;

use bintree::{Node, Tree};
use color_eyre::Result;

use tree_tool::convert::{TreeFormat, read_tree};

/// Root 1, left child 2, right child 3 with children 4 and 5.
pub fn sample_tree() -> Tree {
    Tree::from(
        Node::new(1)
            .with_left(Node::new(2))
            .with_right(Node::new(3).with_left(Node::new(4)).with_right(Node::new(5))),
    )
}

pub fn get_tree(path: impl AsRef<Path>, format: TreeFormat) -> Result<Tree> {
    read_tree(path.as_ref(), format)
}

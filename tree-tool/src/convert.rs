use std::path::Path;

use bintree::Tree;
use clap::ValueEnum;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use crate::node_table::NodeTable;
use crate::tree_file::{read_serialized, write_serialized};

/// On-disk representations of a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// Pre-order tokens with null markers, e.g. `1,None,None,`
    Serialized,
    /// CSV node table with `node,left,right,value` columns
    Table,
}

pub fn read_tree(path: impl AsRef<Path>, format: TreeFormat) -> Result<Tree> {
    match format {
        TreeFormat::Serialized => read_serialized(path),
        TreeFormat::Table => NodeTable::read(path)?
            .into_tree()
            .wrap_err("Node table does not describe a tree"),
    }
}

pub fn write_tree(tree: &Tree, path: impl AsRef<Path>, format: TreeFormat) -> Result<()> {
    match format {
        TreeFormat::Serialized => write_serialized(tree, path),
        TreeFormat::Table => NodeTable::from_tree(tree).write(path),
    }
}

/// Read a tree in one format and write it back in another.
pub fn convert(
    input: impl AsRef<Path>,
    from: TreeFormat,
    output: impl AsRef<Path>,
    to: TreeFormat,
) -> Result<()> {
    let tree = read_tree(input, from).wrap_err("Could not read input tree")?;
    write_tree(&tree, output, to)
}

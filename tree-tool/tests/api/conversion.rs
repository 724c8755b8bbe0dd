use bintree::Tree;
use color_eyre::Result;
use pretty_assertions::assert_eq;
use tree_tool::convert::{TreeFormat, convert, write_tree};
use tree_tool::node_table::NodeTable;

use crate::helpers::{get_tree, sample_tree};

#[test]
fn serialized_file_reads_sample_tree() -> Result<()> {
    let tree = get_tree("./tests/test-trees/sample.tree", TreeFormat::Serialized)?;
    assert_eq!(tree, sample_tree());
    Ok(())
}

#[test]
fn blank_serialized_file_is_empty_tree() -> Result<()> {
    let tree = get_tree("./tests/test-trees/empty.tree", TreeFormat::Serialized)?;
    assert!(tree.is_empty());
    Ok(())
}

#[test]
fn malformed_serialized_files_are_rejected() {
    assert!(get_tree("./tests/test-trees/malformed.tree", TreeFormat::Serialized).is_err());
    assert!(get_tree("./tests/test-trees/truncated.tree", TreeFormat::Serialized).is_err());
}

#[test]
fn table_converts_to_serialized_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("sample.tree");

    convert(
        "./tests/test-trees/sample.csv",
        TreeFormat::Table,
        &output,
        TreeFormat::Serialized,
    )?;

    let written = std::fs::read_to_string(&output)?;
    assert_eq!(written, "1,2,None,None,3,4,None,None,5,None,None,\n");
    Ok(())
}

#[test]
fn serialized_file_converts_to_table() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("sample.csv");

    convert(
        "./tests/test-trees/sample.tree",
        TreeFormat::Serialized,
        &output,
        TreeFormat::Table,
    )?;

    let written = NodeTable::read(&output)?;
    let expected = NodeTable::read("./tests/test-trees/sample.csv")?;
    assert_eq!(written, expected);
    Ok(())
}

#[test]
fn chain_survives_a_round_trip_through_both_formats() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let serialized = dir.path().join("chain.tree");
    let table = dir.path().join("chain.csv");

    let original = get_tree("./tests/test-trees/chain.csv", TreeFormat::Table)?;
    write_tree(&original, &serialized, TreeFormat::Serialized)?;
    convert(&serialized, TreeFormat::Serialized, &table, TreeFormat::Table)?;

    assert_eq!(get_tree(&table, TreeFormat::Table)?, original);
    Ok(())
}

#[test]
fn empty_tree_round_trips_through_a_table() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let table = dir.path().join("empty.csv");

    write_tree(&Tree::empty(), &table, TreeFormat::Table)?;

    assert_eq!(std::fs::read_to_string(&table)?, "node,left,right,value\n");
    assert!(get_tree(&table, TreeFormat::Table)?.is_empty());
    Ok(())
}

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::{fs, io};

use bintree::{Node, Tree, Value};
use color_eyre::Result;
use color_eyre::eyre::{OptionExt, WrapErr, eyre};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Index of the root node in a table.
pub const ROOT_IDX: usize = 1;

/// Child index standing for "no child".
pub const NO_CHILD: usize = 0;

const HEADER: [&str; 4] = ["node", "left", "right", "value"];

/// A single row of a [`NodeTable`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node index. 1-indexed.
    #[serde(rename = "node")]
    pub node_idx: usize,
    /// Index of the left child, or 0 if there is none
    pub left: usize,
    /// Index of the right child, or 0 if there is none
    pub right: usize,
    pub value: Value,
}

impl NodeRecord {
    fn children(&self) -> impl Iterator<Item = usize> {
        [self.left, self.right]
            .into_iter()
            .filter(|&idx| idx != NO_CHILD)
    }
}

/// A tree described as a flat table of nodes, each pointing at its children
/// by index. This is the CSV layout the tool reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTable {
    records: Vec<NodeRecord>,
}

impl NodeTable {
    pub fn new(records: Vec<NodeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .wrap_err_with(|| format!("Could not open node table {}", path.display()))?;

        let table = Self::from_reader(file)?;
        info!("Read {} nodes from {}", table.records.len(), path.display());
        Ok(table)
    }

    pub fn from_reader<R: io::Read>(rdr: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: NodeRecord = result.wrap_err("Malformed node table row")?;
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = fs::File::create(path)
            .wrap_err_with(|| format!("Could not create node table {}", path.display()))?;

        self.to_writer(file)?;
        info!("Wrote {} nodes to {}", self.records.len(), path.display());
        Ok(())
    }

    pub fn to_writer<W: io::Write>(&self, wtr: W) -> Result<()> {
        // The header is written by hand so that an empty table still has one
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(wtr);

        wtr.write_record(HEADER)?;
        for record in &self.records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;

        Ok(())
    }

    /// Flatten a tree into a table. Nodes are numbered in pre-order, so the
    /// root is always node 1.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut records: Vec<NodeRecord> = Vec::new();

        // Each entry carries the row of its parent and which slot it fills
        let mut stack: Vec<(&Node, Option<(usize, bool)>)> =
            tree.root().into_iter().map(|root| (root, None)).collect();

        while let Some((node, parent)) = stack.pop() {
            let row = records.len();
            let node_idx = row + 1;

            if let Some((parent_row, is_left)) = parent {
                let parent = &mut records[parent_row];
                if is_left {
                    parent.left = node_idx;
                } else {
                    parent.right = node_idx;
                }
            }

            records.push(NodeRecord {
                node_idx,
                left: NO_CHILD,
                right: NO_CHILD,
                value: node.value(),
            });

            stack.extend(node.right().map(|right| (right, Some((row, false)))));
            stack.extend(node.left().map(|left| (left, Some((row, true)))));
        }

        Self { records }
    }

    /// Rebuild the tree described by this table.
    ///
    /// The table must describe exactly one tree rooted at node 1: indices are
    /// unique, every child exists and has a single parent, the root is nobody's
    /// child, and every node is reachable from the root.
    pub fn into_tree(self) -> Result<Tree> {
        if self.records.is_empty() {
            return Ok(Tree::empty());
        }

        let mut rows = HashMap::with_capacity(self.records.len());
        for record in &self.records {
            if record.node_idx == NO_CHILD {
                return Err(eyre!("Node index 0 is reserved for missing children"));
            }
            if let Entry::Vacant(e) = rows.entry(record.node_idx) {
                e.insert(record);
            } else {
                return Err(eyre!("Node {} is defined more than once", record.node_idx));
            }
        }

        if !rows.contains_key(&ROOT_IDX) {
            return Err(eyre!("Table has no root node (node {ROOT_IDX})"));
        }

        let mut parents = HashMap::with_capacity(self.records.len());
        for record in &self.records {
            for child in record.children() {
                if !rows.contains_key(&child) {
                    return Err(eyre!(
                        "Node {} points at node {child}, which doesn't exist",
                        record.node_idx
                    ));
                }
                if child == ROOT_IDX {
                    return Err(eyre!(
                        "Node {} points at the root node {ROOT_IDX}",
                        record.node_idx
                    ));
                }
                match parents.entry(child) {
                    Entry::Vacant(e) => {
                        e.insert(record.node_idx);
                    }
                    Entry::Occupied(e) => {
                        return Err(eyre!(
                            "Node {child} has more than one parent (nodes {} and {})",
                            e.get(),
                            record.node_idx
                        ));
                    }
                }
            }
        }
        debug!("Node table links are consistent, building tree");

        // Every node but the root has exactly one parent, so this walk from
        // the root visits each reachable node once and terminates.
        let mut built: HashMap<usize, Node> = HashMap::new();
        let mut visited = 0;
        let mut stack = vec![(ROOT_IDX, false)];

        while let Some((idx, expanded)) = stack.pop() {
            let record = rows[&idx];

            if !expanded {
                stack.push((idx, true));
                stack.extend(record.children().map(|child| (child, false)));
                continue;
            }

            let mut node = Node::new(record.value);
            if record.left != NO_CHILD {
                let left = built
                    .remove(&record.left)
                    .ok_or_eyre("Left child was not built before its parent")?;
                node.set_left(left);
            }
            if record.right != NO_CHILD {
                let right = built
                    .remove(&record.right)
                    .ok_or_eyre("Right child was not built before its parent")?;
                node.set_right(right);
            }

            built.insert(idx, node);
            visited += 1;
        }

        if visited != rows.len() {
            return Err(eyre!(
                "{} nodes are not reachable from the root node",
                rows.len() - visited
            ));
        }

        let root = built
            .remove(&ROOT_IDX)
            .ok_or_eyre("Root node was not built")?;
        Ok(Tree::from(root))
    }
}

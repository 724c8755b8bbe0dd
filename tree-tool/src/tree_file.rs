use std::fs;
use std::io::Write;
use std::path::Path;

use bintree::Tree;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use log::info;

/// Read a file holding one serialized tree. Surrounding whitespace, such as
/// the final newline, is ignored.
pub fn read_serialized(path: impl AsRef<Path>) -> Result<Tree> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Could not read serialized tree {}", path.display()))?;

    let tree = Tree::deserialize(text.trim())
        .wrap_err_with(|| format!("Malformed serialized tree in {}", path.display()))?;

    info!("Read {} nodes from {}", tree.count_nodes(), path.display());
    Ok(tree)
}

pub fn write_serialized(tree: &Tree, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = fs::File::create(path)
        .wrap_err_with(|| format!("Could not create output file {}", path.display()))?;

    writeln!(file, "{tree}")?;

    info!("Wrote {} nodes to {}", tree.count_nodes(), path.display());
    Ok(())
}

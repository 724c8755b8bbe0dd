use alloc::{string::String, vec};
use core::fmt::{self, Write};

use crate::Node;

use super::{NULL_TOKEN, SEPARATOR};

/// Encode the tree rooted at `root` (or the empty tree) as a string.
pub fn serialize(root: Option<&Node>) -> String {
    let mut out = String::new();

    // Writing into a `String` never fails
    let _ = write_tokens(root, &mut out);

    out
}

/// Stream the encoding of `root` into any formatter or writer.
pub fn write_tokens<W: Write>(root: Option<&Node>, out: &mut W) -> fmt::Result {
    // Slots still to be written, the top of the stack being the next one in
    // pre-order. Right is pushed before left so that left comes out first.
    let mut slots = vec![root];

    while let Some(slot) = slots.pop() {
        match slot {
            Some(node) => {
                write!(out, "{}", node.value())?;
                slots.push(node.right());
                slots.push(node.left());
            }
            None => out.write_str(NULL_TOKEN)?,
        }
        out.write_char(SEPARATOR)?;
    }

    Ok(())
}

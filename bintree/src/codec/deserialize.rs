use alloc::{boxed::Box, vec::Vec};
use core::str::Split;

use log::debug;

use crate::{Error, Node, Value};

use super::{NULL_TOKEN, SEPARATOR};

/// Cursor over the tokens of a serialized tree.
struct Tokens<'a> {
    pieces: Split<'a, char>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        // The encoder terminates every token, so the final separator closes
        // the last token rather than opening an empty one.
        let body = text.strip_suffix(SEPARATOR).unwrap_or(text);
        Self {
            pieces: body.split(SEPARATOR),
            position: 0,
        }
    }

    /// Consume one token: `Some(value)` for a node, `None` for the null marker.
    fn next_slot(&mut self) -> Result<Option<Value>, Error> {
        let position = self.position;
        let token = self
            .pieces
            .next()
            .ok_or(Error::UnexpectedEnd { position })?;
        self.position += 1;

        if token == NULL_TOKEN {
            return Ok(None);
        }

        token
            .parse::<Value>()
            .map(Some)
            .map_err(|_| Error::InvalidToken { position })
    }

    /// Ensure the whole input was consumed.
    fn finish(mut self) -> Result<(), Error> {
        match self.pieces.next() {
            Some(_) => Err(Error::TrailingTokens {
                position: self.position,
            }),
            None => Ok(()),
        }
    }
}

/// A node whose subtrees are still being read.
struct Open {
    node: Box<Node>,
    left: Option<Box<Node>>,
    left_done: bool,
}

impl Open {
    fn new(value: Value) -> Self {
        Self {
            node: Box::new(Node::new(value)),
            left: None,
            left_done: false,
        }
    }
}

/// Hand a finished subtree to the innermost open node. Every node that gets
/// its right subtree this way is finished in turn and handed further up.
///
/// Returns the root once the outermost node is finished.
fn close(open: &mut Vec<Open>, mut child: Option<Box<Node>>) -> Option<Option<Box<Node>>> {
    loop {
        let Some(mut parent) = open.pop() else {
            return Some(child);
        };

        if !parent.left_done {
            parent.left = child;
            parent.left_done = true;
            open.push(parent);
            return None;
        }

        parent.node.set_children(parent.left, child);
        child = Some(parent.node);
    }
}

fn build(tokens: &mut Tokens<'_>) -> Result<Option<Box<Node>>, Error> {
    let mut open = Vec::new();

    loop {
        match tokens.next_slot()? {
            Some(value) => open.push(Open::new(value)),
            None => {
                if let Some(root) = close(&mut open, None) {
                    return Ok(root);
                }
            }
        }
    }
}

/// Decode a tree produced by [`serialize`](super::serialize).
///
/// An empty string decodes to the empty tree. Input that doesn't describe
/// exactly one tree is rejected with the position of the first bad token.
pub fn deserialize(text: &str) -> Result<Option<Box<Node>>, Error> {
    if text.is_empty() {
        return Ok(None);
    }

    let mut tokens = Tokens::new(text);
    build(&mut tokens)
        .and_then(|root| {
            tokens.finish()?;
            Ok(root)
        })
        .inspect_err(|err| debug!("Rejected serialized tree: {err}"))
}

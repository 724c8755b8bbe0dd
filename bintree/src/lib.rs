#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod codec;
pub mod node;
pub mod query;
pub mod traversal;
pub mod tree;

pub use node::{Node, Value};
pub use tree::Tree;

/// Failure to decode a serialized tree. `position` is the zero-based index of
/// the offending token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input ran out while a subtree was still open.
    #[error("Malformed tree: input ends at token {position}")]
    UnexpectedEnd { position: usize },
    /// A token is neither an integer literal nor the null marker.
    #[error("Malformed tree: invalid token at position {position}")]
    InvalidToken { position: usize },
    /// The tree was complete but more tokens followed.
    #[error("Malformed tree: unexpected tokens from position {position}")]
    TrailingTokens { position: usize },
}

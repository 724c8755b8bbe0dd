//! Flat textual encoding of a tree.
//!
//! A tree is written as its pre-order walk with explicit null markers, every
//! token followed by [`SEPARATOR`]:
//!
//! ```text
//! Tree := "None," | Value "," Tree Tree
//! ```
//!
//! The tree `1(2, 3(4, 5))` encodes to `1,2,None,None,3,4,None,None,5,None,None,`.
//! The empty tree is the null marker with its separator, `None,`.
//! [`deserialize`] also accepts the input without its final separator.

pub mod deserialize;
pub mod serialize;

pub use deserialize::deserialize;
pub use serialize::{serialize, write_tokens};

/// Token separator.
pub const SEPARATOR: char = ',';

/// Token standing for an absent child.
pub const NULL_TOKEN: &str = "None";


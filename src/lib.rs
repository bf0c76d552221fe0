//! An ordered associative container implemented with a self-adjusting binary search tree.
//!
//! A splay tree restructures itself on every access so that recently used keys stay close to the
//! root. Lookups, insertions, and removals all rotate the touched key (or the last node visited by
//! a failed search) to the root, giving amortized logarithmic cost without storing any per-node
//! balance metadata beyond a cached height.

#[macro_use]
extern crate serde_derive;

mod entry;
mod map;
mod node;
mod tree;

pub use self::map::{SplayTree, SplayTreeIntoIter, SplayTreeIter};

use std::cmp::Ordering;
use std::error;
use std::fmt;
use std::result;

/// A three-way comparison function defining the total order over keys.
///
/// The comparator must be a strict weak ordering and must not change for the lifetime of a
/// non-empty tree. Non-capturing closures coerce to this type.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Returned by `add_root` when the tree already has a root.
    RootExists,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::RootExists => write!(f, "root already exists"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

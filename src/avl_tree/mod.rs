//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! Every node caches its height and balance factor. Both are recomputed bottom-up on the way
//! back from each insertion or removal, and a single or double rotation is applied at any node
//! whose balance factor leaves `[-1, 1]`, so the height of the tree stays logarithmic in its
//! size.

mod balanced_tree;
mod node;
#[cfg(feature = "serde")]
mod serialize;
#[cfg(test)]
mod test_utils;
mod tree;

pub use self::balanced_tree::{BalancedTree, BalancedTreeIntoIter, BalancedTreeIter};
pub use self::node::Node;

use std::result;
use thiserror::Error;

/// Errors reported by `BalancedTree<T>`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A `None` was passed where a value was required. The string names the argument.
    #[error("invalid argument: {0} is absent")]
    InvalidArgument(&'static str),
    /// The requested value is not stored in the tree.
    #[error("value not found in tree")]
    NotFound,
}

pub type Result<T> = result::Result<T, Error>;

//! An ordered container backed by an avl tree whose per-node height and balance factor are
//! maintained explicitly and exposed for structural inspection.

#[macro_use]
extern crate log;
#[cfg(feature = "serde")]
extern crate serde;
extern crate thiserror;

pub mod avl_tree;

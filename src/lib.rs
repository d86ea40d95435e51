//! A handful of small exercises, the two interesting ones being an
//! immutable Binary Search Tree (BST) and a quaternion value type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has two children, either of which may be empty. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! The tree in [`functional`] never changes once built. Inserting returns a
//! new tree that shares every subtree it didn't have to touch with the old
//! one, so keeping old versions around is cheap.
//!
//! ## Quaternions
//!
//! [`quaternion::Quaternion`] extends complex numbers with two more
//! imaginary units, `j` and `k`, where `i² = j² = k² = ijk = -1`. Their
//! multiplication is not commutative.
//!
//! ## The rest
//!
//! - [`change`]: greedy coin change.
//! - [`strings`]: lower-case the first string matching a predicate.
//! - [`say`]: an immutable phrase builder.
//! - [`lines`]: count the non-blank, non-comment lines of a file.
//! - [`powers`]: powers of a base up to a limit.
//!
//! The fallible ones return this crate's [`Error`]. Nothing here installs a
//! `tracing` subscriber; the few events emitted go wherever the caller
//! sends them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod change;
pub mod error;
pub mod functional;
pub mod lines;
pub mod powers;
pub mod quaternion;
pub mod say;
pub mod strings;


pub use error::{Error, Result};

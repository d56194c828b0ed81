//! # permutree
//!
//! Permutation trees over small alphabets of distinct `char` symbols, with
//! lexicographic enumeration and direct rank-based retrieval.
//!
//! ## Overview
//!
//! A [`PermutationTree`](tree::PermutationTree) materializes every
//! permutation of its alphabet as a root-to-leaf path: the roots are the
//! sorted symbols, and below any node the children are the symbols not yet
//! used on the path down to it, again sorted. Sibling order makes the
//! left-to-right leaf order lexicographic, which supports two retrieval
//! strategies for the permutation of a given 1-based rank:
//!
//! - **Enumeration**: depth-first traversal collects every permutation, then
//!   the rank indexes into the list — O(n · n!) no matter the rank.
//! - **Descent**: the 0-based rank is read as a factorial-number-system
//!   numeral, selecting one child per level — O(n²), no enumeration.
//!
//! Out-of-range ranks, an empty alphabet, and alphabets whose `n!` overflows
//! the `u64` counting domain all soft-fail with `None`; nothing panics.
//!
//! ## Example
//!
//! ```rust
//! use permutree::prelude::*;
//!
//! let tree = PermutationTree::new(['1', '2', '3']);
//!
//! let all: Vec<String> =
//!     tree.all_permutations().iter().map(|permutation| permutation.to_string()).collect();
//! assert_eq!(all, vec!["123", "132", "213", "231", "312", "321"]);
//!
//! assert_eq!(tree.permutation_by_descent(2).unwrap(), "132");
//! assert_eq!(tree.permutation_by_enumeration(5).unwrap(), "312");
//! assert_eq!(tree.permutation_by_descent(7), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of the crate.
///
/// # Usage
///
/// ```rust
/// use permutree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::factorial::factorial;
    pub use crate::permutation::Permutation;
    pub use crate::retrieval::Permutations;
    pub use crate::tree::PermutationTree;
}

pub mod factorial;
pub mod permutation;
pub mod retrieval;
pub mod tree;

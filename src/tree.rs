//! The materialized permutation tree.
//!
//! This module provides [`PermutationTree`], a tree whose root-to-leaf paths
//! are exactly the permutations of a small alphabet of distinct `char`
//! symbols, in lexicographic order.
//!
//! # Overview
//!
//! Construction sorts the alphabet ascending and places one root node per
//! symbol; below any node, the children are the symbols not yet used on the
//! path down to it, again in ascending order. A tree over `n` symbols
//! therefore has exactly `n!` leaves, one per permutation, and sibling order
//! makes the left-to-right leaf order lexicographic.
//!
//! The tree is immutable once built. Retrieval operations live in
//! [`crate::retrieval`] and only ever read the node forest, so shared
//! references to one tree may be used freely, including from several threads.
//!
//! # Examples
//!
//! ```rust
//! use permutree::prelude::*;
//!
//! // Input order does not matter; the alphabet is sorted internally.
//! let tree = PermutationTree::from("312");
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.permutation_count(), Some(6));
//! assert_eq!(tree.symbols().collect::<String>(), "123");
//! ```
//!
//! # Internal Structure
//!
//! The node forest maintains the following invariants:
//!
//! 1. Every path from a root node to a leaf has length exactly `n`
//! 2. The children of any node are the alphabet minus the symbols already
//!    used on the path to it, sorted ascending
//! 3. Root-level siblings are sorted ascending
//! 4. Nothing mutates the forest after construction
//!
//! Each node exclusively owns its children, so dropping the tree releases
//! every node through plain recursive drop, with recursion depth bounded by
//! the alphabet size.

use crate::factorial::factorial;
use crate::permutation::INLINE_SYMBOLS;
use smallvec::SmallVec;
use std::fmt;

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node of the permutation tree.
///
/// A node places one symbol at one position of a partial permutation; its
/// children cover the symbols still unplaced, in ascending order.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) value: char,
    pub(crate) children: Vec<Node>,
}

/// Builds one tree level: a node per available symbol, each carrying the
/// subtree for the remaining symbols.
fn build_children(available: &[char]) -> Vec<Node> {
    available
        .iter()
        .enumerate()
        .map(|(position, &symbol)| {
            let mut remaining: SmallVec<[char; INLINE_SYMBOLS]> =
                SmallVec::with_capacity(available.len().saturating_sub(1));
            remaining.extend_from_slice(&available[..position]);
            remaining.extend_from_slice(&available[position + 1..]);

            Node {
                value: symbol,
                children: build_children(&remaining),
            }
        })
        .collect()
}

// =============================================================================
// PermutationTree Definition
// =============================================================================

/// A tree materializing every permutation of an alphabet of distinct
/// `char` symbols.
///
/// The tree is built once from the input alphabet and is read-only
/// afterwards. Each root-to-leaf path spells one permutation; paths are
/// arranged so that visiting leaves left to right yields the permutations in
/// lexicographic order over the sorted alphabet.
///
/// # Time Complexity
///
/// | Operation                                                    | Complexity |
/// |--------------------------------------------------------------|------------|
/// | [`new`](Self::new)                                           | O(n · n!)  |
/// | [`len`](Self::len) / [`is_empty`](Self::is_empty)            | O(1)       |
/// | [`permutation_count`](Self::permutation_count)               | O(n)       |
/// | [`all_permutations`](Self::all_permutations)                 | O(n · n!)  |
/// | [`permutation_by_enumeration`](Self::permutation_by_enumeration) | O(n · n!) |
/// | [`permutation_by_descent`](Self::permutation_by_descent)     | O(n²)      |
///
/// Memory is the dominant cost: the node forest holds roughly `e · n!`
/// nodes, so trees beyond a dozen or so symbols are not practical to
/// materialize.
///
/// # Examples
///
/// ```rust
/// use permutree::prelude::*;
///
/// let tree = PermutationTree::new(['1', '2', '3']);
///
/// assert_eq!(tree.permutation_by_descent(2).unwrap(), "132");
/// assert_eq!(tree.permutation_by_enumeration(5).unwrap(), "312");
/// ```
#[derive(Clone)]
pub struct PermutationTree {
    /// Root-level nodes, one per alphabet symbol, sorted ascending.
    roots: Vec<Node>,
    /// Number of distinct symbols in the alphabet.
    size: usize,
}

impl PermutationTree {
    /// Builds the permutation tree for the given alphabet.
    ///
    /// The input is copied, sorted ascending, and deduplicated before the
    /// forest is built, so neither the order of the input nor repeated
    /// symbols affect the result: the alphabet is a set.
    ///
    /// An empty input produces an empty tree with no root nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// let tree = PermutationTree::new("bca".chars());
    /// assert_eq!(tree.symbols().collect::<String>(), "abc");
    ///
    /// // Duplicates collapse; {'a', 'a', 'b'} is the two-symbol alphabet {a, b}.
    /// let deduplicated = PermutationTree::new(['a', 'a', 'b']);
    /// assert_eq!(deduplicated.len(), 2);
    /// ```
    #[must_use]
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut alphabet: Vec<char> = symbols.into_iter().collect();
        alphabet.sort_unstable();
        alphabet.dedup();

        Self {
            size: alphabet.len(),
            roots: build_children(&alphabet),
        }
    }

    /// Returns the number of distinct symbols in the alphabet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// assert_eq!(PermutationTree::from("abc").len(), 3);
    /// assert_eq!(PermutationTree::default().len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the alphabet is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the alphabet symbols in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// let tree = PermutationTree::from("cab");
    /// let alphabet: Vec<char> = tree.symbols().collect();
    /// assert_eq!(alphabet, vec!['a', 'b', 'c']);
    /// ```
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.roots.iter().map(|root| root.value)
    }

    /// Returns the total number of permutations in the tree, `n!`.
    ///
    /// Returns `None` when the count is not representable in a `u64`, which
    /// is the case for alphabets of more than 20 symbols.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// assert_eq!(PermutationTree::from("abc").permutation_count(), Some(6));
    /// assert_eq!(PermutationTree::default().permutation_count(), Some(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn permutation_count(&self) -> Option<u64> {
        factorial(self.size as u64)
    }

    /// Root-level nodes, for the retrieval algorithms.
    #[inline]
    pub(crate) fn roots(&self) -> &[Node] {
        &self.roots
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for PermutationTree {
    #[inline]
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl FromIterator<char> for PermutationTree {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&str> for PermutationTree {
    /// Builds the tree over the characters of the string.
    fn from(symbols: &str) -> Self {
        Self::new(symbols.chars())
    }
}

impl fmt::Debug for PermutationTree {
    /// Formats the alphabet rather than the node forest, which is
    /// exponentially large.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PermutationTree")
            .field("symbols", &self.symbols().collect::<String>())
            .field("size", &self.size)
            .finish()
    }
}

// Retrieval from shared references is the whole read API, so the tree must
// stay shareable across threads.
static_assertions::assert_impl_all!(PermutationTree: Send, Sync);
static_assertions::assert_impl_all!(crate::permutation::Permutation: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

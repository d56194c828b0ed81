//! Retrieval of permutations from a built tree.
//!
//! Two independent strategies answer "which permutation holds rank `r`?":
//!
//! - [`permutation_by_enumeration`](crate::tree::PermutationTree::permutation_by_enumeration)
//!   materializes every permutation via depth-first traversal and indexes
//!   into the list — the naive O(n · n!) baseline.
//! - [`permutation_by_descent`](crate::tree::PermutationTree::permutation_by_descent)
//!   reads the 0-based rank as a factorial-number-system numeral and walks
//!   one child per tree level, O(n²) with no enumeration.
//!
//! Both share the soft-failure contract: rank 0, a rank beyond `n!`, an
//! empty alphabet, or an unrepresentable `n!` all yield `None`, never a
//! panic. The lazy [`Permutations`] iterator backs the enumeration side.

use crate::factorial::factorial;
use crate::permutation::{INLINE_SYMBOLS, Permutation};
use crate::tree::{Node, PermutationTree};
use smallvec::SmallVec;
use std::iter::FusedIterator;

// =============================================================================
// Retrieval Operations
// =============================================================================

impl PermutationTree {
    /// Returns a lazy iterator over every permutation in lexicographic order.
    ///
    /// The iterator walks the node forest depth-first, left to right, so the
    /// k-th item (0-based) is the permutation of rank `k + 1`. Nothing is
    /// materialized ahead of time; each step costs amortized O(1) node
    /// visits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// let tree = PermutationTree::from("ab");
    /// let rendered: Vec<String> =
    ///     tree.permutations().map(|permutation| permutation.to_string()).collect();
    ///
    /// assert_eq!(rendered, vec!["ab", "ba"]);
    /// ```
    #[must_use]
    pub fn permutations(&self) -> Permutations<'_> {
        let mut stack: Vec<(&Node, usize)> = Vec::with_capacity(self.len() * self.len() + 1);
        stack.extend(self.roots().iter().rev().map(|root| (root, 0)));

        Permutations {
            stack,
            path: SmallVec::with_capacity(self.len()),
            upper_bound: self
                .permutation_count()
                .and_then(|count| usize::try_from(count).ok()),
        }
    }

    /// Returns every permutation of the alphabet, in lexicographic order.
    ///
    /// The list holds exactly `n!` permutations of length `n` each; an empty
    /// alphabet yields an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// let tree = PermutationTree::new(['1', '2', '3']);
    /// let all = tree.all_permutations();
    ///
    /// assert_eq!(all.len(), 6);
    /// assert_eq!(all[0], "123");
    /// assert_eq!(all[5], "321");
    /// ```
    #[must_use]
    pub fn all_permutations(&self) -> Vec<Permutation> {
        self.permutations().collect()
    }

    /// Returns the permutation of the given 1-based rank by enumerating the
    /// full list and indexing into it.
    ///
    /// This is the deliberately naive strategy: for any valid rank it pays
    /// the full O(n · n!) enumeration cost. Returns `None` for rank 0, for a
    /// rank beyond `n!`, for an empty alphabet, and when `n!` itself is not
    /// representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// let tree = PermutationTree::new(['1', '2', '3']);
    ///
    /// assert_eq!(tree.permutation_by_enumeration(5).unwrap(), "312");
    /// assert_eq!(tree.permutation_by_enumeration(0), None);
    /// assert_eq!(tree.permutation_by_enumeration(7), None);
    /// ```
    #[must_use]
    pub fn permutation_by_enumeration(&self, rank: u64) -> Option<Permutation> {
        if self.is_empty() {
            return None;
        }

        let total = self.permutation_count()?;
        if rank == 0 || rank > total {
            return None;
        }

        let position = usize::try_from(rank - 1).ok()?;
        self.all_permutations().into_iter().nth(position)
    }

    /// Returns the permutation of the given 1-based rank by direct
    /// factorial-number-system descent.
    ///
    /// The 0-based rank is split level by level: with `r` symbols still
    /// unplaced below a choice, each child subtree holds `r!` permutations,
    /// so dividing by that block size selects the child and the remainder
    /// becomes the rank within it. No sibling subtree is ever visited.
    ///
    /// Soft-failure conditions match
    /// [`permutation_by_enumeration`](Self::permutation_by_enumeration):
    /// rank 0, rank beyond `n!`, empty alphabet, or unrepresentable `n!` all
    /// return `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// let tree = PermutationTree::new(['1', '2', '3']);
    ///
    /// assert_eq!(tree.permutation_by_descent(2).unwrap(), "132");
    /// assert_eq!(tree.permutation_by_descent(6).unwrap(), "321");
    /// assert_eq!(tree.permutation_by_descent(7), None);
    /// ```
    #[must_use]
    pub fn permutation_by_descent(&self, rank: u64) -> Option<Permutation> {
        if self.is_empty() {
            return None;
        }

        let size = self.len() as u64;
        let total = self.permutation_count()?;
        if rank == 0 || rank > total {
            return None;
        }

        let mut remainder = rank - 1;
        let mut siblings = self.roots();
        let mut symbols: SmallVec<[char; INLINE_SYMBOLS]> = SmallVec::with_capacity(self.len());

        for step in 0..size {
            let unplaced = size - 1 - step;
            // Representable because unplaced! divides n!, which fit above.
            let block = factorial(unplaced)?;
            let index = usize::try_from(remainder / block).ok()?;
            let chosen = siblings.get(index)?;

            symbols.push(chosen.value);
            remainder %= block;
            siblings = &chosen.children;
        }

        Some(Permutation::new(symbols))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A lazy iterator over the permutations of a [`PermutationTree`], in
/// lexicographic order.
///
/// Created by [`PermutationTree::permutations`]. The traversal keeps an
/// explicit node stack and a shared path buffer instead of recursing, so
/// iteration uses constant stack space regardless of alphabet size.
pub struct Permutations<'a> {
    /// Pending nodes with the depth they sit at, rightmost sibling pushed
    /// first so the leftmost is visited next.
    stack: Vec<(&'a Node, usize)>,
    /// Symbols of the path from a root to the node most recently visited.
    path: SmallVec<[char; INLINE_SYMBOLS]>,
    /// Permutations not yet yielded, when `n!` is representable.
    upper_bound: Option<usize>,
}

impl Iterator for Permutations<'_> {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            // Backtrack: discard the symbols of siblings already explored.
            self.path.truncate(depth);
            self.path.push(node.value);

            if node.children.is_empty() {
                self.upper_bound = self.upper_bound.map(|bound| bound.saturating_sub(1));
                return Some(Permutation::from_path(&self.path));
            }

            self.stack
                .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stack.is_empty() {
            (0, Some(0))
        } else {
            (1, self.upper_bound)
        }
    }
}

impl FusedIterator for Permutations<'_> {}

static_assertions::assert_impl_all!(Permutations<'static>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

//! The [`Permutation`] value type.
//!
//! A [`Permutation`] is one ordering of all symbols of a tree's alphabet,
//! read off a root-to-leaf path. Values are produced by
//! [`PermutationTree`](crate::tree::PermutationTree) retrieval calls and are
//! read-only afterwards; two permutations compare lexicographically, and a
//! permutation compares directly against string literals for convenience.

use smallvec::SmallVec;
use std::fmt;
use std::slice;

/// Permutations of up to this many symbols are stored inline, without a heap
/// allocation.
pub(crate) const INLINE_SYMBOLS: usize = 8;

/// One ordering of all symbols of an alphabet.
///
/// Produced by the retrieval operations of
/// [`PermutationTree`](crate::tree::PermutationTree); a permutation is never
/// constructed directly. Symbols are exposed in placement order, first chosen
/// symbol first.
///
/// # Examples
///
/// ```rust
/// use permutree::prelude::*;
///
/// let tree = PermutationTree::from("132");
/// let permutation = tree.permutation_by_descent(2).unwrap();
///
/// assert_eq!(permutation, "132");
/// assert_eq!(permutation.to_string(), "132");
/// assert_eq!(permutation.symbols(), &['1', '3', '2']);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permutation {
    symbols: SmallVec<[char; INLINE_SYMBOLS]>,
}

impl Permutation {
    /// Wraps an already-ordered symbol sequence.
    pub(crate) const fn new(symbols: SmallVec<[char; INLINE_SYMBOLS]>) -> Self {
        Self { symbols }
    }

    /// Copies the current contents of a traversal path buffer.
    pub(crate) fn from_path(path: &[char]) -> Self {
        Self {
            symbols: SmallVec::from_slice(path),
        }
    }

    /// Returns the number of symbols in this permutation.
    ///
    /// This always equals the size of the alphabet the permutation was
    /// retrieved from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// let tree = PermutationTree::from("abc");
    /// let permutation = tree.permutation_by_descent(1).unwrap();
    /// assert_eq!(permutation.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if this permutation contains no symbols.
    ///
    /// Retrieval never produces an empty permutation (an empty alphabet
    /// soft-fails instead), so this is `false` for every value obtained
    /// through the public API.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbols in placement order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permutree::prelude::*;
    ///
    /// let tree = PermutationTree::from("ab");
    /// let permutation = tree.permutation_by_enumeration(2).unwrap();
    /// assert_eq!(permutation.symbols(), &['b', 'a']);
    /// ```
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns an iterator over the symbols in placement order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, char> {
        self.symbols.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl AsRef<[char]> for Permutation {
    #[inline]
    fn as_ref(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(formatter, "{symbol}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.symbols.iter().collect();
        formatter.debug_tuple("Permutation").field(&rendered).finish()
    }
}

impl PartialEq<str> for Permutation {
    fn eq(&self, other: &str) -> bool {
        self.symbols.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for Permutation {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<Permutation> for str {
    fn eq(&self, other: &Permutation) -> bool {
        other == self
    }
}

impl PartialEq<Permutation> for &str {
    fn eq(&self, other: &Permutation) -> bool {
        other == *self
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = &'a char;
    type IntoIter = slice::Iter<'a, char>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over the symbols of a [`Permutation`].
pub struct PermutationIntoIterator {
    symbols: SmallVec<[char; INLINE_SYMBOLS]>,
    current_index: usize,
}

impl Iterator for PermutationIntoIterator {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.symbols.len() {
            None
        } else {
            let symbol = self.symbols[self.current_index];
            self.current_index += 1;
            Some(symbol)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.symbols.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PermutationIntoIterator {
    fn len(&self) -> usize {
        self.symbols.len().saturating_sub(self.current_index)
    }
}

impl IntoIterator for Permutation {
    type Item = char;
    type IntoIter = PermutationIntoIterator;

    fn into_iter(self) -> Self::IntoIter {
        PermutationIntoIterator {
            symbols: self.symbols,
            current_index: 0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Property-based tests for permutation retrieval.
//!
//! These tests verify the counting, ordering, and strategy-agreement laws of
//! the permutation tree using proptest.

use permutree::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for an input alphabet: up to eight symbols drawn from a
/// six-character pool, so duplicates and unsorted orders occur while the
/// deduplicated size stays at most 6 (720 permutations).
fn arbitrary_alphabet() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'f'), 0..8)
}

// =============================================================================
// Counting and Shape Laws
// =============================================================================

proptest! {
    /// Law: the number of permutations is exactly n! for the deduplicated
    /// alphabet size n.
    #[test]
    fn prop_enumeration_count_is_factorial(alphabet in arbitrary_alphabet()) {
        let tree = PermutationTree::new(alphabet);
        let expected = factorial(tree.len() as u64).unwrap();

        let all = tree.all_permutations();
        if tree.is_empty() {
            prop_assert!(all.is_empty());
        } else {
            prop_assert_eq!(all.len() as u64, expected);
        }
    }

    /// Law: every permutation has length n and is a rearrangement of the
    /// alphabet.
    #[test]
    fn prop_each_permutation_rearranges_the_alphabet(alphabet in arbitrary_alphabet()) {
        let tree = PermutationTree::new(alphabet);
        let sorted_alphabet: Vec<char> = tree.symbols().collect();

        for permutation in tree.permutations() {
            prop_assert_eq!(permutation.len(), tree.len());

            let mut symbols: Vec<char> = permutation.symbols().to_vec();
            symbols.sort_unstable();
            prop_assert_eq!(&symbols, &sorted_alphabet);
        }
    }

    /// Law: the enumerated list is strictly lexicographically ascending.
    #[test]
    fn prop_enumeration_is_strictly_ascending(alphabet in arbitrary_alphabet()) {
        let tree = PermutationTree::new(alphabet);
        let all = tree.all_permutations();

        for window in all.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }

    /// Law: the lazy iterator and the materialized list agree.
    #[test]
    fn prop_iterator_matches_materialized_list(alphabet in arbitrary_alphabet()) {
        let tree = PermutationTree::new(alphabet);
        let lazy: Vec<Permutation> = tree.permutations().collect();
        prop_assert_eq!(lazy, tree.all_permutations());
    }
}

// =============================================================================
// Rank Retrieval Laws
// =============================================================================

proptest! {
    /// Law: for every valid rank, both strategies return the permutation at
    /// that position of the enumerated list.
    #[test]
    fn prop_strategies_agree_at_valid_ranks(
        alphabet in arbitrary_alphabet(),
        rank_seed: u64
    ) {
        let tree = PermutationTree::new(alphabet);
        prop_assume!(!tree.is_empty());

        let total = tree.permutation_count().unwrap();
        let rank = rank_seed % total + 1;
        let position = usize::try_from(rank - 1).unwrap();

        let enumerated = tree.permutation_by_enumeration(rank).unwrap();
        let direct = tree.permutation_by_descent(rank).unwrap();
        let indexed = tree.all_permutations()[position].clone();

        prop_assert_eq!(&enumerated, &direct);
        prop_assert_eq!(&enumerated, &indexed);
    }

    /// Law: rank 0 and ranks beyond n! soft-fail with None for both
    /// strategies.
    #[test]
    fn prop_out_of_range_ranks_yield_none(
        alphabet in arbitrary_alphabet(),
        excess in 1_u64..1000
    ) {
        let tree = PermutationTree::new(alphabet);
        let beyond = tree.permutation_count().unwrap() + excess;

        prop_assert_eq!(tree.permutation_by_enumeration(0), None);
        prop_assert_eq!(tree.permutation_by_descent(0), None);
        prop_assert_eq!(tree.permutation_by_enumeration(beyond), None);
        prop_assert_eq!(tree.permutation_by_descent(beyond), None);
    }

    /// Law: the input order of the alphabet never affects any retrieval.
    #[test]
    fn prop_input_order_is_irrelevant(alphabet in arbitrary_alphabet()) {
        let tree = PermutationTree::new(alphabet.clone());

        let mut sorted = alphabet;
        sorted.sort_unstable();
        sorted.reverse();
        let reversed_tree = PermutationTree::new(sorted);

        prop_assert_eq!(tree.all_permutations(), reversed_tree.all_permutations());
    }
}

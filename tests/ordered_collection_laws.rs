//! Property-based tests for Collection.
//!
//! These tests check the quantified invariants of the OrderedCollection operations over randomly
//! generated collections.

use ordered_collection::{Collection, IndexOutOfBounds, NoSuchElement, OrderedCollection};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating Collection
// =============================================================================

/// Generates a `Collection<i32>` with up to `max_size` elements.
fn collection_strategy(max_size: usize) -> impl Strategy<Value = Collection<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(Collection::from)
}

/// Generates a small `Collection<i8>`, so that searches hit duplicates often.
fn small_collection() -> impl Strategy<Value = Collection<i8>> {
    prop::collection::vec(-8_i8..8, 0..20).prop_map(Collection::from)
}

proptest! {
    // =========================================================================
    // Size and emptiness
    // =========================================================================

    #[test]
    fn prop_size_matches_iter_count(collection in collection_strategy(50)) {
        prop_assert_eq!(collection.size(), collection.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_size_zero(collection in collection_strategy(5)) {
        prop_assert_eq!(collection.is_empty(), collection.size() == 0);
        prop_assert_eq!(collection.is_not_empty(), !collection.is_empty());
    }

    // =========================================================================
    // Indexed access
    // =========================================================================

    #[test]
    fn prop_element_at_agrees_with_or_none(collection in collection_strategy(30)) {
        for index in 0..collection.size() {
            prop_assert_eq!(collection.element_at(index).ok(), collection.element_at_or_none(index));
            prop_assert!(collection.element_at_or_none(index).is_some());
        }
    }

    #[test]
    fn prop_invalid_index_is_absent(collection in collection_strategy(30), offset in 0_usize..100) {
        let index = collection.size() + offset;
        prop_assert_eq!(collection.element_at_or_none(index), None);
        prop_assert_eq!(
            collection.element_at(index),
            Err(IndexOutOfBounds { index, len: collection.size() })
        );
    }

    #[test]
    fn prop_first_and_last_match_ends(collection in collection_strategy(30)) {
        if collection.is_empty() {
            prop_assert_eq!(collection.first(), Err(NoSuchElement));
            prop_assert_eq!(collection.last(), Err(NoSuchElement));
        } else {
            prop_assert_eq!(collection.first().ok(), collection.element_at(0).ok());
            prop_assert_eq!(
                collection.last().ok(),
                collection.element_at(collection.size() - 1).ok()
            );
        }
    }

    // =========================================================================
    // Filter and map
    // =========================================================================

    #[test]
    fn prop_filter_is_ordered_subset(collection in small_collection(), threshold in -8_i8..8) {
        let filtered = collection.filter(|x| *x > threshold);

        prop_assert!(filtered.size() <= collection.size());
        prop_assert!(filtered.iter().all(|x| *x > threshold));

        let expected: Vec<i8> = collection.iter().copied().filter(|x| *x > threshold).collect();
        prop_assert_eq!(filtered.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_map_preserves_size_and_position(collection in collection_strategy(30)) {
        let mapped = collection.map(|x| i64::from(*x) * 3);

        prop_assert_eq!(mapped.size(), collection.size());
        for index in 0..collection.size() {
            prop_assert_eq!(
                mapped.element_at(index).ok().copied(),
                collection.element_at(index).ok().map(|x| i64::from(*x) * 3)
            );
        }
    }

    #[test]
    fn prop_map_identity_is_equal_copy(collection in collection_strategy(30)) {
        let copy = collection.map(|x| *x);
        prop_assert_eq!(&copy, &collection);
        if collection.is_not_empty() {
            prop_assert_ne!(copy.as_slice().as_ptr(), collection.as_slice().as_ptr());
        }
    }

    // =========================================================================
    // Searching
    // =========================================================================

    #[test]
    fn prop_index_of_finds_first_match(collection in small_collection(), item in -8_i8..8) {
        let expected = collection.as_slice().iter().position(|x| *x == item);
        prop_assert_eq!(collection.index_of(&item), expected);
        prop_assert_eq!(collection.contains(&item), expected.is_some());
    }

    #[test]
    fn prop_contains_all_requires_non_empty(collection in small_collection(), items in prop::collection::vec(-8_i8..8, 0..4)) {
        let expected = collection.is_not_empty() && items.iter().all(|item| collection.contains(item));
        prop_assert_eq!(collection.contains_all(&items), expected);
    }

    #[test]
    fn prop_for_each_matches_find_map(collection in small_collection(), item in -8_i8..8) {
        let mut visited = 0;
        let found = collection.for_each(|x| {
            visited += 1;
            (*x == item).then_some(visited)
        });

        match collection.index_of(&item) {
            Some(index) => prop_assert_eq!(found, Some(index + 1)),
            None => prop_assert_eq!(found, None),
        }
    }
}

//! Property-based tests for the container and string helper.
//!
//! These tests use proptest to check the growth schedule and the
//! element-sequence invariants across random inputs.

use proptest::prelude::*;

use growvec::vector::new_capacity;
use growvec::{camel_caser, SString, Vector};

/// Text made of words, spaces and sentence punctuation.
fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z]{1,8}",
            3 => Just(" ".to_string()),
            1 => Just(". ".to_string()),
            1 => Just("!".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    /// N pushes leave size N and the smallest power-of-two capacity >= N (and >= the initial).
    #[test]
    fn push_back_capacity_schedule(values in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut vec: Vector<i64> = Vector::new().unwrap();
        for v in &values {
            vec.push_back(v).unwrap();
        }
        prop_assert_eq!(vec.len(), values.len());
        prop_assert!(vec.capacity() >= values.len());
        prop_assert_eq!(vec.capacity(), new_capacity(values.len().max(8)).unwrap());
        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }

    /// Push then pop restores the previous sequence.
    #[test]
    fn push_pop_restores(values in prop::collection::vec(any::<i32>(), 0..64), extra in any::<i32>()) {
        let mut vec: Vector<i32> = Vector::new().unwrap();
        for v in &values {
            vec.push_back(v).unwrap();
        }
        vec.push_back(&extra).unwrap();
        vec.pop_back().unwrap();
        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }

    /// Insert at i then erase at i restores the previous sequence.
    #[test]
    fn insert_erase_restores(
        values in prop::collection::vec(any::<i32>(), 0..64),
        seed in any::<usize>(),
        extra in any::<i32>(),
    ) {
        let mut vec: Vector<i32> = Vector::new().unwrap();
        for v in &values {
            vec.push_back(v).unwrap();
        }
        let position = seed % (values.len() + 1);
        vec.insert(position, &extra).unwrap();
        prop_assert_eq!(*vec.get(position).unwrap(), extra);
        vec.erase(position).unwrap();
        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }

    /// Reserve never lowers capacity and never touches the elements.
    #[test]
    fn reserve_is_monotonic(
        values in prop::collection::vec(any::<u8>(), 0..64),
        requests in prop::collection::vec(0usize..2048, 1..10),
    ) {
        let mut vec: Vector<u8> = Vector::new().unwrap();
        for v in &values {
            vec.push_back(v).unwrap();
        }
        for n in requests {
            let before = vec.capacity();
            vec.reserve(n).unwrap();
            prop_assert!(vec.capacity() >= before);
            prop_assert!(vec.capacity() >= n);
            prop_assert_eq!(vec.len(), values.len());
            prop_assert_eq!(vec.as_slice(), values.as_slice());
        }
    }

    /// Splitting then re-joining with the same delimiter reconstructs the input.
    #[test]
    fn split_join_round_trip(text in "[a-c,]{0,40}") {
        let original = SString::from_literal(&text);
        let pieces = original.split(b',').unwrap();
        prop_assert_eq!(pieces.len(), text.matches(',').count() + 1);
        prop_assert_eq!(SString::join(&pieces, b','), original);
    }

    /// One identifier per punctuation mark, none containing whitespace.
    #[test]
    fn camel_one_identifier_per_sentence(text in prose()) {
        let result = camel_caser(&text).unwrap();
        let marks = text.chars().filter(|c| c.is_ascii_punctuation()).count();
        prop_assert_eq!(result.len(), marks);
        prop_assert_eq!(result.tokens().count(), marks + 1);
        for id in result.identifiers() {
            prop_assert!(!id.as_bytes().iter().any(|b| b.is_ascii_whitespace()));
        }
    }
}

#![allow(dead_code)]

//! Shared helpers for integration tests

use toolcheck_fixture::processing::{generate_random_numbers, seeded_rng};

/// Deterministic sample of `n` numbers below `bound`
pub fn sample_numbers(seed: u64, n: usize, bound: i64) -> Vec<i64> {
    generate_random_numbers(&mut seeded_rng(seed), n, bound).unwrap()
}

pub fn assert_error_contains(err: &str, expected: &str, context: &str) {
    assert!(
        err.to_lowercase().contains(&expected.to_lowercase()),
        "{}: Error should contain '{}', got: {}",
        context,
        expected,
        err
    );
}

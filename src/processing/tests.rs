use super::*;
use crate::error::FixtureError;

#[test]
fn sum_handles_empty_and_signed_input() {
    assert_eq!(sum(&[]), 0);
    assert_eq!(sum(&[5]), 5);
    assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
    assert_eq!(sum(&[-1, -2, -3]), -6);
    assert_eq!(sum(&[-5, 10, -3, 8]), 10);
}

#[test]
fn average_is_zero_for_empty_slice() {
    assert_eq!(average(&[]), 0.0);
    assert!(!average(&[]).is_nan());
    assert_eq!(average(&[10]), 10.0);
    assert_eq!(average(&[2, 4, 6, 8]), 5.0);
    assert_eq!(average(&[-2, -4, -6]), -4.0);
    assert_eq!(average(&[1, 2]), 1.5);
}

#[test]
fn max_and_min_default_to_zero() {
    assert_eq!(max(&[]), 0);
    assert_eq!(min(&[]), 0);

    assert_eq!(max(&[1, 5, 3, 9, 2]), 9);
    assert_eq!(min(&[1, 5, 3, 9, 2]), 1);
    assert_eq!(max(&[-5, -2, -10, -1]), -1);
    assert_eq!(min(&[-5, -2, -10, -1]), -10);
    assert_eq!(max(&[7, 7, 7, 7]), 7);
    assert_eq!(min(&[7, 7, 7, 7]), 7);
}

#[test]
fn generated_numbers_have_requested_length_and_range() {
    let mut rng = seeded_rng(42);
    let numbers = generate_random_numbers(&mut rng, 100, 50).unwrap();
    assert_eq!(numbers.len(), 100);
    assert!(numbers.iter().all(|n| (0..50).contains(n)));
}

#[test]
fn same_seed_gives_same_sequence() {
    let first = generate_random_numbers(&mut seeded_rng(9), 32, 1000).unwrap();
    let second = generate_random_numbers(&mut seeded_rng(9), 32, 1000).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bound_of_one_yields_only_zeros() {
    let numbers = generate_random_numbers(&mut seeded_rng(1), 20, 1).unwrap();
    assert!(numbers.iter().all(|n| *n == 0));
}

#[test]
fn non_positive_bound_is_rejected() {
    let mut rng = seeded_rng(0);
    let err = generate_random_numbers(&mut rng, 3, 0).unwrap_err();
    assert!(matches!(err, FixtureError::InvalidArgument(_)));
    assert!(generate_random_numbers(&mut rng, 3, -4).is_err());
}

#[test]
fn zero_count_is_empty_for_any_bound() {
    let mut rng = time_seeded_rng();
    assert!(generate_random_numbers(&mut rng, 0, 0).unwrap().is_empty());
    assert!(generate_random_numbers(&mut rng, 0, 10).unwrap().is_empty());
}

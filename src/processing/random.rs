use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{FixtureError, Result};

/// Generate `n` pseudo-random integers in `[0, bound)`
///
/// The random source is supplied by the caller, so a seeded generator gives
/// the same sequence on every run.
///
/// # Errors
/// Returns [`FixtureError::InvalidArgument`] if `bound` is not positive and
/// `n` is non-zero, since no value can fall inside an empty range.
///
/// # Examples
/// ```
/// use toolcheck_fixture::processing::{generate_random_numbers, seeded_rng};
///
/// let mut rng = seeded_rng(7);
/// let numbers = generate_random_numbers(&mut rng, 5, 10).unwrap();
/// assert_eq!(numbers.len(), 5);
/// assert!(numbers.iter().all(|n| (0..10).contains(n)));
/// ```
pub fn generate_random_numbers<R: Rng>(rng: &mut R, n: usize, bound: i64) -> Result<Vec<i64>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    if bound <= 0 {
        log::warn!("Rejected random bound {}", bound);
        return Err(FixtureError::InvalidArgument(format!(
            "upper bound must be positive, got {bound}"
        )));
    }

    log::debug!("Generating {} random numbers below {}", n, bound);
    Ok((0..n).map(|_| rng.random_range(0..bound)).collect())
}

/// Deterministic generator for a fixed seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the wall clock, different on every run
pub fn time_seeded_rng() -> StdRng {
    // Clock before the epoch: seed 0.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    seeded_rng(nanos)
}

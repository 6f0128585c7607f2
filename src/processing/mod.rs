//! Data processing over integer sequences
//!
//! Aggregations never fail: an empty slice yields 0 (or 0.0 for the
//! average). Random generation takes its random source as a parameter.

mod aggregate;
mod random;

pub use aggregate::{average, max, min, sum};
pub use random::{generate_random_numbers, seeded_rng, time_seeded_rng};

#[cfg(test)]
mod tests;

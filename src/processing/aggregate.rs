/// Returns the sum of all integers in the slice, wrapping on overflow
pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0, |total, n| total.wrapping_add(*n))
}

/// Returns the arithmetic mean, or 0.0 for an empty slice
pub fn average(numbers: &[i64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    sum(numbers) as f64 / numbers.len() as f64
}

/// Returns the largest value, or 0 for an empty slice
pub fn max(numbers: &[i64]) -> i64 {
    numbers.iter().copied().max().unwrap_or(0)
}

/// Returns the smallest value, or 0 for an empty slice
pub fn min(numbers: &[i64]) -> i64 {
    numbers.iter().copied().min().unwrap_or(0)
}

//! Numeric conversion helpers centralizing the lossy casts used in summaries.

use num_traits::cast::cast;

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn count_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Percentage of `part` in `total`, 0.0 when `total` is zero.
#[must_use]
pub fn share_pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count_to_f64(part) / count_to_f64(total) * 100.0
}

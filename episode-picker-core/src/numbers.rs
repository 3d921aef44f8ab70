//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a `usize` count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(f64::MAX)
}

/// Map a unit roll in `[0, 1)` onto an index in `[0, len)`.
///
/// Returns `None` when `len` is zero. Rolls outside the unit interval and
/// non-finite rolls are clamped so the index always stays in range.
#[must_use]
pub fn unit_to_index(roll: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    if !roll.is_finite() || roll <= 0.0 {
        return Some(0);
    }
    let scaled = (roll * usize_to_f64(len)).floor();
    let idx = cast::<f64, usize>(scaled).unwrap_or(last);
    Some(idx.min(last))
}

use argminmax::ArgMinMax;

/// Signed percent change from `start` to `end`, e.g. 10.0 -> 11.0 gives 10.0.
/// Callers guarantee `start > 0`.
#[inline]
pub(crate) fn percent_change(start: f64, end: f64) -> f64 {
    (end - start) / start * 100.0
}

/// Fractional move from `base` to `other` (`other / base - 1`).
#[inline]
pub(crate) fn relative_move(base: f64, other: f64) -> f64 {
    other / base - 1.0
}

/// Index of the largest value. `None` for an empty slice.
#[inline]
pub(crate) fn index_of_max(vec: &[f64]) -> Option<usize> {
    if vec.is_empty() {
        return None;
    }
    Some(vec.argmax())
}

/// Index of the smallest value. `None` for an empty slice.
#[inline]
pub(crate) fn index_of_min(vec: &[f64]) -> Option<usize> {
    if vec.is_empty() {
        return None;
    }
    Some(vec.argmin())
}

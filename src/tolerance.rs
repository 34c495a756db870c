//! Named closeness checks for environment-dependent comparisons
//!
//! Scroll positions shift by sub-pixel reflow across panel toggles and the
//! backend's chapter match counts drift between environments, so the suite
//! compares both through named tolerance helpers instead of exact equality.

/// Relative tolerance applied to scroll-position comparisons (1%)
pub const SCROLL_POSITION_TOLERANCE: f64 = 0.01;

/// Absolute tolerance applied to chapter search-result counts
pub const CHAPTER_RESULT_TOLERANCE: u64 = 3;

/// Whether `actual` lies within `pct * |reference|` of `reference`
pub fn within_relative_tolerance(actual: f64, reference: f64, pct: f64) -> bool {
    (actual - reference).abs() <= pct * reference.abs()
}

/// Whether `actual` lies within `delta` of `expected`
pub fn within_absolute_tolerance(actual: i64, expected: i64, delta: u64) -> bool {
    actual.abs_diff(expected) <= delta
}

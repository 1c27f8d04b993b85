//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Truncate a f64 toward zero and clamp it to the i64 range, returning 0 for NaN.
#[must_use]
pub fn truncate_f64_to_i64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).trunc();
    // i64::MAX rounds up to 2^63 as f64, which does not cast back
    cast::<f64, i64>(clamped).unwrap_or(if clamped > 0.0 { i64::MAX } else { i64::MIN })
}

/// Convert an ordered quantity to f64 for price arithmetic.
#[must_use]
pub fn quantity_to_f64(value: u32) -> f64 {
    f64::from(value)
}

/// Convert a quantity total to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Render a price the way the menu shows it: always at least one decimal place.
#[must_use]
pub fn format_price(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

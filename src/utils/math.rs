/// Divide, returning `None` for a zero or non-finite denominator.
///
/// "Missing vs. zero" guards recur in the weighted-average denominator, the
/// trend previous-value check, and chart extent padding; they all route
/// through here so the policy lives in one place.
pub fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    Some(numerator / denominator)
}

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

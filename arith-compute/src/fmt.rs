//! Number formatting strategies for splicing computed values back into
//! source text.
//!
//! The simplifier accepts any `Fn(f64) -> String` as its formatter; these are
//! the two stock strategies.

/// Formats integral values with no fractional part and everything else with
/// the shortest decimal rendering that round-trips.
pub fn fmt_compact(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Formats with fixed decimal notation at up to 15 fractional digits,
/// trimming trailing zeros, so accumulated float noise such as
/// `0.30000000000000004` renders as `0.3`.
pub fn fmt_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let rendered = format!("{value:.15}");
    rendered.trim_end_matches('0').trim_end_matches('.').to_string()
}

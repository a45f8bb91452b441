//! # Price Parser
//!
//! Converts loosely-typed upstream prices into comparable numbers.
//!
//! Upstream providers report prices as numbers (`1299`), as display strings
//! (`"₹1,299.00"`), or not at all. Parsing is a lossy heuristic: every
//! character that is not an ASCII digit or a `.` is stripped and the
//! remainder is parsed as `f64`. Negative signs, thousands separators and
//! range dashes are all discarded, so `"100-200"` parses as `100200`.
//!
//! # Examples
//!
//! ```
//! use price_compare::domain::price::parse_price_str;
//!
//! assert_eq!(parse_price_str("₹1,299.00"), Some(1299.0));
//! assert_eq!(parse_price_str("n/a"), None);
//! ```

use serde_json::Value;

/// Parses an optional JSON price value.
///
/// `null`, `false`, empty strings and zero are treated as absent, matching
/// the truthiness rules the upstream payloads were designed around.
/// Numbers are returned unchanged; strings go through [`parse_price_str`].
#[must_use]
pub fn parse_price(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|p| p.is_finite() && *p != 0.0),
        Value::String(s) => parse_price_str(s),
        _ => None,
    }
}

/// Parses a display price string such as `"₹1,299.00"`.
///
/// Returns `None` when nothing numeric survives stripping, when the result
/// does not parse (e.g. two decimal points), or when it parses to zero.
#[must_use]
pub fn parse_price_str(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    stripped
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p != 0.0)
}

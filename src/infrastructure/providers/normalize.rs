//! # Result Normalization
//!
//! Shared extraction of a [`Quote`] from an upstream search payload.
//!
//! Both upstreams follow the same pattern (pick a result array, take its
//! first entry, pull a price, a link and an availability signal, fill in
//! store defaults) but disagree on field names. Each adapter describes its
//! quirks in an [`ExtractionStrategy`] and hands the payload to
//! [`extract_first_quote`].
//!
//! Field lookups follow JavaScript truthiness: a field that is `null`,
//! `false`, `0` or `""` counts as missing and the next candidate is tried.

use crate::domain::price::parse_price;
use crate::domain::quote::{IN_STOCK, OUT_OF_STOCK, Quote, Store};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use serde_json::Value;

/// A path of object keys into a JSON value.
pub type FieldPath = &'static [&'static str];

/// How a provider signals availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityRule {
    /// Free-text status at the given path, "In Stock" when missing.
    StatusText(FieldPath),
    /// Boolean flag at the given path; only an explicit `false` means
    /// "Out of Stock".
    InStockFlag(FieldPath),
}

/// Per-provider description of where the interesting fields live.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionStrategy {
    /// Store the resulting quote belongs to.
    pub store: Store,
    /// Candidate top-level fields holding the result array, in priority order.
    pub results_fields: &'static [&'static str],
    /// Candidate price paths, in priority order.
    pub price_paths: &'static [FieldPath],
    /// Candidate link paths, in priority order.
    pub link_paths: &'static [FieldPath],
    /// Availability rule.
    pub availability: AvailabilityRule,
}

/// Extracts and normalizes the first search result in `body`.
///
/// Returns `Ok(None)` when the result array is missing or empty.
///
/// # Errors
///
/// Returns `ProviderError::ProtocolError` if the body is not a JSON object
/// or the result field is present but is not an array.
pub fn extract_first_quote(
    body: &Value,
    strategy: &ExtractionStrategy,
) -> ProviderResult<Option<Quote>> {
    let Some(first) = first_result(body, strategy.results_fields)? else {
        return Ok(None);
    };

    Ok(Some(normalize(first, strategy)))
}

/// Maps a single upstream result onto a [`Quote`], filling store defaults.
#[must_use]
pub fn normalize(item: &Value, strategy: &ExtractionStrategy) -> Quote {
    let price = parse_price(first_truthy(item, strategy.price_paths));

    let url = first_truthy(item, strategy.link_paths)
        .and_then(Value::as_str)
        .unwrap_or_else(|| strategy.store.homepage());

    let status = match strategy.availability {
        AvailabilityRule::StatusText(path) => lookup(item, path)
            .filter(|v| is_truthy(v))
            .and_then(Value::as_str)
            .unwrap_or(IN_STOCK),
        AvailabilityRule::InStockFlag(path) => match lookup(item, path) {
            Some(Value::Bool(false)) => OUT_OF_STOCK,
            _ => IN_STOCK,
        },
    };

    Quote::new(strategy.store, price)
        .with_url(url)
        .with_status(status)
}

fn first_result<'a>(body: &'a Value, fields: &[&str]) -> ProviderResult<Option<&'a Value>> {
    if !body.is_object() {
        return Err(ProviderError::protocol_error(
            "response body is not a JSON object",
        ));
    }

    for field in fields {
        match body.get(*field) {
            Some(Value::Array(results)) => {
                return Ok(results.first().filter(|v| is_truthy(v)));
            }
            Some(other) if is_truthy(other) => {
                return Err(ProviderError::protocol_error(format!(
                    "field `{}` is not an array",
                    field
                )));
            }
            _ => continue,
        }
    }

    Ok(None)
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, key| v.get(*key))
}

fn first_truthy<'a>(value: &'a Value, paths: &[FieldPath]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| lookup(value, path))
        .find(|v| is_truthy(v))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

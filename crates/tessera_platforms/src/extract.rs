//! Lenient field extraction from raw JSON payloads.
//!
//! Every accessor returns `0` when a field is absent, null, negative, or of an
//! unexpected type. Partial upstream schemas are normal, so nothing here logs
//! above `trace`.

use serde_json::Value;

/// Read-only view over one payload object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a>(&'a Value);

impl<'a> Fields<'a> {
    /// Wrap a JSON value.
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Wrap the first element when `value` is an array, otherwise `value` itself.
    ///
    /// An empty array yields a view where every field reads as zero.
    pub fn first_of(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => Self(items.first().unwrap_or(&Value::Null)),
            other => Self(other),
        }
    }

    /// Non-negative integer at `key`.
    ///
    /// Accepts JSON integers and finite non-negative floats (truncated).
    pub fn count(&self, key: &str) -> u64 {
        self.0.get(key).map(as_count).unwrap_or(0)
    }

    /// Non-negative integer at a nested path such as `["board", "pinCount"]`.
    pub fn count_at(&self, path: &[&str]) -> u64 {
        path.iter()
            .try_fold(self.0, |value, key| value.get(*key))
            .map(as_count)
            .unwrap_or(0)
    }

    /// Like [`Fields::count`], but also parses numeric strings (`"1200"`).
    pub fn parsed_count(&self, key: &str) -> u64 {
        match self.0.get(key) {
            Some(Value::String(s)) => parse_count(s),
            Some(other) => as_count(other),
            None => 0,
        }
    }

    /// Sum of [`Fields::count`] over several keys.
    pub fn sum(&self, keys: &[&str]) -> u64 {
        keys.iter()
            .fold(0u64, |acc, key| acc.saturating_add(self.count(key)))
    }
}

fn as_count(value: &Value) -> u64 {
    if let Some(n) = value.as_u64() {
        return n;
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 => f as u64,
        _ => {
            tracing::trace!(?value, "Treating non-count value as zero");
            0
        }
    }
}

fn parse_count(raw: &str) -> u64 {
    let trimmed = raw.trim();
    trimmed
        .parse::<u64>()
        .ok()
        .or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
        .unwrap_or(0)
}

//! Raw upstream analytics payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped analytics body returned by the upstream API for one platform.
///
/// Only the metric mapper registered for that platform looks inside. The
/// payload lives for a single fetch cycle and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct RawPlatformPayload(Value);

impl RawPlatformPayload {
    /// An empty object payload, `{}`.
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the payload, returning the JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

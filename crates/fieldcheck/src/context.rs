//! Side-channel data accompanying a validated value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only, string-keyed context passed alongside the value being
/// validated.
///
/// Validators that compare against sibling fields can look values up here;
/// the built-in validators accept a context but do not consult it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    values: HashMap<String, serde_json::Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, consuming and returning the context.
    ///
    /// Values that fail to serialize are silently skipped, matching the
    /// open, best-effort nature of the side channel.
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.values.insert(key.into(), value);
        }
        self
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Check whether the context holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

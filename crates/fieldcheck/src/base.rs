//! Shared state for concrete validators.
//!
//! Every validator embeds an [`ErrorSlot`] and routes every non-erroring
//! rejection through [`ErrorSlot::reject`], so a `false` outcome always has a
//! retrievable reason next to it.

use serde::{Deserialize, Serialize};

/// Storage for the most recent rejection message.
///
/// At most one message is retained at a time; each invocation of the owning
/// validator overwrites it. This is deliberately the only piece of state a
/// validator carries beyond its configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSlot {
    message: Option<String>,
}

impl ErrorSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejection message and return `false`.
    ///
    /// Recording and rejecting always happen together; the return value is
    /// meant to be handed straight back to the caller.
    pub fn reject(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        tracing::trace!(%message, "value rejected");
        self.message = Some(message);
        false
    }

    /// Drop any previously recorded message.
    pub fn clear(&mut self) {
        self.message = None;
    }

    /// The most recent rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_stores_message_and_returns_false() {
        let mut slot = ErrorSlot::new();
        assert!(!slot.reject("out of range"));
        assert_eq!(slot.message(), Some("out of range"));
    }

    #[test]
    fn reject_overwrites_previous_message() {
        let mut slot = ErrorSlot::new();
        slot.reject("first");
        slot.reject("second");
        assert_eq!(slot.message(), Some("second"));
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut slot = ErrorSlot::new();
        slot.reject("stale");
        slot.clear();
        assert_eq!(slot.message(), None);
    }
}

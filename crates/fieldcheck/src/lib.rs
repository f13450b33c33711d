//! # Fieldcheck
//!
//! Composable value validation. Each validator is an independent, configurable
//! object that decides whether a single value satisfies one rule and keeps a
//! human-readable reason around when it does not.
//!
//! ## Two failure channels
//!
//! - **Rejection**: the input is well-formed but does not satisfy the rule.
//!   `validate` returns `Ok(false)` and the reason is readable via
//!   [`Validator::last_error`]. Normal control flow.
//! - **Failure**: the validator itself cannot run (required configuration
//!   missing, unparseable input). `validate` returns
//!   `Err(`[`ValidationError`]`)`. A setup bug, not user-input feedback.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let mut email = Email::new().strict(true);
//! if !email.validate(Some("dev@example.com"), None)? {
//!     println!("rejected: {}", email.last_error().unwrap());
//! }
//!
//! let mut range = DateBetween::new()
//!     .min(opening)
//!     .max(closing)
//!     .date_format("%Y-%m-%d");
//! range.validate(Some(&DateInput::from("2024-03-01")), None)?;
//! ```

mod base;
mod context;
mod error;
mod traits;
mod validators;

pub use base::ErrorSlot;
pub use context::Context;
pub use error::{ErrorKind, ValidationError};
pub use traits::Validator;
pub use validators::{date_format_parser, DateBetween, DateInput, DateParser, Email};

/// Prelude module for fieldcheck
pub mod prelude {
    pub use crate::base::ErrorSlot;
    pub use crate::context::Context;
    pub use crate::error::{ErrorKind, ValidationError};
    pub use crate::traits::Validator;
    pub use crate::validators::{date_format_parser, DateBetween, DateInput, DateParser, Email};
}

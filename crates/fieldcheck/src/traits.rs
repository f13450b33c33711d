//! The validator contract.

use crate::context::Context;
use crate::error::ValidationError;
use std::fmt::Debug;

/// A single configurable rule over values of type `T`.
///
/// The contract separates two failure channels that must never be conflated:
///
/// - `Ok(false)` — the input is well-formed but violates the rule. The
///   validator has deposited an explanatory message retrievable via
///   [`last_error`](Validator::last_error).
/// - `Err(ValidationError)` — the validator cannot determine an answer
///   (missing required configuration, unparseable input). This surfaces a
///   setup defect and is never silently coerced into `Ok(false)`.
///
/// `Ok(true)` clears any previously recorded message.
///
/// Whether an absent value (`None`) passes is a per-validator policy: the
/// date validator accepts it by default (`allow_missing`), the email
/// validator rejects it through its normal reject path.
///
/// `validate` takes `&mut self` because the last-error slot is written per
/// call; one in-flight validation per instance is therefore enforced by the
/// borrow checker rather than documented as a usage constraint.
///
/// ## Example
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let mut email = Email::new();
/// match email.validate(Some("a..b@example.com"), None) {
///     Ok(true) => {}
///     Ok(false) => eprintln!("{}", email.last_error().unwrap()),
///     Err(e) => panic!("validator misconfigured: {e}"),
/// }
/// ```
pub trait Validator<T: ?Sized>: Debug + Send + Sync {
    /// Validate a value, with optional cross-field context.
    fn validate(
        &mut self,
        value: Option<&T>,
        context: Option<&Context>,
    ) -> Result<bool, ValidationError>;

    /// The most recent rejection message, if the last call returned
    /// `Ok(false)`.
    fn last_error(&self) -> Option<&str>;

    /// Short identifier for error reporting and diagnostics.
    fn name(&self) -> &'static str;
}

//! Email address validation.
//!
//! [`Email`] checks an address in three ordered steps: format sanity (always),
//! then local-part characters and hostname-part characters (each individually
//! switchable). Length limits on the two parts are enforced only under
//! `strict`.

use crate::base::ErrorSlot;
use crate::context::Context;
use crate::error::ValidationError;
use crate::traits::Validator;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_HOSTNAME_PART_LEN: usize = 255;

const DEFAULT_INVALID_ADDRESS: &str = "the entered address is invalid";
const DEFAULT_INVALID_LOCAL_PART: &str = "the local part of the mail contains invalid characters";
const DEFAULT_INVALID_HOSTNAME_PART: &str =
    "the hostname part of the mail contains invalid characters";
const DEFAULT_LENGTH_EXCEEDED: &str = "the {part} part is too long {len} of max {max} given";

// Pre-compiled character-set patterns
static LOCAL_PART_CHARS: OnceLock<Regex> = OnceLock::new();
static HOSTNAME_PART_CHARS: OnceLock<Regex> = OnceLock::new();

/// Alphanumerics plus the special characters permitted before the `@`.
fn local_part_chars() -> &'static Regex {
    LOCAL_PART_CHARS
        .get_or_init(|| Regex::new(r"^[\p{Alphabetic}\p{N}!#$%&'*+\-/=?^_`{|}~]*$").unwrap())
}

/// URL-host-allowed characters: unreserved, sub-delims, `:`, `[`, `]`.
fn hostname_part_chars() -> &'static Regex {
    HOSTNAME_PART_CHARS
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9._~!$&'()*+,;=:\[\]\-]*$").unwrap())
}

/// Validator for email address well-formedness.
///
/// Format sanity (no literal `..`, exactly one `@`) always runs. The
/// local-part and hostname-part character checks can be disabled
/// independently; a disabled check is vacuously true and never records a
/// message. Part length limits (64 for the local part, 255 for the hostname
/// part) apply only when `strict` is enabled.
///
/// ## Example
///
/// ```rust,ignore
/// let mut rule = Email::new().strict(true);
/// if !rule.validate(Some("dev@example.com"), None)? {
///     eprintln!("{}", rule.last_error().unwrap());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    /// Check the part before the `@`
    validate_local_part: bool,
    /// Check the part after the `@`
    validate_hostname_part: bool,
    /// Enforce part length limits
    strict: bool,
    /// Custom message for format-sanity rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_address_message: Option<String>,
    /// Custom message for local-part character rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_local_part_message: Option<String>,
    /// Custom message for hostname-part character rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_hostname_part_message: Option<String>,
    /// Custom template for length rejections; `{part}`, `{len}` and `{max}`
    /// are interpolated
    #[serde(skip_serializing_if = "Option::is_none")]
    length_exceeded_message: Option<String>,
    #[serde(skip)]
    last_error: ErrorSlot,
}

impl Email {
    /// Create a validator with both part checks enabled and `strict` off.
    pub fn new() -> Self {
        Self {
            validate_local_part: true,
            validate_hostname_part: true,
            strict: false,
            invalid_address_message: None,
            invalid_local_part_message: None,
            invalid_hostname_part_message: None,
            length_exceeded_message: None,
            last_error: ErrorSlot::new(),
        }
    }

    /// Enable or disable the local-part check. Defaults to enabled.
    pub fn validate_local_part(mut self, enabled: bool) -> Self {
        self.validate_local_part = enabled;
        self
    }

    /// Enable or disable the hostname-part check. Defaults to enabled.
    pub fn validate_hostname_part(mut self, enabled: bool) -> Self {
        self.validate_hostname_part = enabled;
        self
    }

    /// Enable or disable part length limits. Defaults to disabled.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set a custom message for format-sanity rejections.
    pub fn with_invalid_address_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_address_message = Some(message.into());
        self
    }

    /// Set a custom message for local-part character rejections.
    pub fn with_local_part_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_local_part_message = Some(message.into());
        self
    }

    /// Set a custom message for hostname-part character rejections.
    pub fn with_hostname_part_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_hostname_part_message = Some(message.into());
        self
    }

    /// Set a custom template for length rejections.
    ///
    /// `{part}`, `{len}` and `{max}` placeholders are interpolated.
    pub fn with_length_message(mut self, message: impl Into<String>) -> Self {
        self.length_exceeded_message = Some(message.into());
        self
    }

    fn invalid_address_message(&self) -> String {
        self.invalid_address_message
            .clone()
            .unwrap_or_else(|| DEFAULT_INVALID_ADDRESS.to_string())
    }

    fn invalid_local_part_message(&self) -> String {
        self.invalid_local_part_message
            .clone()
            .unwrap_or_else(|| DEFAULT_INVALID_LOCAL_PART.to_string())
    }

    fn invalid_hostname_part_message(&self) -> String {
        self.invalid_hostname_part_message
            .clone()
            .unwrap_or_else(|| DEFAULT_INVALID_HOSTNAME_PART.to_string())
    }

    fn length_exceeded_message(&self, part: &str, len: usize, max: usize) -> String {
        self.length_exceeded_message
            .clone()
            .unwrap_or_else(|| DEFAULT_LENGTH_EXCEEDED.to_string())
            .replace("{part}", part)
            .replace("{len}", &len.to_string())
            .replace("{max}", &max.to_string())
    }

    /// Length limit check; a no-op unless `strict` is enabled.
    fn check_length(&mut self, part: &str, max: usize, what: &str) -> bool {
        let len = part.chars().count();
        if self.strict && len > max {
            let message = self.length_exceeded_message(what, len, max);
            return self.last_error.reject(message);
        }
        true
    }

    fn check_local(&mut self, part: &str) -> bool {
        if !self.check_length(part, MAX_LOCAL_PART_LEN, "local") {
            return false;
        }
        if !local_part_chars().is_match(part) {
            let message = self.invalid_local_part_message();
            return self.last_error.reject(message);
        }
        true
    }

    fn check_hostname(&mut self, part: &str) -> bool {
        if !self.check_length(part, MAX_HOSTNAME_PART_LEN, "hostname") {
            return false;
        }
        if !hostname_part_chars().is_match(part) {
            let message = self.invalid_hostname_part_message();
            return self.last_error.reject(message);
        }
        true
    }

    fn run(&mut self, value: Option<&str>) -> Result<bool, ValidationError> {
        self.last_error.clear();

        let Some(address) = value else {
            // No allow-missing option here: absence takes the reject path.
            let message = self.invalid_address_message();
            return Ok(self.last_error.reject(message));
        };

        // Format sanity always runs, regardless of which part checks are on.
        if address.contains("..") {
            let message = self.invalid_address_message();
            return Ok(self.last_error.reject(message));
        }

        let parts: Vec<&str> = address.split('@').collect();
        let &[local, hostname] = parts.as_slice() else {
            // No `@` or more than one.
            let message = self.invalid_address_message();
            return Ok(self.last_error.reject(message));
        };

        if self.validate_local_part && !self.check_local(local) {
            return Ok(false);
        }
        if self.validate_hostname_part && !self.check_hostname(hostname) {
            return Ok(false);
        }

        Ok(true)
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for Email {
    fn validate(
        &mut self,
        value: Option<&str>,
        _context: Option<&Context>,
    ) -> Result<bool, ValidationError> {
        self.run(value)
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.message()
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

impl Validator<String> for Email {
    fn validate(
        &mut self,
        value: Option<&String>,
        context: Option<&Context>,
    ) -> Result<bool, ValidationError> {
        Validator::<str>::validate(self, value.map(String::as_str), context)
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.message()
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

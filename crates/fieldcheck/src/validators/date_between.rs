//! Date-range validation.
//!
//! [`DateBetween`] checks that a date falls between a configured minimum and
//! maximum, with independently configurable inclusivity per bound. Input may
//! be an already-parsed timestamp or raw text, in which case a configured
//! parser is required.

use crate::base::ErrorSlot;
use crate::context::Context;
use crate::error::ValidationError;
use crate::traits::Validator;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const DEFAULT_NOT_BETWEEN: &str = "given date is not between predefined dates";

/// Pluggable string-to-date parser.
///
/// Returning `None` means the text could not be parsed; the validator turns
/// that into a hard [`ValidationError`], not a rejection.
pub type DateParser = Arc<dyn Fn(&str) -> Option<DateTime<Utc>> + Send + Sync>;

/// Build a [`DateParser`] from a chrono format string.
///
/// Tries the format as a full datetime first, then as a bare date at
/// midnight UTC.
pub fn date_format_parser(format: impl Into<String>) -> DateParser {
    let format = format.into();
    Arc::new(move |text| {
        NaiveDateTime::parse_from_str(text, &format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, &format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| naive.and_utc())
    })
}

/// Input shapes accepted by [`DateBetween`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DateInput {
    /// An already-parsed timestamp; used as-is.
    Date(DateTime<Utc>),
    /// Raw text; requires a configured parser.
    Text(String),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(date: DateTime<Utc>) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// Validator for date range membership.
///
/// `min` and `max` are required; validating without both set is a hard
/// error. Bounds are inclusive by default and each bound's inclusivity is
/// configured independently. An absent value passes when `allow_missing` is
/// enabled (the default).
///
/// ## Example
///
/// ```rust,ignore
/// let mut rule = DateBetween::new()
///     .min(opening)
///     .max(closing)
///     .max_inclusive(false)
///     .date_format("%Y-%m-%d");
///
/// rule.validate(Some(&DateInput::from("2024-06-30")), None)?;
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct DateBetween {
    /// Lower bound; required before validating
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<DateTime<Utc>>,
    /// Upper bound; required before validating
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<DateTime<Utc>>,
    /// Whether a date equal to `min` passes
    min_inclusive: bool,
    /// Whether a date equal to `max` passes
    max_inclusive: bool,
    /// Whether an absent value is vacuously valid
    allow_missing: bool,
    /// Custom rejection message
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip)]
    parser: Option<DateParser>,
    #[serde(skip)]
    last_error: ErrorSlot,
}

impl DateBetween {
    /// Create a validator with no bounds set.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            min_inclusive: true,
            max_inclusive: true,
            allow_missing: true,
            message: None,
            parser: None,
            last_error: ErrorSlot::new(),
        }
    }

    /// Set the minimum date.
    pub fn min(mut self, min: DateTime<Utc>) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum date.
    pub fn max(mut self, max: DateTime<Utc>) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both bounds at once.
    pub fn between(self, min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        self.min(min).max(max)
    }

    /// Set whether a date equal to the minimum passes. Defaults to `true`.
    pub fn min_inclusive(mut self, inclusive: bool) -> Self {
        self.min_inclusive = inclusive;
        self
    }

    /// Set whether a date equal to the maximum passes. Defaults to `true`.
    pub fn max_inclusive(mut self, inclusive: bool) -> Self {
        self.max_inclusive = inclusive;
        self
    }

    /// Set the minimum date with an exclusive bound.
    pub fn min_exclusive(self, min: DateTime<Utc>) -> Self {
        self.min(min).min_inclusive(false)
    }

    /// Set the maximum date with an exclusive bound.
    pub fn max_exclusive(self, max: DateTime<Utc>) -> Self {
        self.max(max).max_inclusive(false)
    }

    /// Set whether an absent value is accepted. Defaults to `true`.
    pub fn allow_missing(mut self, allow: bool) -> Self {
        self.allow_missing = allow;
        self
    }

    /// Set the parser used for text input.
    pub fn parser(
        mut self,
        parser: impl Fn(&str) -> Option<DateTime<Utc>> + Send + Sync + 'static,
    ) -> Self {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Set the parser from a chrono format string.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.parser = Some(date_format_parser(format));
        self
    }

    /// Set a custom rejection message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn not_between_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| DEFAULT_NOT_BETWEEN.to_string())
    }

    /// Resolve the input to a concrete date, if there is one.
    fn resolve(&self, input: &DateInput) -> Result<DateTime<Utc>, ValidationError> {
        match input {
            DateInput::Date(date) => Ok(*date),
            DateInput::Text(text) => {
                let parser = self
                    .parser
                    .as_ref()
                    .ok_or_else(|| ValidationError::misconfigured("no date parser given"))?;
                parser(text).ok_or_else(|| {
                    ValidationError::unparseable("Unreadable date format or datatype")
                })
            }
        }
    }

    fn run(&mut self, value: Option<&DateInput>) -> Result<bool, ValidationError> {
        self.last_error.clear();

        // Absence is vacuously valid before any configuration is consulted.
        if value.is_none() && self.allow_missing {
            return Ok(true);
        }

        let (Some(min), Some(max)) = (self.min, self.max) else {
            return Err(ValidationError::misconfigured("min and/or max dates are nil"));
        };

        let Some(input) = value else {
            // allow_missing is off; absence goes through the normal reject path.
            let message = self.not_between_message();
            return Ok(self.last_error.reject(message));
        };

        let date = self.resolve(input)?;

        let min_ok = if self.min_inclusive { date >= min } else { date > min };
        let max_ok = if self.max_inclusive { date <= max } else { date < max };

        if min_ok && max_ok {
            Ok(true)
        } else {
            let message = self.not_between_message();
            Ok(self.last_error.reject(message))
        }
    }
}

impl Default for DateBetween {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DateBetween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateBetween")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("min_inclusive", &self.min_inclusive)
            .field("max_inclusive", &self.max_inclusive)
            .field("allow_missing", &self.allow_missing)
            .field("message", &self.message)
            .field("has_parser", &self.parser.is_some())
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl PartialEq for DateBetween {
    fn eq(&self, other: &Self) -> bool {
        // The parser is opaque; configuration equality ignores it.
        self.min == other.min
            && self.max == other.max
            && self.min_inclusive == other.min_inclusive
            && self.max_inclusive == other.max_inclusive
            && self.allow_missing == other.allow_missing
            && self.message == other.message
    }
}

impl Validator<DateInput> for DateBetween {
    fn validate(
        &mut self,
        value: Option<&DateInput>,
        _context: Option<&Context>,
    ) -> Result<bool, ValidationError> {
        self.run(value)
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.message()
    }

    fn name(&self) -> &'static str {
        "date_between"
    }
}

impl Validator<DateTime<Utc>> for DateBetween {
    fn validate(
        &mut self,
        value: Option<&DateTime<Utc>>,
        _context: Option<&Context>,
    ) -> Result<bool, ValidationError> {
        let input = value.copied().map(DateInput::Date);
        self.run(input.as_ref())
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.message()
    }

    fn name(&self) -> &'static str {
        "date_between"
    }
}

impl Validator<str> for DateBetween {
    fn validate(
        &mut self,
        value: Option<&str>,
        _context: Option<&Context>,
    ) -> Result<bool, ValidationError> {
        let input = value.map(DateInput::from);
        self.run(input.as_ref())
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.message()
    }

    fn name(&self) -> &'static str {
        "date_between"
    }
}

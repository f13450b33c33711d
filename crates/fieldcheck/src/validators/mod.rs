//! Built-in validators.
//!
//! Each validator is a leaf: it owns its configuration, embeds an
//! [`ErrorSlot`](crate::ErrorSlot), and implements
//! [`Validator`](crate::Validator) for the input shapes it accepts.

mod date_between;
mod email;

pub use date_between::{date_format_parser, DateBetween, DateInput, DateParser};
pub use email::Email;

//! # Phone Number Formatting
//!
//! Punctuation templates for the pieces of a phone number, and
//! [`PhoneNumberLayout`] to render a whole number from its parts.
//!
//! ```rust
//! use phonecodec::format::{PhoneNumberLayout, PhoneNumberParts};
//!
//! let parts = PhoneNumberParts::new("1", "212", ["555", "0100"]);
//! let layout = PhoneNumberLayout::from_selectors(5, 5, 1);
//! assert_eq!(layout.render(&parts), "+1 (212) 555-0100");
//! ```

mod phone_format;
mod phone_number;

#[doc(inline)]
pub use phone_format::*;
#[doc(inline)]
pub use phone_number::*;

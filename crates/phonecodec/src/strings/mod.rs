//! # String Utilities
//!
//! * [`pad_string`] / [`pad_string_with`] - fixed-width padding.
//! * [`normalize_to_ascii`] - best-effort reduction of free text to an alphabet.

mod normalize;
mod padding;

#[doc(inline)]
pub use normalize::*;
#[doc(inline)]
pub use padding::*;

//! # Alphabets
//!
//! An [`Alphabet`] is the ordered set of characters that defines
//! valid indices for every encoder and decoder in this crate.
//!
//! Two named alphabets are provided:
//! * [`Alphabet::digits`] - ``0123456789``.
//! * [`Alphabet::letters`] - ``0123456789 .,:()+-``.

mod alphabet_kind;
mod char_alphabet;

#[doc(inline)]
pub use alphabet_kind::*;
#[doc(inline)]
pub use char_alphabet::*;

//! # `phonecodec` String/Tensor Codec
//!
//! Converts between variable-length phone-number strings over a small
//! fixed alphabet and the fixed-width tensors a recurrent guide network
//! consumes during inference compilation.
//!
//! See:
//! * [`alphabet`] for the digit and letter alphabets.
//! * [`encoders`] to encode strings into index, probability, and one-hot tensors.
//! * [`decoders`] to decode tensors back into strings.
//! * [`strings`] for padding and Unicode normalization.
//! * [`format`] for phone-number punctuation templates.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use phonecodec::{AlphabetKind, IndexTensor, StringCodec};
//!
//! let codec = StringCodec::from(AlphabetKind::Letters);
//!
//! let batch = ["+1 (212) 555-0100", "555-0199"];
//! let indices: IndexTensor<u32> = codec.encode_indices(&batch)?;
//! assert_eq!(indices.dim(), (17, 2));
//!
//! let one_hot = codec.encode_one_hot(&batch)?;
//! assert_eq!(one_hot.dim(), (17, 2, 18));
//!
//! let decoded = codec.decode_strings(&indices, true)?;
//! assert_eq!(decoded, batch);
//! # Ok::<(), phonecodec::CodecError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod alphabet;
pub mod codec;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod format;
pub mod strings;
pub mod types;

#[doc(inline)]
pub use alphabet::{Alphabet, AlphabetKind, char_to_index, index_to_char};
#[doc(inline)]
pub use codec::StringCodec;
#[doc(inline)]
pub use decoders::{
    index_tensor_to_string,
    index_tensor_to_strings,
    probability_tensor_to_index_tensor,
};
#[doc(inline)]
pub use encoders::{
    EncoderOptions,
    ProbabilityMode,
    index_tensor_to_one_hot,
    strings_to_index_tensor,
    strings_to_probability_tensor,
};
#[doc(inline)]
pub use errors::{CodecError, CodecResult};
#[doc(inline)]
pub use format::{format_extension, format_number_groups, format_prefix};
#[doc(inline)]
pub use strings::{PadOverflow, normalize_to_ascii, pad_string};
#[doc(inline)]
pub use types::{IndexTensor, IndexType, OneHotTensor, ProbTensor};

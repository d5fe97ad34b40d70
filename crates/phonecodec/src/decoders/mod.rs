//! # Tensor Decoders
//!
//! * [`index_to_char`](crate::alphabet::index_to_char) - a single index.
//! * [`index_tensor_to_string`] - a whole tensor, as one diagnostic string.
//! * [`index_tensor_to_strings`] - one string per batch column.
//! * [`probability_tensor_to_index_tensor`] - soft tensors back to indices.

mod argmax;
mod tensor_decoder;

#[doc(inline)]
pub use argmax::*;
#[doc(inline)]
pub use tensor_decoder::*;

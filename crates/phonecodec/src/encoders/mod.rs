//! # String Encoders
//!
//! Strings to fixed-width tensors:
//!
//! * [`strings_to_index_tensor`] - ``(max_len, batch)`` alphabet indices.
//! * [`strings_to_probability_tensor`] - ``(max_len, batch, alphabet_size)`` noisy categoricals.
//! * [`index_tensor_to_one_hot`] - ``(max_len, batch, alphabet_size)`` one-hot expansion.
//!
//! The `*_with` variants take [`EncoderOptions`] to control padding,
//! probability layout, and batch parallelism.

mod batch;
pub mod encoder_options;
mod index_encoder;
mod one_hot;
mod prob_encoder;

#[doc(inline)]
pub use encoder_options::{DEFAULT_TRUE_INDEX_PROB, EncoderOptions, check_true_index_prob};
pub(crate) use index_encoder::check_index_capacity;
#[doc(inline)]
pub use index_encoder::{strings_to_index_tensor, strings_to_index_tensor_with};
#[doc(inline)]
pub use one_hot::index_tensor_to_one_hot;
#[doc(inline)]
pub use prob_encoder::{
    ProbabilityMode,
    strings_to_default_probability_tensor,
    strings_to_probability_tensor,
    strings_to_probability_tensor_with,
};

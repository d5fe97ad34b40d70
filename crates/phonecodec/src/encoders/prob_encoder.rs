//! # Probability Tensor Encoder
//!
//! Encodes each character as a noisy categorical distribution over the alphabet.

use ndarray::Array3;

use crate::{
    alphabet::Alphabet,
    encoders::{
        EncoderOptions,
        check_true_index_prob,
        encoder_options::DEFAULT_TRUE_INDEX_PROB,
        index_encoder::encode_index_columns,
    },
    errors::CodecResult,
    types::ProbTensor,
};

/// How the probability mass is laid out over a depth slice.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProbabilityMode {
    /// Every slot starts at ``(1 - p) / n``; then ``p`` is added to the true slot.
    ///
    /// The true slot holds ``p + (1 - p) / n``. This is the layout the
    /// guide network is trained against.
    #[default]
    Additive,

    /// The true slot holds exactly ``p``; the others share ``1 - p`` evenly.
    Exact,
}

impl ProbabilityMode {
    /// Get the ``(other_slot, true_slot)`` values for an alphabet of `size`.
    pub fn slot_values(
        self,
        true_index_prob: f32,
        size: usize,
    ) -> (f32, f32) {
        let p = true_index_prob;
        match self {
            Self::Additive => {
                let floor = (1.0 - p) / size as f32;
                (floor, floor + p)
            }
            Self::Exact if size <= 1 => (0.0, 1.0),
            Self::Exact => ((1.0 - p) / (size - 1) as f32, p),
        }
    }
}

/// Encode a batch of strings as a probability tensor with the given options.
///
/// Uses `options.true_index_prob` and `options.probability_mode`;
/// `options.max_len` is ignored.
///
/// ## Returns
/// A tensor of shape ``(max_len, strings.len(), alphabet.len())``.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(strings, alphabet, options), fields(batch = strings.len()))
)]
pub fn strings_to_probability_tensor_with<S>(
    strings: &[S],
    max_len: usize,
    alphabet: &Alphabet,
    options: &EncoderOptions,
) -> CodecResult<ProbTensor>
where
    S: AsRef<str> + Sync,
{
    options.validate()?;

    let columns = encode_index_columns(strings, max_len, alphabet, options)?;

    let (other, truth) = options
        .probability_mode()
        .slot_values(options.true_index_prob(), alphabet.len());

    let mut tensor = Array3::from_elem((max_len, strings.len(), alphabet.len()), other);
    for (j, column) in columns.iter().enumerate() {
        for (i, &idx) in column.iter().enumerate() {
            tensor[[i, j, idx]] = truth;
        }
    }

    Ok(tensor)
}

/// Encode a batch of strings as a probability tensor.
///
/// Strings are right-padded with spaces to `max_len`. Every slot starts at
/// ``(1 - true_index_prob) / alphabet.len()`` and `true_index_prob` is added
/// at each character's index, so every depth slice sums to 1.
///
/// ## Returns
/// A tensor of shape ``(max_len, strings.len(), alphabet.len())``;
/// or `InvalidArgument` if `true_index_prob` is not in ``[0, 1]``.
pub fn strings_to_probability_tensor<S>(
    strings: &[S],
    max_len: usize,
    alphabet: &Alphabet,
    true_index_prob: f32,
) -> CodecResult<ProbTensor>
where
    S: AsRef<str> + Sync,
{
    check_true_index_prob(true_index_prob)?;
    let options = EncoderOptions::default().with_true_index_prob(true_index_prob);
    strings_to_probability_tensor_with(strings, max_len, alphabet, &options)
}

/// [`strings_to_probability_tensor`] with the default `true_index_prob` of 0.99.
pub fn strings_to_default_probability_tensor<S>(
    strings: &[S],
    max_len: usize,
    alphabet: &Alphabet,
) -> CodecResult<ProbTensor>
where
    S: AsRef<str> + Sync,
{
    strings_to_probability_tensor(strings, max_len, alphabet, DEFAULT_TRUE_INDEX_PROB)
}

//! # Fixed-Width Padding
//!
//! Lengths are counted in `char`s (Unicode scalar values), not bytes.

use crate::errors::{CodecError, CodecResult};

/// The default pad character.
pub const DEFAULT_PAD_CHAR: char = ' ';

/// What to do when a string is longer than the target width.
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
pub enum PadOverflow {
    /// Fail with `InvalidArgument`.
    #[default]
    Error,

    /// Keep the first `desired_len` chars.
    Truncate,
}

/// Right-pad `original` with spaces to exactly `desired_len` chars.
///
/// ## Returns
/// The padded string; or `InvalidArgument` if `original` is longer than `desired_len`.
pub fn pad_string(
    original: &str,
    desired_len: usize,
) -> CodecResult<String> {
    pad_string_with(original, desired_len, DEFAULT_PAD_CHAR, PadOverflow::Error)
}

/// Right-pad `original` with `pad_char` to exactly `desired_len` chars.
///
/// ## Arguments
/// * `original` - The string to pad.
/// * `desired_len` - The target width, in chars.
/// * `pad_char` - The fill character.
/// * `overflow` - The policy when `original` is already wider than `desired_len`.
pub fn pad_string_with(
    original: &str,
    desired_len: usize,
    pad_char: char,
    overflow: PadOverflow,
) -> CodecResult<String> {
    let len = original.chars().count();

    if len > desired_len {
        return match overflow {
            PadOverflow::Error => Err(CodecError::InvalidArgument(format!(
                "string {original:?} has length {len} > desired length {desired_len}"
            ))),
            PadOverflow::Truncate => Ok(original.chars().take(desired_len).collect()),
        };
    }

    let mut padded =
        String::with_capacity(original.len() + (desired_len - len) * pad_char.len_utf8());
    padded.push_str(original);
    padded.extend(core::iter::repeat_n(pad_char, desired_len - len));
    Ok(padded)
}

/// Remove trailing `pad_char`s.
pub fn strip_padding(
    padded: &str,
    pad_char: char,
) -> &str {
    padded.trim_end_matches(pad_char)
}

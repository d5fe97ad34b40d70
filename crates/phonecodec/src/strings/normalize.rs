//! # Best-Effort Alphabet Normalization

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

use crate::alphabet::Alphabet;

/// Canonicalize `s` down to the members of `alphabet`.
///
/// Applies canonical decomposition (NFD), discards nonspacing marks
/// (general category `Mn`), and keeps only characters in `alphabet`.
///
/// Characters outside the alphabet are silently dropped; this never fails.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(alphabet)))]
pub fn normalize_to_ascii(
    s: &str,
    alphabet: &Alphabet,
) -> String {
    s.nfd()
        .filter(|&c| {
            !matches!(get_general_category(c), GeneralCategory::NonspacingMark)
                && alphabet.contains(c)
        })
        .collect()
}

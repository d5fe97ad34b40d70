//! # Ordered Character Alphabet

use core::fmt::Debug;

use crate::{
    errors::{CodecError, CodecResult},
    types::{PCHashMap, hash_map_with_capacity},
};

/// The decimal digits, in order.
pub const DIGIT_CHARS: &str = "0123456789";

/// The digits followed by the phone-number punctuation, in order.
///
/// ``' '`` is index 10; the pad character of the default padding.
pub const LETTER_CHARS: &str = "0123456789 .,:()+-";

/// Ordered ``index <=> char`` bijection.
///
/// The position of a character in the alphabet is its index;
/// the order must be identical at encode and decode time.
///
/// ## Style Hints
///
/// Instance names should prefer `alphabet`.
#[derive(Clone)]
pub struct Alphabet {
    /// Table mapping from index (position) to char.
    chars: Vec<char>,

    /// Hash map from char to index.
    char_indices: PCHashMap<char, usize>,
}

impl Debug for Alphabet {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Alphabet")
            .field("chars", &self.as_string())
            .finish()
    }
}

impl PartialEq for Alphabet {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.chars == other.chars
    }
}

impl Eq for Alphabet {}

impl Default for Alphabet {
    fn default() -> Self {
        Self::letters()
    }
}

impl Alphabet {
    /// Build an alphabet from an ordered sequence of characters.
    ///
    /// ## Arguments
    /// * `chars` - The characters, in index order.
    ///
    /// ## Returns
    /// A new `Alphabet`; or `InvalidArgument` if `chars` is empty
    /// or contains a duplicate.
    pub fn new<I>(chars: I) -> CodecResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(CodecError::InvalidArgument(
                "alphabet must not be empty".to_string(),
            ));
        }

        let mut char_indices = hash_map_with_capacity(chars.len());
        for (idx, &c) in chars.iter().enumerate() {
            if let Some(prev) = char_indices.insert(c, idx) {
                return Err(CodecError::InvalidArgument(format!(
                    "duplicate character {c:?} at indices {prev} and {idx}"
                )));
            }
        }

        Ok(Self {
            chars,
            char_indices,
        })
    }

    /// Build from one of the fixed char tables.
    fn from_table(table: &str) -> Self {
        let chars: Vec<char> = table.chars().collect();
        let char_indices = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self {
            chars,
            char_indices,
        }
    }

    /// The 10-character digit alphabet.
    pub fn digits() -> Self {
        Self::from_table(DIGIT_CHARS)
    }

    /// The 18-character letter alphabet: digits then `` .,:()+-``.
    pub fn letters() -> Self {
        Self::from_table(LETTER_CHARS)
    }

    /// The number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; alphabets are never empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters, in index order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The characters, in index order, as a string.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Is `c` a member of the alphabet?
    #[inline(always)]
    pub fn contains(
        &self,
        c: char,
    ) -> bool {
        self.char_indices.contains_key(&c)
    }

    /// Get the index of a character, if any.
    #[inline(always)]
    pub fn index_of(
        &self,
        c: char,
    ) -> Option<usize> {
        self.char_indices.get(&c).copied()
    }

    /// Get the character at an index, if any.
    #[inline(always)]
    pub fn char_at(
        &self,
        index: usize,
    ) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Get the index of a character.
    ///
    /// Exact equality match; no normalization is applied.
    ///
    /// ## Returns
    /// The index; or `InvalidCharacter` if `c` is not in the alphabet.
    pub fn char_to_index(
        &self,
        c: char,
    ) -> CodecResult<usize> {
        self.index_of(c)
            .ok_or_else(|| CodecError::InvalidCharacter {
                character: c,
                alphabet: self.as_string(),
            })
    }

    /// Get the character at an index.
    ///
    /// ## Returns
    /// The character; or `OutOfRange` if `index >= self.len()`.
    pub fn index_to_char(
        &self,
        index: usize,
    ) -> CodecResult<char> {
        self.char_at(index).ok_or(CodecError::OutOfRange {
            index,
            size: self.len(),
        })
    }
}

/// Get the index of `c` in `alphabet`.
///
/// See [`Alphabet::char_to_index`].
pub fn char_to_index(
    alphabet: &Alphabet,
    c: char,
) -> CodecResult<usize> {
    alphabet.char_to_index(c)
}

/// Get the character at `index` in `alphabet`.
///
/// See [`Alphabet::index_to_char`].
pub fn index_to_char(
    alphabet: &Alphabet,
    index: usize,
) -> CodecResult<char> {
    alphabet.index_to_char(index)
}

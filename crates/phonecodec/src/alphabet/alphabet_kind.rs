//! # Named Alphabet Selector

use crate::alphabet::Alphabet;

/// Selects one of the two named alphabets.
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
pub enum AlphabetKind {
    /// See: [`Alphabet::digits`]
    Digits,

    /// See: [`Alphabet::letters`]
    #[default]
    Letters,
}

impl AlphabetKind {
    /// Build the selected [`Alphabet`].
    pub fn alphabet(self) -> Alphabet {
        match self {
            Self::Digits => Alphabet::digits(),
            Self::Letters => Alphabet::letters(),
        }
    }
}

impl From<AlphabetKind> for Alphabet {
    fn from(kind: AlphabetKind) -> Self {
        kind.alphabet()
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(AlphabetKind::from_str("digits").unwrap(), AlphabetKind::Digits);
        assert_eq!(AlphabetKind::from_str("Letters").unwrap(), AlphabetKind::Letters);
        assert!(AlphabetKind::from_str("emoji").is_err());

        for kind in AlphabetKind::iter() {
            assert_eq!(AlphabetKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn test_alphabet() {
        assert_eq!(AlphabetKind::Digits.alphabet().len(), 10);
        assert_eq!(Alphabet::from(AlphabetKind::Letters).len(), 18);
        assert_eq!(AlphabetKind::default(), AlphabetKind::Letters);
    }
}

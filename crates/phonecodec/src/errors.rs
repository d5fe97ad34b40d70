//! # Error Types

/// Errors from phonecodec operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// A character is not a member of the alphabet used for a strict encode.
    #[error("character {character:?} is not permitted in alphabet {alphabet:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,

        /// The alphabet the character was checked against.
        alphabet: String,
    },

    /// An index lies outside ``[0, size)``.
    #[error("index {index} out of range for alphabet of size {size}")]
    OutOfRange {
        /// The offending index.
        index: usize,

        /// The alphabet size.
        size: usize,
    },

    /// A malformed parameter (padding length, probability, alphabet, shape).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for phonecodec operations.
pub type CodecResult<T> = core::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CodecError::InvalidCharacter {
            character: 'x',
            alphabet: "0123456789".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "character 'x' is not permitted in alphabet \"0123456789\""
        );

        let err = CodecError::OutOfRange { index: 18, size: 18 };
        assert_eq!(
            err.to_string(),
            "index 18 out of range for alphabet of size 18"
        );

        let err = CodecError::InvalidArgument("bad".to_string());
        assert_eq!(err.to_string(), "invalid argument: bad");
    }
}

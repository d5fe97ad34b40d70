//! # Index Tensor Encoder

use ndarray::Array2;

use crate::{
    alphabet::Alphabet,
    encoders::{EncoderOptions, batch::map_batch},
    errors::{CodecError, CodecResult},
    strings::pad_string_with,
    types::{IndexTensor, IndexType},
};

/// Check that every index of an alphabet of `size` fits in `T`.
pub(crate) fn check_index_capacity<T: IndexType>(size: usize) -> CodecResult<()> {
    if T::from_usize(size.saturating_sub(1)).is_some() {
        Ok(())
    } else {
        Err(CodecError::InvalidArgument(format!(
            "alphabet size ({size}) exceeds index type capacity"
        )))
    }
}

/// Pad `s` and map every char to its alphabet index.
fn padded_indices(
    s: &str,
    max_len: usize,
    alphabet: &Alphabet,
    options: &EncoderOptions,
) -> CodecResult<Vec<usize>> {
    pad_string_with(s, max_len, options.pad_char(), options.overflow())?
        .chars()
        .map(|c| alphabet.char_to_index(c))
        .collect()
}

/// Encode each string of a batch into a padded column of indices.
///
/// Every column has exactly `max_len` entries.
pub(crate) fn encode_index_columns<S>(
    strings: &[S],
    max_len: usize,
    alphabet: &Alphabet,
    options: &EncoderOptions,
) -> CodecResult<Vec<Vec<usize>>>
where
    S: AsRef<str> + Sync,
{
    map_batch(strings, options.parallel(), |s| {
        padded_indices(s, max_len, alphabet, options)
    })
}

/// Assemble ``(max_len, batch)`` from per-string columns.
pub(crate) fn columns_to_index_tensor<T: IndexType>(
    columns: &[Vec<usize>],
    max_len: usize,
) -> IndexTensor<T> {
    // Capacity is checked before any column is built.
    Array2::from_shape_fn((max_len, columns.len()), |(i, j)| {
        T::from_usize(columns[j][i]).unwrap_or_default()
    })
}

/// Encode a batch of strings as an index tensor with the given options.
///
/// ## Arguments
/// * `strings` - The batch.
/// * `max_len` - The tensor width, in chars.
/// * `alphabet` - The alphabet; must contain the pad character.
/// * `options` - Padding and parallelism options; `options.max_len` is ignored.
///
/// ## Returns
/// A tensor of shape ``(max_len, strings.len())``.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(strings, alphabet, options), fields(batch = strings.len()))
)]
pub fn strings_to_index_tensor_with<T, S>(
    strings: &[S],
    max_len: usize,
    alphabet: &Alphabet,
    options: &EncoderOptions,
) -> CodecResult<IndexTensor<T>>
where
    T: IndexType,
    S: AsRef<str> + Sync,
{
    check_index_capacity::<T>(alphabet.len())?;

    let columns = encode_index_columns(strings, max_len, alphabet, options)?;
    log::trace!("encoded {} strings to index columns of width {max_len}", strings.len());

    Ok(columns_to_index_tensor(&columns, max_len))
}

/// Encode a batch of strings as an index tensor.
///
/// Strings are right-padded with spaces to `max_len`; every char,
/// including the pad, must be a member of `alphabet`.
///
/// ## Example
/// ```rust
/// use ndarray::array;
/// use phonecodec::{Alphabet, strings_to_index_tensor};
///
/// let tensor = strings_to_index_tensor::<u32, _>(&["012", "9 ."], 4, &Alphabet::letters())?;
/// assert_eq!(tensor, array![[0, 9], [1, 10], [2, 11], [10, 10]]);
/// # Ok::<(), phonecodec::CodecError>(())
/// ```
pub fn strings_to_index_tensor<T, S>(
    strings: &[S],
    max_len: usize,
    alphabet: &Alphabet,
) -> CodecResult<IndexTensor<T>>
where
    T: IndexType,
    S: AsRef<str> + Sync,
{
    strings_to_index_tensor_with(strings, max_len, alphabet, &EncoderOptions::default())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::strings::PadOverflow;

    #[test]
    fn test_letters_example() {
        let tensor: IndexTensor<u32> =
            strings_to_index_tensor(&["012", "9 ."], 4, &Alphabet::letters()).unwrap();

        assert_eq!(tensor.dim(), (4, 2));
        assert_eq!(tensor, array![[0, 9], [1, 10], [2, 11], [10, 10]]);

        // The pad index is the space index in both columns.
        assert_eq!(tensor[[3, 0]], tensor[[3, 1]]);
    }

    #[test]
    fn test_index_types() {
        let letters = Alphabet::letters();
        let tensor: IndexTensor<u8> = strings_to_index_tensor(&["+1"], 2, &letters).unwrap();
        assert_eq!(tensor, array![[16u8], [1]]);

        let tensor: IndexTensor<usize> = strings_to_index_tensor(&["+1"], 2, &letters).unwrap();
        assert_eq!(tensor, array![[16usize], [1]]);
    }

    #[test]
    fn test_empty_batch() {
        let tensor: IndexTensor<u32> =
            strings_to_index_tensor::<u32, &str>(&[], 5, &Alphabet::letters()).unwrap();
        assert_eq!(tensor.dim(), (5, 0));

        let tensor: IndexTensor<u32> =
            strings_to_index_tensor(&["", ""], 0, &Alphabet::letters()).unwrap();
        assert_eq!(tensor.dim(), (0, 2));
    }

    #[test]
    fn test_invalid_character() {
        let err = strings_to_index_tensor::<u32, _>(&["555", "5x5"], 3, &Alphabet::letters())
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidCharacter { character: 'x', .. }
        ));
    }

    #[test]
    fn test_pad_must_be_in_alphabet() {
        // The digit alphabet has no space.
        let err =
            strings_to_index_tensor::<u32, _>(&["55"], 3, &Alphabet::digits()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidCharacter { character: ' ', .. }
        ));

        // Exact width needs no pad.
        let tensor: IndexTensor<u32> =
            strings_to_index_tensor(&["55"], 2, &Alphabet::digits()).unwrap();
        assert_eq!(tensor, array![[5], [5]]);
    }

    #[test]
    fn test_options() {
        let options = EncoderOptions::default()
            .with_pad_char('0')
            .with_overflow(PadOverflow::Truncate);

        let tensor: IndexTensor<u32> =
            strings_to_index_tensor_with(&["12345", "9"], 3, &Alphabet::digits(), &options)
                .unwrap();
        assert_eq!(tensor, array![[1, 9], [2, 0], [3, 0]]);

        assert!(matches!(
            strings_to_index_tensor::<u32, _>(&["12345"], 3, &Alphabet::digits()),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_index_capacity() {
        let wide = Alphabet::new((0..300u32).filter_map(char::from_u32)).unwrap();
        assert!(check_index_capacity::<u8>(wide.len()).is_err());
        assert!(check_index_capacity::<u16>(wide.len()).is_ok());
        assert!(check_index_capacity::<u8>(256).is_ok());

        assert!(matches!(
            strings_to_index_tensor::<u8, _>(&["a"], 1, &wide),
            Err(CodecError::InvalidArgument(_))
        ));
    }
}

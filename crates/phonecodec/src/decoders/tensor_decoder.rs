//! # Index Tensor Decoder

use ndarray::{ArrayBase, Axis, Data, Ix2};

use crate::{
    alphabet::Alphabet,
    errors::CodecResult,
    types::IndexType,
};

/// Map one index cell back to its character.
#[inline(always)]
fn cell_to_char<T: IndexType>(
    alphabet: &Alphabet,
    cell: T,
) -> CodecResult<char> {
    alphabet.index_to_char(cell.to_usize().unwrap_or(usize::MAX))
}

/// Decode an index tensor into one diagnostic string.
///
/// Characters are concatenated position-major: every batch element of
/// position 0, then every batch element of position 1, and so on.
/// For a single-column tensor this is the padded string. Padding is kept.
///
/// ## Returns
/// The string; or `OutOfRange` on any cell ``>= alphabet.len()``.
pub fn index_tensor_to_string<T, S>(
    tensor: &ArrayBase<S, Ix2>,
    alphabet: &Alphabet,
) -> CodecResult<String>
where
    T: IndexType,
    S: Data<Elem = T>,
{
    tensor
        .iter()
        .map(|&cell| cell_to_char(alphabet, cell))
        .collect()
}

/// Decode each column of an index tensor into its (padded) string.
///
/// This is the per-string inverse of
/// [`strings_to_index_tensor`](crate::encoders::strings_to_index_tensor).
///
/// ## Returns
/// One string per batch column; or `OutOfRange` on any cell ``>= alphabet.len()``.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(tensor, alphabet)))]
pub fn index_tensor_to_strings<T, S>(
    tensor: &ArrayBase<S, Ix2>,
    alphabet: &Alphabet,
) -> CodecResult<Vec<String>>
where
    T: IndexType,
    S: Data<Elem = T>,
{
    tensor
        .axis_iter(Axis(1))
        .map(|column| {
            column
                .iter()
                .map(|&cell| cell_to_char(alphabet, cell))
                .collect::<CodecResult<String>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{encoders::strings_to_index_tensor, errors::CodecError, types::IndexTensor};

    #[test]
    fn test_single_column_roundtrip() {
        let letters = Alphabet::letters();
        let tensor: IndexTensor<u32> =
            strings_to_index_tensor(&["+1 (212)"], 10, &letters).unwrap();
        assert_eq!(index_tensor_to_string(&tensor, &letters).unwrap(), "+1 (212)  ");
    }

    #[test]
    fn test_position_major_concatenation() {
        let letters = Alphabet::letters();
        let tensor: IndexTensor<u32> = array![[0, 9], [1, 10], [2, 11], [10, 10]];
        assert_eq!(index_tensor_to_string(&tensor, &letters).unwrap(), "091 2.  ");
    }

    #[test]
    fn test_columns() {
        let letters = Alphabet::letters();
        let tensor: IndexTensor<u32> =
            strings_to_index_tensor(&["012", "9 .", ""], 4, &letters).unwrap();
        assert_eq!(
            index_tensor_to_strings(&tensor, &letters).unwrap(),
            vec!["012 ", "9 . ", "    "]
        );
    }

    #[test]
    fn test_out_of_range() {
        let digits = Alphabet::digits();
        let tensor: IndexTensor<u32> = array![[1], [10]];
        assert_eq!(
            index_tensor_to_string(&tensor, &digits),
            Err(CodecError::OutOfRange { index: 10, size: 10 })
        );
        assert_eq!(
            index_tensor_to_strings(&tensor, &digits),
            Err(CodecError::OutOfRange { index: 10, size: 10 })
        );
    }
}

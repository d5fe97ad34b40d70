//! # One-Hot Encoder

use ndarray::{Array3, ArrayBase, Data, Ix2};

use crate::{
    errors::{CodecError, CodecResult},
    types::{IndexType, OneHotTensor},
};

/// Expand an index tensor into a one-hot tensor for the recurrent network.
///
/// For each ``(position, batch)`` cell holding `v`, the `v`-th depth slot
/// is 1 and all others are 0.
///
/// ## Arguments
/// * `tensor` - An index tensor of shape ``(max_len, batch)``.
/// * `alphabet_size` - The depth of the result.
///
/// ## Returns
/// A tensor of shape ``(max_len, batch, alphabet_size)``;
/// or `OutOfRange` if any cell is ``>= alphabet_size``.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(tensor)))]
pub fn index_tensor_to_one_hot<T, S>(
    tensor: &ArrayBase<S, Ix2>,
    alphabet_size: usize,
) -> CodecResult<OneHotTensor>
where
    T: IndexType,
    S: Data<Elem = T>,
{
    let (n, d) = tensor.dim();
    let mut encoded = Array3::zeros((n, d, alphabet_size));

    for ((i, j), &v) in tensor.indexed_iter() {
        let index = v.to_usize().unwrap_or(usize::MAX);
        if index >= alphabet_size {
            return Err(CodecError::OutOfRange {
                index,
                size: alphabet_size,
            });
        }
        encoded[[i, j, index]] = 1.0;
    }

    Ok(encoded)
}

//! # Soft Tensor Argmax Decoder
//!
//! Collapses probability and one-hot tensors (or network outputs of the
//! same shape) back to index tensors.

use ndarray::{ArrayBase, ArrayView1, Axis, Data, Ix3};

use crate::{
    encoders::check_index_capacity,
    errors::{CodecError, CodecResult},
    types::{IndexTensor, IndexType},
};

/// Index of the largest value; the first one wins ties and NaN never wins.
fn argmax(lane: ArrayView1<'_, f32>) -> usize {
    let mut best = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (idx, &value) in lane.iter().enumerate() {
        if value > best_value {
            best = idx;
            best_value = value;
        }
    }
    best
}

/// Collapse a ``(max_len, batch, alphabet_size)`` tensor to its argmax indices.
///
/// ## Returns
/// An index tensor of shape ``(max_len, batch)``;
/// or `InvalidArgument` if the alphabet axis is empty or too wide for `T`.
pub fn probability_tensor_to_index_tensor<T, S>(
    tensor: &ArrayBase<S, Ix3>,
) -> CodecResult<IndexTensor<T>>
where
    T: IndexType,
    S: Data<Elem = f32>,
{
    let (_, _, depth) = tensor.dim();
    if depth == 0 {
        return Err(CodecError::InvalidArgument(
            "cannot take argmax over an empty alphabet axis".to_string(),
        ));
    }
    check_index_capacity::<T>(depth)?;

    Ok(tensor.map_axis(Axis(2), |lane| {
        T::from_usize(argmax(lane)).unwrap_or_default()
    }))
}

#[cfg(test)]
mod tests {
    use ndarray::{Array3, array};

    use super::*;
    use crate::{
        alphabet::Alphabet,
        encoders::{
            index_tensor_to_one_hot,
            strings_to_default_probability_tensor,
            strings_to_index_tensor,
        },
    };

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(array![0.1, 0.7, 0.2].view()), 1);
        assert_eq!(argmax(array![0.5, 0.5].view()), 0);
        assert_eq!(argmax(array![f32::NAN, 0.2, 0.3].view()), 2);
        assert_eq!(argmax(array![f32::NAN, f32::NAN].view()), 0);
    }

    #[test]
    fn test_probability_roundtrip() {
        let letters = Alphabet::letters();
        let strings = ["+1 212", "555-01"];

        let expected: IndexTensor<u32> = strings_to_index_tensor(&strings, 8, &letters).unwrap();

        let probs = strings_to_default_probability_tensor(&strings, 8, &letters).unwrap();
        assert_eq!(probability_tensor_to_index_tensor::<u32, _>(&probs).unwrap(), expected);

        let one_hot = index_tensor_to_one_hot(&expected, letters.len()).unwrap();
        assert_eq!(probability_tensor_to_index_tensor::<u32, _>(&one_hot).unwrap(), expected);
    }

    #[test]
    fn test_empty_depth() {
        let tensor: Array3<f32> = Array3::zeros((2, 2, 0));
        assert!(matches!(
            probability_tensor_to_index_tensor::<u32, _>(&tensor),
            Err(CodecError::InvalidArgument(_))
        ));
    }
}

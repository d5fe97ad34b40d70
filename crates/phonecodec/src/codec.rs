//! # String Codec
//!
//! [`StringCodec`] bundles an [`Alphabet`] with [`EncoderOptions`],
//! so the collaborators feeding a recurrent network can share one
//! configuration for both directions.

use ndarray::{ArrayBase, Data, Ix2};

use crate::{
    alphabet::{Alphabet, AlphabetKind},
    decoders::{index_tensor_to_string, index_tensor_to_strings},
    encoders::{
        EncoderOptions,
        index_tensor_to_one_hot,
        strings_to_index_tensor_with,
        strings_to_probability_tensor_with,
    },
    errors::CodecResult,
    strings::{normalize_to_ascii, strip_padding},
    types::{IndexTensor, IndexType, OneHotTensor, ProbTensor},
};

/// Alphabet-bound string/tensor codec.
///
/// ## Style Hints
///
/// Instance names should prefer `codec`.
#[derive(Debug, Clone, PartialEq)]
pub struct StringCodec {
    alphabet: Alphabet,
    options: EncoderOptions,
}

impl From<AlphabetKind> for StringCodec {
    fn from(kind: AlphabetKind) -> Self {
        Self {
            alphabet: kind.alphabet(),
            options: EncoderOptions::default(),
        }
    }
}

impl StringCodec {
    /// Build a codec.
    ///
    /// ## Returns
    /// A new `StringCodec`; or `InvalidArgument` if the options are invalid.
    pub fn new(
        alphabet: Alphabet,
        options: EncoderOptions,
    ) -> CodecResult<Self> {
        options.validate()?;
        Ok(Self { alphabet, options })
    }

    /// Get the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Get the options.
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// The tensor width used for `strings`.
    ///
    /// See: [`EncoderOptions::effective_max_len`]
    pub fn max_len_for<S: AsRef<str>>(
        &self,
        strings: &[S],
    ) -> usize {
        self.options.effective_max_len(strings)
    }

    /// Encode a batch as a ``(max_len, batch)`` index tensor.
    pub fn encode_indices<T, S>(
        &self,
        strings: &[S],
    ) -> CodecResult<IndexTensor<T>>
    where
        T: IndexType,
        S: AsRef<str> + Sync,
    {
        let max_len = self.max_len_for(strings);
        log::debug!("encoding {} strings as indices, width {max_len}", strings.len());
        strings_to_index_tensor_with(strings, max_len, &self.alphabet, &self.options)
    }

    /// Encode a batch as a ``(max_len, batch, alphabet_size)`` probability tensor.
    pub fn encode_probabilities<S>(
        &self,
        strings: &[S],
    ) -> CodecResult<ProbTensor>
    where
        S: AsRef<str> + Sync,
    {
        let max_len = self.max_len_for(strings);
        log::debug!(
            "encoding {} strings as {} probabilities, width {max_len}",
            strings.len(),
            self.options.probability_mode()
        );
        strings_to_probability_tensor_with(strings, max_len, &self.alphabet, &self.options)
    }

    /// Encode a batch as a ``(max_len, batch, alphabet_size)`` one-hot tensor.
    pub fn encode_one_hot<S>(
        &self,
        strings: &[S],
    ) -> CodecResult<OneHotTensor>
    where
        S: AsRef<str> + Sync,
    {
        let indices: IndexTensor<usize> = self.encode_indices(strings)?;
        index_tensor_to_one_hot(&indices, self.alphabet.len())
    }

    /// Decode a whole tensor into one position-major diagnostic string.
    ///
    /// See: [`index_tensor_to_string`]
    pub fn decode_string<T, S>(
        &self,
        tensor: &ArrayBase<S, Ix2>,
    ) -> CodecResult<String>
    where
        T: IndexType,
        S: Data<Elem = T>,
    {
        index_tensor_to_string(tensor, &self.alphabet)
    }

    /// Decode each batch column into its string.
    ///
    /// ## Arguments
    /// * `tensor` - The ``(max_len, batch)`` index tensor.
    /// * `strip` - Remove trailing pad characters.
    pub fn decode_strings<T, S>(
        &self,
        tensor: &ArrayBase<S, Ix2>,
        strip: bool,
    ) -> CodecResult<Vec<String>>
    where
        T: IndexType,
        S: Data<Elem = T>,
    {
        let strings = index_tensor_to_strings(tensor, &self.alphabet)?;
        if !strip {
            return Ok(strings);
        }
        let pad_char = self.options.pad_char();
        Ok(strings
            .iter()
            .map(|s| strip_padding(s, pad_char).to_string())
            .collect())
    }

    /// Reduce free text to the codec's alphabet.
    ///
    /// See: [`normalize_to_ascii`]
    pub fn normalize(
        &self,
        s: &str,
    ) -> String {
        normalize_to_ascii(s, &self.alphabet)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Axis, array};

    use super::*;
    use crate::{
        encoders::ProbabilityMode,
        errors::CodecError,
        strings::PadOverflow,
        types::static_is_send_sync_check,
    };

    #[test]
    fn test_send_sync() {
        static_is_send_sync_check(&StringCodec::from(AlphabetKind::Letters));
    }

    #[test]
    fn test_new_validates() {
        let options = EncoderOptions::default().with_true_index_prob(1.5);
        assert!(matches!(
            StringCodec::new(Alphabet::letters(), options),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_inferred_width() {
        let codec = StringCodec::from(AlphabetKind::Letters);
        let tensor: IndexTensor<u32> = codec.encode_indices(&["012", "9 .:"]).unwrap();
        assert_eq!(tensor, array![[0, 9], [1, 10], [2, 11], [10, 13]]);

        assert_eq!(
            codec.decode_strings(&tensor, false).unwrap(),
            vec!["012 ", "9 .:"]
        );
        assert_eq!(codec.decode_strings(&tensor, true).unwrap(), vec!["012", "9 .:"]);
        assert_eq!(codec.decode_string(&tensor).unwrap(), "091 2. :");
    }

    #[test]
    fn test_fixed_width_truncate() {
        let options = EncoderOptions::default()
            .with_max_len(3)
            .with_overflow(PadOverflow::Truncate);
        let codec = StringCodec::new(Alphabet::letters(), options).unwrap();

        let tensor: IndexTensor<u8> = codec.encode_indices(&["(212)", "1"]).unwrap();
        assert_eq!(tensor.dim(), (3, 2));
        assert_eq!(codec.decode_strings(&tensor, true).unwrap(), vec!["(21", "1"]);
    }

    #[test]
    fn test_soft_encodings() {
        let options = EncoderOptions::default().with_probability_mode(ProbabilityMode::Exact);
        let codec = StringCodec::new(Alphabet::digits(), options).unwrap();

        let probs = codec.encode_probabilities(&["12", "34"]).unwrap();
        assert_eq!(probs.dim(), (2, 2, 10));
        assert!((probs[[0, 1, 3]] - 0.99).abs() < 1e-6);

        let one_hot = codec.encode_one_hot(&["12", "34"]).unwrap();
        assert_eq!(one_hot.dim(), (2, 2, 10));
        assert_eq!(one_hot[[1, 0, 2]], 1.0);
        for slice in one_hot.lanes(Axis(2)) {
            assert_eq!(slice.sum(), 1.0);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let strings: Vec<String> = (0..64).map(|i| format!("+{i} ({i}) 555-{i:04}")).collect();

        let serial = StringCodec::from(AlphabetKind::Letters);
        let parallel = StringCodec::new(
            Alphabet::letters(),
            EncoderOptions::default().with_parallel(true),
        )
        .unwrap();

        let a: IndexTensor<u32> = serial.encode_indices(&strings).unwrap();
        let b: IndexTensor<u32> = parallel.encode_indices(&strings).unwrap();
        assert_eq!(a, b);

        assert_eq!(
            serial.encode_probabilities(&strings).unwrap(),
            parallel.encode_probabilities(&strings).unwrap()
        );
    }

    #[test]
    fn test_normalize() {
        let codec = StringCodec::from(AlphabetKind::Digits);
        assert_eq!(codec.normalize("+1 (212) 555-0100"), "12125550100");
    }
}

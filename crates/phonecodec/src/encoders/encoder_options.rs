//! # Encoder Options
//!
//! Options for configuring a [`StringCodec`](crate::StringCodec).

use crate::{
    encoders::ProbabilityMode,
    errors::{CodecError, CodecResult},
    strings::{DEFAULT_PAD_CHAR, PadOverflow},
};

/// The default probability mass placed on the true index.
pub const DEFAULT_TRUE_INDEX_PROB: f32 = 0.99;

/// Check that `p` is a finite probability in ``[0, 1]``.
pub fn check_true_index_prob(p: f32) -> CodecResult<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(CodecError::InvalidArgument(format!(
            "true_index_prob must be in [0, 1], got {p}"
        )))
    }
}

/// Options for configuring string encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderOptions {
    /// The fixed tensor width, in chars.
    ///
    /// When `None`, the longest string in each batch is used.
    pub max_len: Option<usize>,

    /// The pad character; must be a member of the alphabet.
    pub pad_char: char,

    /// What to do with strings wider than `max_len`.
    pub overflow: PadOverflow,

    /// Mass placed on the true index of probability tensors.
    pub true_index_prob: f32,

    /// How probability tensors are filled.
    pub probability_mode: ProbabilityMode,

    /// Should batches be encoded in parallel?
    ///
    /// Only has an effect with the ``rayon`` feature.
    pub parallel: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            max_len: None,
            pad_char: DEFAULT_PAD_CHAR,
            overflow: PadOverflow::Error,
            true_index_prob: DEFAULT_TRUE_INDEX_PROB,
            probability_mode: ProbabilityMode::Additive,
            parallel: false,
        }
    }
}

impl EncoderOptions {
    /// Validate the options.
    pub fn validate(&self) -> CodecResult<()> {
        check_true_index_prob(self.true_index_prob)
    }

    /// Get the tensor width for a batch.
    ///
    /// Returns the configured `max_len`; or the widest string (in chars).
    pub fn effective_max_len<S: AsRef<str>>(
        &self,
        strings: &[S],
    ) -> usize {
        match self.max_len {
            Some(max_len) => max_len,
            None => strings
                .iter()
                .map(|s| s.as_ref().chars().count())
                .max()
                .unwrap_or(0),
        }
    }

    /// Get the configured `max_len`.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Set the configured `max_len`.
    pub fn set_max_len<L>(
        &mut self,
        max_len: L,
    ) where
        L: Into<Option<usize>>,
    {
        self.max_len = max_len.into();
    }

    /// Set the configured `max_len` and return the options.
    pub fn with_max_len<L>(
        mut self,
        max_len: L,
    ) -> Self
    where
        L: Into<Option<usize>>,
    {
        self.set_max_len(max_len);
        self
    }

    /// Get the configured pad character.
    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    /// Set the configured pad character.
    pub fn set_pad_char(
        &mut self,
        pad_char: char,
    ) {
        self.pad_char = pad_char;
    }

    /// Set the configured pad character and return the options.
    pub fn with_pad_char(
        mut self,
        pad_char: char,
    ) -> Self {
        self.set_pad_char(pad_char);
        self
    }

    /// Get the configured [`PadOverflow`] policy.
    pub fn overflow(&self) -> PadOverflow {
        self.overflow
    }

    /// Set the configured [`PadOverflow`] policy.
    pub fn set_overflow(
        &mut self,
        overflow: PadOverflow,
    ) {
        self.overflow = overflow;
    }

    /// Set the configured [`PadOverflow`] policy and return the options.
    pub fn with_overflow(
        mut self,
        overflow: PadOverflow,
    ) -> Self {
        self.set_overflow(overflow);
        self
    }

    /// Get the configured true-index probability.
    pub fn true_index_prob(&self) -> f32 {
        self.true_index_prob
    }

    /// Set the configured true-index probability.
    ///
    /// Range checking is deferred to [`validate`](Self::validate).
    pub fn set_true_index_prob(
        &mut self,
        true_index_prob: f32,
    ) {
        self.true_index_prob = true_index_prob;
    }

    /// Set the configured true-index probability and return the options.
    pub fn with_true_index_prob(
        mut self,
        true_index_prob: f32,
    ) -> Self {
        self.set_true_index_prob(true_index_prob);
        self
    }

    /// Get the configured [`ProbabilityMode`].
    pub fn probability_mode(&self) -> ProbabilityMode {
        self.probability_mode
    }

    /// Set the configured [`ProbabilityMode`].
    pub fn set_probability_mode(
        &mut self,
        probability_mode: ProbabilityMode,
    ) {
        self.probability_mode = probability_mode;
    }

    /// Set the configured [`ProbabilityMode`] and return the options.
    pub fn with_probability_mode(
        mut self,
        probability_mode: ProbabilityMode,
    ) -> Self {
        self.set_probability_mode(probability_mode);
        self
    }

    /// Gets the configured parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EncoderOptions::default();
        assert_eq!(options.max_len(), None);
        assert_eq!(options.pad_char(), ' ');
        assert_eq!(options.overflow(), PadOverflow::Error);
        assert_eq!(options.true_index_prob(), 0.99);
        assert_eq!(options.probability_mode(), ProbabilityMode::Additive);
        assert!(!options.parallel());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let options = EncoderOptions::default()
            .with_max_len(12)
            .with_pad_char('-')
            .with_overflow(PadOverflow::Truncate)
            .with_true_index_prob(0.5)
            .with_probability_mode(ProbabilityMode::Exact)
            .with_parallel(true);

        assert_eq!(options.max_len(), Some(12));
        assert_eq!(options.pad_char(), '-');
        assert_eq!(options.overflow(), PadOverflow::Truncate);
        assert_eq!(options.true_index_prob(), 0.5);
        assert_eq!(options.probability_mode(), ProbabilityMode::Exact);
        assert!(options.parallel());

        let options = options.with_max_len(None);
        assert_eq!(options.max_len(), None);
    }

    #[test]
    fn test_effective_max_len() {
        let options = EncoderOptions::default();
        assert_eq!(options.effective_max_len(&["1", "\u{e9}\u{e9}\u{e9}", "22"]), 3);
        assert_eq!(options.effective_max_len::<&str>(&[]), 0);

        let options = options.with_max_len(7);
        assert_eq!(options.effective_max_len(&["1"]), 7);
    }

    #[test]
    fn test_check_true_index_prob() {
        assert!(check_true_index_prob(0.0).is_ok());
        assert!(check_true_index_prob(1.0).is_ok());
        assert!(check_true_index_prob(-0.01).is_err());
        assert!(check_true_index_prob(1.01).is_err());
        assert!(check_true_index_prob(f32::NAN).is_err());

        let options = EncoderOptions::default().with_true_index_prob(2.0);
        assert!(matches!(
            options.validate(),
            Err(CodecError::InvalidArgument(_))
        ));
    }
}

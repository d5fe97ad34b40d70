use phonecodec::{
    AlphabetKind,
    EncoderOptions,
    PadOverflow,
    ProbabilityMode,
    StringCodec,
    encoders::DEFAULT_TRUE_INDEX_PROB,
    strings::DEFAULT_PAD_CHAR,
};

/// Codec configuration arg group.
#[derive(clap::Args, Debug)]
pub struct CodecArgs {
    /// Alphabet to encode against: "digits" or "letters".
    #[arg(long, default_value = "letters")]
    alphabet: AlphabetKind,

    /// Fixed tensor width; defaults to the longest input.
    #[arg(long)]
    max_len: Option<usize>,

    /// Pad character; must be in the alphabet.
    #[arg(long, default_value_t = DEFAULT_PAD_CHAR)]
    pad_char: char,

    /// Over-long input policy: "error" or "truncate".
    #[arg(long, default_value = "error")]
    overflow: PadOverflow,

    /// Probability mass of the true character.
    #[arg(long, default_value_t = DEFAULT_TRUE_INDEX_PROB)]
    true_index_prob: f32,

    /// Probability layout: "additive" or "exact".
    #[arg(long, default_value = "additive")]
    probability_mode: ProbabilityMode,

    /// Encode batch elements in parallel.
    #[arg(long)]
    parallel: bool,
}

impl CodecArgs {
    /// Build the encoder options.
    pub fn options(&self) -> EncoderOptions {
        EncoderOptions::default()
            .with_max_len(self.max_len)
            .with_pad_char(self.pad_char)
            .with_overflow(self.overflow)
            .with_true_index_prob(self.true_index_prob)
            .with_probability_mode(self.probability_mode)
            .with_parallel(self.parallel)
    }

    /// Build the codec.
    pub fn build_codec(&self) -> Result<StringCodec, Box<dyn std::error::Error>> {
        let codec = StringCodec::new(self.alphabet.alphabet(), self.options())?;
        log::debug!("codec: {codec:?}");
        Ok(codec)
    }
}

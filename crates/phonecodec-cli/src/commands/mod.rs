use crate::commands::{
    alphabet::AlphabetArgs,
    decode::DecodeArgs,
    encode::EncodeArgs,
    format::FormatArgs,
    normalize::NormalizeArgs,
};

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod format;
pub mod normalize;

/// Subcommands for pcodec.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode lines of text as a tensor.
    Encode(EncodeArgs),

    /// Decode a text index tensor back to strings.
    Decode(DecodeArgs),

    /// Reduce free text to an alphabet.
    Normalize(NormalizeArgs),

    /// Render phone numbers under punctuation layouts.
    Format(FormatArgs),

    /// List an alphabet's index/character table.
    Alphabet(AlphabetArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Normalize(cmd) => cmd.run(),
            Commands::Format(cmd) => cmd.run(),
            Commands::Alphabet(cmd) => cmd.run(),
        }
    }
}

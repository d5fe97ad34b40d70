use std::io::Write;

use phonecodec::{IndexTensor, StringCodec};

use crate::{
    codec_selector::CodecArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    tensor_io::{TensorFormat, write_tensor},
};

/// Tensor representation to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum Representation {
    /// ``(max_len, batch)`` alphabet indices.
    #[default]
    Indices,

    /// ``(max_len, batch, alphabet_size)`` noisy categoricals.
    Probabilities,

    /// ``(max_len, batch, alphabet_size)`` one-hot rows.
    OneHot,
}

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    codec: CodecArgs,

    /// Tensor representation.
    #[arg(long, value_enum, default_value_t = Representation::Indices)]
    representation: Representation,

    /// Output format.
    #[arg(long, value_enum, default_value_t = TensorFormat::Text)]
    format: TensorFormat,

    /// Normalize each line to the alphabet before encoding.
    #[arg(long)]
    normalize: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let codec = self.codec.build_codec()?;

        let mut lines = self.input.read_lines()?;
        if self.normalize {
            lines = lines.iter().map(|line| codec.normalize(line)).collect();
        }

        let mut writer = self.output.open_writer()?;
        run_encode(
            &codec,
            &lines,
            self.representation,
            self.format,
            &mut writer,
        )
    }
}

fn run_encode(
    codec: &StringCodec,
    lines: &[String],
    representation: Representation,
    format: TensorFormat,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match representation {
        Representation::Indices => {
            let tensor: IndexTensor<u32> = codec.encode_indices(lines)?;
            write_tensor(writer, &tensor, format)
        }
        Representation::Probabilities => {
            write_tensor(writer, &codec.encode_probabilities(lines)?, format)
        }
        Representation::OneHot => write_tensor(writer, &codec.encode_one_hot(lines)?, format),
    }
}

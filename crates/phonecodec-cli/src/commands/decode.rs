use std::io::Write;

use phonecodec::{IndexTensor, StringCodec};

use crate::{
    codec_selector::CodecArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    tensor_io::parse_index_tensor,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    codec: CodecArgs,

    /// Remove trailing pad characters from each string.
    #[arg(long)]
    strip: bool,

    /// Emit one position-major string for the whole tensor.
    #[arg(long, conflicts_with = "strip")]
    joined: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let codec = self.codec.build_codec()?;
        let tensor = parse_index_tensor(&self.input.read_lines()?)?;
        log::info!("decoding tensor of shape {:?}", tensor.shape());

        let mut writer = self.output.open_writer()?;
        run_decode(&codec, &tensor, self.strip, self.joined, &mut writer)
    }
}

fn run_decode(
    codec: &StringCodec,
    tensor: &IndexTensor<u32>,
    strip: bool,
    joined: bool,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if joined {
        writeln!(writer, "{}", codec.decode_string(tensor)?)?;
    } else {
        for s in codec.decode_strings(tensor, strip)? {
            writeln!(writer, "{s}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

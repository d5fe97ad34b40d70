use std::io::Write;

use phonecodec::StringCodec;

use crate::{
    codec_selector::CodecArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the normalize command.
#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    codec: CodecArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl NormalizeArgs {
    /// Run the normalize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let codec = self.codec.build_codec()?;
        let lines = self.input.read_lines()?;
        let mut writer = self.output.open_writer()?;
        run_normalize(&codec, &lines, &mut writer)
    }
}

fn run_normalize(
    codec: &StringCodec,
    lines: &[String],
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in lines {
        writeln!(writer, "{}", codec.normalize(line))?;
    }
    writer.flush()?;
    Ok(())
}

use std::io::Write;

use phonecodec::{Alphabet, AlphabetKind};

use crate::input_output::OutputArgs;

/// Args for the alphabet command.
#[derive(clap::Args, Debug)]
pub struct AlphabetArgs {
    /// Alphabet to list: "digits" or "letters".
    #[arg(long, default_value = "letters")]
    alphabet: AlphabetKind,

    #[command(flatten)]
    output: OutputArgs,
}

impl AlphabetArgs {
    /// Run the alphabet command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;
        write_table(&self.alphabet.alphabet(), &mut writer)
    }
}

/// Write one ``index<TAB>char`` row per character; chars are debug-quoted.
fn write_table(
    alphabet: &Alphabet,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for (idx, c) in alphabet.chars().iter().enumerate() {
        writeln!(writer, "{idx}\t{c:?}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table() {
        let mut buf: Vec<u8> = Vec::new();
        write_table(&Alphabet::letters(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "0\t'0'");
        assert_eq!(lines[10], "10\t' '");
        assert_eq!(lines[17], "17\t'-'");
    }
}

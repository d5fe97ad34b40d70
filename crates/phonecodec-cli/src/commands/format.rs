use std::io::Write;

use phonecodec::format::{PhoneNumberLayout, PhoneNumberParts};

use crate::input_output::OutputArgs;

/// Args for the format command.
#[derive(clap::Args, Debug)]
pub struct FormatArgs {
    /// Country extension digits.
    #[arg(long)]
    extension: String,

    /// Area prefix digits.
    #[arg(long)]
    prefix: String,

    /// Line number digit group; may be repeated.
    #[arg(long = "group", required = true)]
    groups: Vec<String>,

    /// Extension template selector.
    #[arg(long, default_value_t = 0)]
    extension_format: usize,

    /// Prefix template selector.
    #[arg(long, default_value_t = 0)]
    prefix_format: usize,

    /// Line number template selector.
    #[arg(long, default_value_t = 0)]
    number_format: usize,

    /// Render every distinct layout instead of the selected one.
    #[arg(long)]
    all: bool,

    /// Prefix each line with the layout name.
    #[arg(long)]
    show_layout: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl FormatArgs {
    /// The parts to render.
    fn parts(&self) -> PhoneNumberParts {
        PhoneNumberParts::new(
            self.extension.as_str(),
            self.prefix.as_str(),
            self.groups.iter().map(String::as_str),
        )
    }

    /// The layouts to render.
    fn layouts(&self) -> Vec<PhoneNumberLayout> {
        if self.all {
            PhoneNumberLayout::all().collect()
        } else {
            vec![PhoneNumberLayout::from_selectors(
                self.extension_format,
                self.prefix_format,
                self.number_format,
            )]
        }
    }

    /// Run the format command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;
        run_format(
            &self.parts(),
            &self.layouts(),
            self.show_layout,
            &mut writer,
        )
    }
}

fn run_format(
    parts: &PhoneNumberParts,
    layouts: &[PhoneNumberLayout],
    show_layout: bool,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for layout in layouts {
        let rendered = layout.render(parts);
        if show_layout {
            writeln!(
                writer,
                "{}/{}/{}\t{rendered}",
                layout.extension, layout.prefix, layout.number
            )?;
        } else {
            writeln!(writer, "{rendered}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

use stderrlog::{LogLevelNum, Timestamp};

/// Logging arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence all log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Prefix log lines with timestamps.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// Map a verbosity count to a log level.
    fn level(
        &self,
        default: u8,
    ) -> LogLevelNum {
        let level = match self.verbose {
            Some(verbose) if verbose > 0 => verbose,
            _ => default,
        };

        match level {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger for the library and the CLI.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .module("phonecodec")
            .module(env!("CARGO_CRATE_NAME"))
            .quiet(self.quiet)
            .verbosity(self.level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

/// Map a 0-5 verbosity onto a log level.
fn level_for(verbosity: u8) -> LogLevelNum {
    match verbosity {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

impl LogArgs {
    /// Install the stderr logger.
    ///
    /// Each `-v` raises the level one step above `default`.
    /// Only `zabbrev` modules log; the binary shares the library's name.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = if self.ts {
            Timestamp::Millisecond
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .module("zabbrev")
            .quiet(self.quiet)
            .verbosity(level_for(default.saturating_add(self.verbose)))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}

use clap::ArgAction;
use clap::Args;
use log::LevelFilter;

/// The verbosity flags shared by the command line tools. Warnings are shown
/// by default, every `-v` shows one more level of detail.
#[derive(Args, Debug)]
pub struct VerbosityFlag {
    #[arg(short, long, global = true, help = "Only print errors, overrides --verbose")]
    quiet: bool,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Print progress (-v), debug information (-vv) or every step of the algorithms (-vvv)"
    )]
    verbose: u8,
}

impl VerbosityFlag {
    /// Returns the log level filter selected by the flags.
    pub fn log_level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use test_log::test;

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        verbosity: VerbosityFlag,
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::parse_from(["tool"]);
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Warn);

        let cli = Cli::parse_from(["tool", "--verbose"]);
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Info);

        let cli = Cli::parse_from(["tool", "-vv"]);
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Debug);

        let cli = Cli::parse_from(["tool", "-vvvv"]);
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let cli = Cli::parse_from(["tool", "-q", "-vvv"]);
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Error);
    }
}

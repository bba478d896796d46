use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// The `stderrlog` level for this invocation.
    ///
    /// `-v` flags, when present, replace the `default` level.
    pub fn log_level(
        &self,
        default: u8,
    ) -> stderrlog::LogLevelNum {
        let level = if self.verbose > 0 {
            self.verbose
        } else {
            default
        };

        match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    /// Install the global stderr logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        logging: LogArgs,
    }

    #[test]
    fn test_log_level() {
        let args = TestArgs::parse_from(["test"]);
        assert!(matches!(
            args.logging.log_level(2),
            stderrlog::LogLevelNum::Warn
        ));

        let args = TestArgs::parse_from(["test", "-vvv"]);
        assert!(matches!(
            args.logging.log_level(2),
            stderrlog::LogLevelNum::Info
        ));

        let args = TestArgs::parse_from(["test", "-vvvvvv", "--ts", "-q"]);
        assert!(args.logging.quiet);
        assert!(args.logging.ts);
        assert!(matches!(
            args.logging.log_level(0),
            stderrlog::LogLevelNum::Trace
        ));
    }
}

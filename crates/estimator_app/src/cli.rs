use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "cost_estimator",
    version,
    about = "Estimate project costs from historical project-type data"
)]
pub struct Cli {
    /// Settings file (RON). Missing file means built-in defaults.
    #[arg(short, long, default_value = "estimator.ron")]
    pub settings: PathBuf,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log file path, used with `--log file`
    #[arg(long, default_value = "estimator.log")]
    pub log_file: PathBuf,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Terminal,
    #[value(name = "none")]
    Off,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Off => LogDestination::Disabled,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_log_to_file() {
        let cli = Cli::parse_from(["cost_estimator"]);
        assert_eq!(cli.settings, PathBuf::from("estimator.ron"));
        assert_eq!(cli.log, LogTarget::File);
        assert!(matches!(
            cli.log_destination(),
            LogDestination::File(path) if path == PathBuf::from("estimator.log")
        ));
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn log_flag_selects_destination() {
        let cli = Cli::parse_from(["cost_estimator", "--log", "terminal"]);
        assert!(matches!(cli.log_destination(), LogDestination::Terminal));

        let cli = Cli::parse_from(["cost_estimator", "--log", "none", "-v"]);
        assert!(matches!(cli.log_destination(), LogDestination::Disabled));
        assert_eq!(cli.log_level(), LevelFilter::Debug);

        let cli = Cli::parse_from(["cost_estimator", "--log", "file", "--log-file", "run.log"]);
        assert!(matches!(
            cli.log_destination(),
            LogDestination::File(path) if path == PathBuf::from("run.log")
        ));
    }

    #[test]
    fn unknown_log_target_is_rejected() {
        assert!(Cli::try_parse_from(["cost_estimator", "--log", "syslog"]).is_err());
    }
}

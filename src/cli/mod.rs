use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_OUTPUT_PATH;

pub mod generate;

pub use generate::run_generate;

#[derive(Parser, Debug)]
#[command(name = "affinity-mock")]
#[command(about = "Generate a mock CRM dataset as a JSON fixture file")]
#[command(version)]
pub struct Cli {
    /// Output file, overwritten on every run
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// Seed for reproducible data (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// JSON file overriding generator settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Log level: trace, debug, info, warn or error
    #[arg(
        short,
        long,
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["affinity-mock"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("affinity_db.json"));
        assert!(cli.seed.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "affinity-mock",
            "-o",
            "out/db.json",
            "--seed",
            "42",
            "--config",
            "gen.json",
            "-l",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.output, PathBuf::from("out/db.json"));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.config, Some(PathBuf::from("gen.json")));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["affinity-mock", "--log-level", "verbose"]).is_err());
        assert!(Cli::try_parse_from(["affinity-mock", "--log-level", "error"]).is_ok());
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["affinity-mock", "--seed", "abc"]).is_err());
    }
}

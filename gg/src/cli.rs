//! CLI argument parsing for Grumpy Gordon

use clap::Parser;
use std::path::PathBuf;

/// Grumpy Gordon - a grumpy command-line task tracker
#[derive(Parser, Debug)]
#[command(
    name = "gg",
    version,
    about = "A grumpy command-line task tracker",
    long_about = None,
    after_help = "Logs are written to: ~/.local/share/grumpygordon/logs/grumpygordon.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Task file to use instead of the configured one
    #[arg(short, long)]
    pub data_file: Option<PathBuf>,

    /// Never colour output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["gg"]);
        assert!(cli.config.is_none());
        assert!(cli.data_file.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(["gg", "-c", "/path/to/config.yml", "-v", "--data-file", "tasks.txt", "--no-color"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
        assert_eq!(cli.data_file, Some(PathBuf::from("tasks.txt")));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_cli_rejects_subcommands() {
        assert!(Cli::try_parse_from(["gg", "start"]).is_err());
    }
}

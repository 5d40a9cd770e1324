use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::mood::Mood;

/// A simple CLI tool to log and track your mood
#[derive(Parser, Debug)]
#[command(name = "moodgit", author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the usual locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Initialize a new mood journal
    #[command(visible_aliases = ["initialize", "create"])]
    Init {
        /// Wipe and recreate an existing journal
        #[arg(short, long)]
        force: bool,
    },

    /// Record a mood entry
    Add {
        /// How strongly you feel it, from 0 to 10
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=10))]
        intensity: u8,

        /// The mood to record
        #[arg(short = 'o', long, value_enum)]
        mood: Mood,

        /// Optional note
        #[arg(short, long, default_value = "")]
        message: String,

        /// Comma separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Replace the most recent entry instead of adding a new one
        #[arg(short, long)]
        amend: bool,
    },

    /// Show recent entries
    Log {
        /// Number of entries to print, or page size when interactive
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=500))]
        limit: Option<u16>,

        /// Browse, filter and search entries interactively
        #[arg(short, long)]
        interactive: bool,
    },

    /// Write a default configuration file
    Config {
        /// Destination, defaults to the user config directory
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_has_no_command() {
        let cli = Cli::parse_from(["moodgit"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_init_aliases_and_force() {
        for name in ["init", "initialize", "create"] {
            let cli = Cli::parse_from(["moodgit", name]);
            assert_eq!(cli.command, Some(Command::Init { force: false }));
        }

        let cli = Cli::parse_from(["moodgit", "init", "-f"]);
        assert_eq!(cli.command, Some(Command::Init { force: true }));
    }

    #[test]
    fn test_add_with_all_options() {
        let cli = Cli::parse_from([
            "moodgit", "add", "-i", "7", "-o", "happy", "-m", "sunny walk", "-t", "outdoors,friends", "-a",
        ]);

        assert_eq!(
            cli.command,
            Some(Command::Add {
                intensity: 7,
                mood: Mood::Happy,
                message: "sunny walk".to_string(),
                tags: vec!["outdoors".to_string(), "friends".to_string()],
                amend: true,
            })
        );
    }

    #[test]
    fn test_add_defaults() {
        let cli = Cli::parse_from(["moodgit", "add", "--intensity", "0", "--mood", "calm"]);

        assert_eq!(
            cli.command,
            Some(Command::Add {
                intensity: 0,
                mood: Mood::Calm,
                message: String::new(),
                tags: Vec::new(),
                amend: false,
            })
        );
    }

    #[test]
    fn test_add_rejects_out_of_range_intensity() {
        assert!(Cli::try_parse_from(["moodgit", "add", "-i", "11", "-o", "sad"]).is_err());
    }

    #[test]
    fn test_add_rejects_unknown_mood() {
        assert!(Cli::try_parse_from(["moodgit", "add", "-i", "3", "-o", "bored"]).is_err());
    }

    #[test]
    fn test_add_requires_intensity_and_mood() {
        assert!(Cli::try_parse_from(["moodgit", "add", "-o", "sad"]).is_err());
        assert!(Cli::try_parse_from(["moodgit", "add", "-i", "3"]).is_err());
    }

    #[test]
    fn test_log_options() {
        let cli = Cli::parse_from(["moodgit", "log"]);
        assert_eq!(
            cli.command,
            Some(Command::Log {
                limit: None,
                interactive: false
            })
        );

        let cli = Cli::parse_from(["moodgit", "log", "-l", "25", "-i"]);
        assert_eq!(
            cli.command,
            Some(Command::Log {
                limit: Some(25),
                interactive: true
            })
        );

        assert!(Cli::try_parse_from(["moodgit", "log", "-l", "0"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["moodgit", "log", "--config", "/tmp/moodgit.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/moodgit.toml")));
    }
}

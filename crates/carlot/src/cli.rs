//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the carlot CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// carlot - Browse and filter a used-car inventory
#[derive(Parser, Debug)]
#[command(name = "carlot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override inventory file path (default: from config)
    #[arg(long, global = true, env = "CARLOT_INVENTORY", value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cars matching the given filters
    #[command(alias = "l")]
    List {
        /// Minimum model year (free text, first number wins)
        #[arg(long, value_name = "TEXT")]
        year_min: Option<String>,

        /// Maximum model year
        #[arg(long, value_name = "TEXT")]
        year_max: Option<String>,

        /// Exact make (case-sensitive; empty means any)
        #[arg(short, long)]
        make: Option<String>,

        /// Minimum mileage
        #[arg(long, value_name = "TEXT")]
        mileage_min: Option<String>,

        /// Maximum mileage
        #[arg(long, value_name = "TEXT")]
        mileage_max: Option<String>,

        /// Minimum price in dollars
        #[arg(long, value_name = "TEXT")]
        price_min: Option<String>,

        /// Maximum price in dollars
        #[arg(long, value_name = "TEXT")]
        price_max: Option<String>,

        /// Exact color (case-sensitive; empty means any)
        #[arg(short, long)]
        color: Option<String>,
    },

    /// List the distinct makes in the inventory
    Makes,

    /// List the distinct colors in the inventory
    Colors,

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., inventory, output.color)
        key: String,

        /// Value to set
        value: String,
    },

    /// Print the config file path
    Path,

    /// Open the config file in $EDITOR
    Edit,
}

/// Supported shells for completion generation
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::try_parse_from(["carlot", "l", "--make", "Ford"]).unwrap();
        match cli.command {
            Some(Commands::List { make, .. }) => assert_eq!(make.as_deref(), Some("Ford")),
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["carlot", "-q", "-v", "makes"]).is_err());
    }
}

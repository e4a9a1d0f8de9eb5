//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, config::ConfigCommands, demo::DemoArgs, parts::PartsCommands,
    remove::RemoveArgs,
};

#[derive(Parser)]
#[command(name = "mechworks")]
#[command(author, version, about = "Machine parts inventory toolkit")]
#[command(long_about = "Inspect machine parts inventories and the robots that carry them: display, fly, work, and query parts by price, capability, or type.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Robot manifest (default: the built-in sample robot)
    #[arg(long, short = 'm', global = true, env = "MECHWORKS_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Enable every strict validation check while loading the manifest
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the sample session: display, fly, work, and every part query
    Demo(DemoArgs),

    /// Display the robot (cpu, machine, parts, model, speed)
    Show,

    /// Take the robot for a test flight
    Fly,

    /// Put the robot to work
    Work,

    /// Part queries
    #[command(subcommand)]
    Parts(PartsCommands),

    /// Remove every part with a number, then list the survivors
    Remove(RemoveArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Use the configured default, or plain text
    #[default]
    Auto,
    /// Plain text, one field per line
    Text,
    /// Tab-separated values (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
    /// Markdown tables
    Md,
    /// Just part numbers, one per line
    Id,
}

impl OutputFormat {
    /// Resolve `Auto` against a configured default
    pub fn resolve(self, configured: Option<&str>) -> OutputFormat {
        if self != OutputFormat::Auto {
            return self;
        }
        configured
            .and_then(|name| OutputFormat::from_str(name, true).ok())
            .filter(|format| *format != OutputFormat::Auto)
            .unwrap_or(OutputFormat::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(OutputFormat::Json.resolve(Some("csv")), OutputFormat::Json);
        assert_eq!(OutputFormat::Auto.resolve(Some("csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::Auto.resolve(Some("bogus")), OutputFormat::Text);
        assert_eq!(OutputFormat::Auto.resolve(None), OutputFormat::Text);
    }

    #[test]
    fn test_parse_parts_expensive() {
        let cli = Cli::try_parse_from(["mechworks", "-f", "json", "parts", "expensive", "200"]).unwrap();
        assert_eq!(cli.global.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Parts(_)));
    }
}

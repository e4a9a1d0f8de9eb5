//! `mechworks config` command - inspect configuration

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::effective_policy;
use crate::cli::GlobalOpts;
use crate::core::config::{Config, StrictSwitches, LOCAL_CONFIG_FILE};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (all layers merged)
    Show,

    /// Show paths to configuration files
    Path,

    /// List all available configuration keys
    Keys,
}

/// Known keys with descriptions
const KEYS: &[(&str, &str)] = &[
    ("default_format", "Output format used when --format is auto"),
    ("strict.reject_duplicate_partno", "Reject repeated part numbers in manifests"),
    ("strict.reject_negative_price", "Reject negative part prices in manifests"),
    ("strict.reject_empty_name", "Reject empty machine, cpu, model or type names"),
];

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let mut config = Config::load();
            config.strict = StrictSwitches::from(effective_policy(&config, global.strict));
            print!("{}", serde_yml::to_string(&config).into_diagnostic()?);
        }
        ConfigCommands::Path => {
            match Config::global_config_path() {
                Some(path) => println!("{} {}", style("global:").bold(), path.display()),
                None => println!("{} (unavailable)", style("global:").bold()),
            }
            let local = std::env::current_dir().into_diagnostic()?.join(LOCAL_CONFIG_FILE);
            println!("{} {}", style("local: ").bold(), local.display());
        }
        ConfigCommands::Keys => {
            for (key, description) in KEYS {
                println!("{:<32} {}", style(key).cyan(), description);
            }
        }
    }
    Ok(())
}

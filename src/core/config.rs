//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = ".mechworks.yaml";

/// Opt-in checks applied by `try_add_part` and manifest loading.
///
/// Every check is off by default; plain `add_part` never consults this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Reject a part whose number is already present in the machine
    pub reject_duplicate_partno: bool,

    /// Reject parts priced below zero
    pub reject_negative_price: bool,

    /// Reject empty machine, cpu, model or part type names
    pub reject_empty_name: bool,
}

impl ValidationPolicy {
    /// Policy with every check enabled
    pub fn strict() -> Self {
        Self {
            reject_duplicate_partno: true,
            reject_negative_price: true,
            reject_empty_name: true,
        }
    }

}

/// One config layer's view of the strict switches; unset keys defer to lower layers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrictSwitches {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_duplicate_partno: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_negative_price: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_empty_name: Option<bool>,
}

impl StrictSwitches {
    /// Every switch set to `enabled`
    pub fn all(enabled: bool) -> Self {
        Self {
            reject_duplicate_partno: Some(enabled),
            reject_negative_price: Some(enabled),
            reject_empty_name: Some(enabled),
        }
    }

    /// Override each switch that `other` sets
    fn merge(&mut self, other: StrictSwitches) {
        if other.reject_duplicate_partno.is_some() {
            self.reject_duplicate_partno = other.reject_duplicate_partno;
        }
        if other.reject_negative_price.is_some() {
            self.reject_negative_price = other.reject_negative_price;
        }
        if other.reject_empty_name.is_some() {
            self.reject_empty_name = other.reject_empty_name;
        }
    }

    /// Resolve to a policy; unset switches are off
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            reject_duplicate_partno: self.reject_duplicate_partno.unwrap_or(false),
            reject_negative_price: self.reject_negative_price.unwrap_or(false),
            reject_empty_name: self.reject_empty_name.unwrap_or(false),
        }
    }
}

impl From<ValidationPolicy> for StrictSwitches {
    fn from(policy: ValidationPolicy) -> Self {
        Self {
            reject_duplicate_partno: Some(policy.reject_duplicate_partno),
            reject_negative_price: Some(policy.reject_negative_price),
            reject_empty_name: Some(policy.reject_empty_name),
        }
    }
}

/// Mechworks configuration with layered hierarchy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strict validation switches
    pub strict: StrictSwitches,

    /// Default output format (text, tsv, csv, json, yaml, md)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_from(Self::global_config_path().as_deref(), &cwd)
    }

    /// Load configuration using an explicit global path and working directory
    pub fn load_from(global_path: Option<&Path>, cwd: &Path) -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/mechworks/config.yaml)
        if let Some(global) = global_path.and_then(Self::read_file) {
            config.merge(global);
        }

        // 3. Working directory config (./.mechworks.yaml)
        if let Some(local) = Self::read_file(&cwd.join(LOCAL_CONFIG_FILE)) {
            config.merge(local);
        }

        // 4. Environment variables
        if let Ok(strict) = std::env::var("MECHWORKS_STRICT") {
            match parse_flag(&strict) {
                Some(enabled) => config.strict = StrictSwitches::all(enabled),
                None => tracing::warn!(value = %strict, "ignoring unrecognised MECHWORKS_STRICT"),
            }
        }
        if let Ok(format) = std::env::var("MECHWORKS_FORMAT") {
            config.default_format = Some(format);
        }

        config
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mechworks")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                None
            }
        }
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.strict.merge(other.strict);
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_permissive() {
        let config = Config::default();
        assert_eq!(config.strict.policy(), ValidationPolicy::default());
        assert!(config.default_format.is_none());
    }

    #[test]
    fn test_local_config_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.yaml");
        std::fs::write(&global, "default_format: json\n").unwrap();
        std::fs::write(
            tmp.path().join(LOCAL_CONFIG_FILE),
            "default_format: csv\nstrict:\n  reject_negative_price: true\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&global), tmp.path());
        if std::env::var("MECHWORKS_FORMAT").is_err() {
            assert_eq!(config.default_format.as_deref(), Some("csv"));
        }
        if std::env::var("MECHWORKS_STRICT").is_err() {
            assert!(config.strict.policy().reject_negative_price);
        }
    }

    #[test]
    fn test_layers_combine_strict_switches() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.yaml");
        std::fs::write(&global, "strict:\n  reject_negative_price: true\n").unwrap();
        std::fs::write(
            tmp.path().join(LOCAL_CONFIG_FILE),
            "strict:\n  reject_duplicate_partno: true\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&global), tmp.path());
        if std::env::var("MECHWORKS_STRICT").is_err() {
            let policy = config.strict.policy();
            assert!(policy.reject_negative_price);
            assert!(policy.reject_duplicate_partno);
            assert!(!policy.reject_empty_name);
        }
    }

    #[test]
    fn test_local_config_disables_global_switch() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.yaml");
        std::fs::write(
            &global,
            "strict:\n  reject_duplicate_partno: true\n  reject_empty_name: true\n",
        )
        .unwrap();
        std::fs::write(
            tmp.path().join(LOCAL_CONFIG_FILE),
            "strict:\n  reject_duplicate_partno: false\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&global), tmp.path());
        if std::env::var("MECHWORKS_STRICT").is_err() {
            let policy = config.strict.policy();
            assert!(!policy.reject_duplicate_partno);
            assert!(policy.reject_empty_name);
        }
    }

    #[test]
    fn test_switches_merge_per_field() {
        let mut base = StrictSwitches::all(true);
        base.merge(StrictSwitches {
            reject_negative_price: Some(false),
            ..StrictSwitches::default()
        });
        assert_eq!(
            base.policy(),
            ValidationPolicy {
                reject_duplicate_partno: true,
                reject_negative_price: false,
                reject_empty_name: true,
            }
        );

        base.merge(StrictSwitches::all(false));
        assert_eq!(base.policy(), ValidationPolicy::default());
    }

    #[test]
    fn test_malformed_config_is_ignored() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(LOCAL_CONFIG_FILE), "strict: [not, a, map\n").unwrap();

        let config = Config::load_from(None, tmp.path());
        if std::env::var("MECHWORKS_STRICT").is_err() {
            assert_eq!(config.strict, StrictSwitches::default());
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" yes "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}

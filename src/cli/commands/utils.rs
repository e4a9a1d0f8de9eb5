//! Shared utilities for CLI commands

use miette::Result;

use crate::cli::commands::demo::demo_robot;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::{Config, ValidationPolicy};
use crate::core::manifest::load_robot;
use crate::entities::robot::Robot;

/// Everything a command needs: the loaded robot and resolved settings
pub struct Session {
    pub robot: Robot,
    pub format: OutputFormat,
}

impl Session {
    /// Load config, then the robot from `--manifest` or the sample robot
    pub fn open(global: &GlobalOpts) -> Result<Self> {
        let config = Config::load();
        let policy = effective_policy(&config, global.strict);
        let format = global.format.resolve(config.default_format.as_deref());

        let robot = match &global.manifest {
            Some(path) => load_robot(path, &policy)?,
            None => demo_robot(),
        };

        Ok(Self { robot, format })
    }
}

/// `--strict` turns every check on; otherwise the configured policy applies
pub fn effective_policy(config: &Config, strict_flag: bool) -> ValidationPolicy {
    if strict_flag {
        ValidationPolicy::strict()
    } else {
        config.strict.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_policy() {
        let config = Config::default();
        assert_eq!(effective_policy(&config, false), ValidationPolicy::default());
        assert_eq!(effective_policy(&config, true), ValidationPolicy::strict());
    }

    #[test]
    fn test_effective_policy_uses_configured_switches() {
        let mut config = Config::default();
        config.strict.reject_negative_price = Some(true);
        let policy = effective_policy(&config, false);
        assert!(policy.reject_negative_price);
        assert!(!policy.reject_duplicate_partno);
    }
}

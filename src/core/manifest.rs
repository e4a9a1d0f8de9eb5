//! Robot manifest - a read-only YAML description of a robot and its parts
//!
//! ```yaml
//! machine_name: MTX
//! cpu: M1X
//! model: F-16
//! speed: 10000
//! parts:
//!   - partno: 111
//!     price: 100
//!   - partno: 555
//!     price: 300
//!     type: TypeA   # a type tag makes the part movable
//! ```

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::ValidationPolicy;
use crate::core::error::InventoryError;
use crate::entities::machine::PartAggregate;
use crate::entities::part::{MovablePart, Part, PartEntry, PartNo};
use crate::entities::robot::Robot;
use crate::yaml::{parse_yaml_str, YamlSyntaxError};

/// Errors raised while reading a manifest
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("cannot read manifest {path}")]
    #[diagnostic(code(mechworks::manifest::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] InventoryError),
}

/// One part line of a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartSpec {
    pub partno: PartNo,

    pub price: f64,

    /// Type tag; present only for movable parts
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub part_type: Option<String>,
}

impl From<&PartSpec> for PartEntry {
    fn from(spec: &PartSpec) -> Self {
        match &spec.part_type {
            Some(part_type) => MovablePart::new(spec.partno, spec.price, part_type.as_str()).into(),
            None => Part::new(spec.partno, spec.price).into(),
        }
    }
}

impl From<&PartEntry> for PartSpec {
    fn from(entry: &PartEntry) -> Self {
        Self {
            partno: entry.partno(),
            price: entry.price(),
            part_type: entry.part_type().map(str::to_string),
        }
    }
}

/// Manifest document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotManifest {
    pub machine_name: String,
    pub cpu: String,
    pub model: String,
    pub speed: i64,

    #[serde(default)]
    pub parts: Vec<PartSpec>,
}

impl RobotManifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let source = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&source, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), parts = manifest.parts.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Parse manifest text; `filename` labels diagnostics
    pub fn parse(source: &str, filename: &str) -> Result<Self, ManifestError> {
        Ok(parse_yaml_str::<Self>(source, filename)?)
    }

    /// Describe an existing robot
    pub fn from_robot(robot: &Robot) -> Self {
        Self {
            machine_name: robot.machine_name().to_string(),
            cpu: robot.cpu().to_string(),
            model: robot.model().to_string(),
            speed: robot.speed(),
            parts: robot.iter().map(PartSpec::from).collect(),
        }
    }

    /// Build the robot, adding parts in manifest order under `policy`
    pub fn build(&self, policy: &ValidationPolicy) -> Result<Robot, InventoryError> {
        if policy.reject_empty_name {
            for (what, value) in [
                ("machine", &self.machine_name),
                ("cpu", &self.cpu),
                ("model", &self.model),
            ] {
                if value.is_empty() {
                    return Err(InventoryError::EmptyName(what));
                }
            }
        }

        let mut robot = Robot::new(
            self.machine_name.as_str(),
            self.cpu.as_str(),
            self.model.as_str(),
            self.speed,
        );
        for spec in &self.parts {
            robot.try_add_part(PartEntry::from(spec), policy)?;
        }
        Ok(robot)
    }
}

/// Load a manifest file and build its robot
pub fn load_robot(path: &Path, policy: &ValidationPolicy) -> Result<Robot, ManifestError> {
    Ok(RobotManifest::load(path)?.build(policy)?)
}

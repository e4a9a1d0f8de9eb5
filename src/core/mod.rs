//! Core module - capability contracts, output sink, errors and configuration

pub mod capability;
pub mod config;
pub mod error;
pub mod manifest;
pub mod sink;

pub use capability::{Capabilities, Capability, Displayable, Flyable, Movable};
pub use config::{Config, StrictSwitches, ValidationPolicy};
pub use error::InventoryError;
pub use manifest::{ManifestError, PartSpec, RobotManifest};
pub use sink::{BufferSink, ConsoleSink, Sink};

//! Entity type definitions
//!
//! **Parts:**
//! - [`Part`] - A numbered, priced leaf part
//! - [`MovablePart`] - A part with a type tag that can move
//! - [`PartEntry`] - Either kind, as stored in a part collection
//!
//! **Machines:**
//! - [`Machine`] - A named, ordered part collection
//! - [`JetFighter`] - A model and speed with flight capability
//! - [`Robot`] - A machine and a jet fighter at once, with part queries

pub mod jet_fighter;
pub mod machine;
pub mod part;
pub mod robot;

pub use jet_fighter::JetFighter;
pub use machine::{Machine, PartAggregate};
pub use part::{MovablePart, Part, PartEntry, PartNo};
pub use robot::Robot;

//! Robot entity - a machine that is also a jet fighter
//!
//! A robot holds one [`Machine`] block and one [`JetFighter`] block as plain
//! fields. It satisfies the aggregate, display and flight contracts itself,
//! reading from both blocks where an operation needs both halves.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::capability::{Capabilities, Capability, Displayable, Flyable};
use crate::core::sink::Sink;
use crate::entities::jet_fighter::JetFighter;
use crate::entities::machine::{Machine, PartAggregate};
use crate::entities::part::{MovablePart, PartEntry};

/// Composite entity: parts aggregate + flight role + cpu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    cpu: String,

    #[serde(flatten)]
    machine: Machine,

    #[serde(flatten)]
    flight: JetFighter,
}

impl Robot {
    pub fn new(
        machine_name: impl Into<String>,
        cpu: impl Into<String>,
        model: impl Into<String>,
        speed: i64,
    ) -> Self {
        Self {
            cpu: cpu.into(),
            machine: Machine::new(machine_name),
            flight: JetFighter::new(model, speed),
        }
    }

    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    pub fn set_cpu(&mut self, cpu: impl Into<String>) {
        self.cpu = cpu.into();
    }

    /// The flight-role block
    pub fn flight(&self) -> &JetFighter {
        &self.flight
    }

    pub fn flight_mut(&mut self) -> &mut JetFighter {
        &mut self.flight
    }

    pub fn model(&self) -> &str {
        self.flight.model()
    }

    pub fn speed(&self) -> i64 {
        self.flight.speed()
    }

    /// Parts priced at or above `threshold`, in collection order
    pub fn get_expensive_parts(&self, threshold: f64) -> Vec<&PartEntry> {
        self.parts()
            .iter()
            .filter(|part| part.price() >= threshold)
            .collect()
    }

    /// Movable parts grouped by type tag.
    ///
    /// Plain parts never appear. Keys follow first-encounter order.
    pub fn get_movable_parts_by_type(&self) -> IndexMap<&str, Vec<&MovablePart>> {
        let mut by_type: IndexMap<&str, Vec<&MovablePart>> = IndexMap::new();
        for part in self.parts().iter().filter_map(PartEntry::as_movable_part) {
            by_type.entry(part.part_type()).or_default().push(part);
        }
        by_type
    }

    /// Entries with the Movable capability, in collection order
    pub fn get_movable_parts(&self) -> Vec<&PartEntry> {
        self.parts()
            .iter()
            .filter(|part| part.supports(Capability::Movable))
            .collect()
    }
}

impl PartAggregate for Robot {
    fn machine(&self) -> &Machine {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut Machine {
        &mut self.machine
    }

    fn do_work(&self, sink: &mut dyn Sink) {
        sink.emit(&format!(
            "The robot {} is assembling a big truck.",
            self.machine_name()
        ));
    }
}

impl Displayable for Robot {
    fn display(&self, sink: &mut dyn Sink) {
        sink.emit(&format!("cpu= {}", self.cpu));
        sink.emit(&format!("Machine Name: {}", self.machine_name()));
        self.display_parts(sink);
        sink.emit(&format!("model = {}", self.model()));
        sink.emit(&format!("speed = {}", self.speed()));
    }
}

impl Flyable for Robot {
    fn fly(&self, sink: &mut dyn Sink) {
        sink.emit(&format!(
            "The JetFighter {} is flying in the sky!",
            self.model()
        ));
        sink.emit(&format!(
            "The JetFighter {} is flying over the ocean!",
            self.machine_name()
        ));
    }
}

impl Capabilities for Robot {
    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Displayable | Capability::Flyable)
    }
}

impl<'a> IntoIterator for &'a Robot {
    type Item = &'a PartEntry;
    type IntoIter = std::slice::Iter<'a, PartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts().iter()
    }
}

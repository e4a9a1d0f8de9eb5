//! Machine entity - a named, ordered collection of parts

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::capability::{Capabilities, Capability, Displayable};
use crate::core::config::ValidationPolicy;
use crate::core::error::InventoryError;
use crate::core::sink::Sink;
use crate::entities::part::{PartEntry, PartNo};

/// Aggregate-of-parts behavior shared by everything that owns a [`Machine`]
///
/// Implementors only provide access to their machine block; collection
/// operations are provided on top of it. `do_work` is the extension point.
pub trait PartAggregate {
    fn machine(&self) -> &Machine;

    fn machine_mut(&mut self) -> &mut Machine;

    /// Work performed by this aggregate. Plain machines do nothing.
    fn do_work(&self, _sink: &mut dyn Sink) {}

    fn machine_name(&self) -> &str {
        &self.machine().machine_name
    }

    /// Current parts, in insertion order
    fn parts(&self) -> &[PartEntry] {
        &self.machine().parts
    }

    /// Iterate over the current parts, in insertion order
    fn iter(&self) -> std::slice::Iter<'_, PartEntry> {
        self.parts().iter()
    }

    /// Append a part. Repeated part numbers stay as distinct entries.
    fn add_part(&mut self, part: impl Into<PartEntry>)
    where
        Self: Sized,
    {
        let machine = self.machine_mut();
        let part = part.into();
        tracing::debug!(machine = %machine.machine_name, partno = part.partno(), kind = part.kind(), "adding part");
        machine.parts.push(part);
    }

    /// Append a part after checking it against `policy`
    fn try_add_part(
        &mut self,
        part: impl Into<PartEntry>,
        policy: &ValidationPolicy,
    ) -> Result<(), InventoryError>
    where
        Self: Sized,
    {
        let part = part.into();
        if let Err(e) = self.machine().check_part(&part, policy) {
            tracing::warn!(partno = part.partno(), error = %e, "rejected part");
            return Err(e);
        }
        self.add_part(part);
        Ok(())
    }

    /// Remove every entry with `partno`, keeping the survivors' order.
    ///
    /// Returns how many entries were removed; unknown numbers remove nothing.
    fn remove_part(&mut self, partno: PartNo) -> usize {
        let machine = self.machine_mut();
        let before = machine.parts.len();
        machine.parts.retain(|part| part.partno() != partno);
        let removed = before - machine.parts.len();
        tracing::debug!(machine = %machine.machine_name, partno, removed, "removed part");
        removed
    }

    /// Part numbers occurring more than once, with their counts.
    ///
    /// Keys follow first-encounter order. Computed on every call.
    fn find_duplicated_parts(&self) -> IndexMap<PartNo, usize> {
        let mut counts: IndexMap<PartNo, usize> = IndexMap::new();
        for part in self.parts() {
            *counts.entry(part.partno()).or_insert(0) += 1;
        }
        counts.retain(|_, count| *count > 1);
        tracing::debug!(machine = %self.machine_name(), duplicates = counts.len(), "computed duplicate parts");
        counts
    }

    /// Emit the parts listing used by composite displays
    fn display_parts(&self, sink: &mut dyn Sink) {
        sink.emit("The machine has these parts:");
        for part in self.parts() {
            part.display(sink);
        }
    }
}

/// Machine state block - a name and an ordered part sequence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Machine {
    machine_name: String,

    #[serde(default)]
    parts: Vec<PartEntry>,
}

impl Machine {
    pub fn new(machine_name: impl Into<String>) -> Self {
        Self {
            machine_name: machine_name.into(),
            parts: Vec::new(),
        }
    }

    pub fn set_machine_name(&mut self, machine_name: impl Into<String>) {
        self.machine_name = machine_name.into();
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Check `part` against `policy` without inserting it
    pub fn check_part(
        &self,
        part: &PartEntry,
        policy: &ValidationPolicy,
    ) -> Result<(), InventoryError> {
        if policy.reject_negative_price && part.price() < 0.0 {
            return Err(InventoryError::NegativePrice {
                partno: part.partno(),
                price: part.price(),
            });
        }
        if policy.reject_empty_name && part.part_type().is_some_and(str::is_empty) {
            return Err(InventoryError::EmptyName("part type"));
        }
        if policy.reject_duplicate_partno && self.parts.iter().any(|p| p == part) {
            return Err(InventoryError::DuplicatePartNo {
                partno: part.partno(),
                machine: self.machine_name.clone(),
            });
        }
        Ok(())
    }
}

impl PartAggregate for Machine {
    fn machine(&self) -> &Machine {
        self
    }

    fn machine_mut(&mut self) -> &mut Machine {
        self
    }
}

impl Displayable for Machine {
    fn display(&self, sink: &mut dyn Sink) {
        sink.emit(&format!("Machine Name: {}", self.machine_name));
        sink.emit("Parts:");
        for part in &self.parts {
            part.display(sink);
        }
    }
}

impl Capabilities for Machine {
    fn supports(&self, capability: Capability) -> bool {
        capability == Capability::Displayable
    }
}

impl<'a> IntoIterator for &'a Machine {
    type Item = &'a PartEntry;
    type IntoIter = std::slice::Iter<'a, PartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

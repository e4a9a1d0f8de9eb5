//! Part entities - plain parts, movable parts, and the tagged union stored
//! in part collections

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::hash::{Hash, Hasher};

use crate::core::capability::{Capabilities, Capability, Displayable, Movable};
use crate::core::sink::Sink;

/// Part number. Not unique: repeated numbers are a detectable condition.
pub type PartNo = i64;

/// A leaf part with a number and a price
///
/// Two parts are equal iff their part numbers match; the price is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    partno: PartNo,
    price: f64,
}

impl Part {
    pub fn new(partno: PartNo, price: f64) -> Self {
        Self { partno, price }
    }

    pub fn partno(&self) -> PartNo {
        self.partno
    }

    pub fn set_partno(&mut self, partno: PartNo) {
        self.partno = partno;
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Compare against a value of any type.
    ///
    /// Returns `false` for anything that is not a part kind.
    pub fn same_part(&self, other: &dyn Any) -> bool {
        if let Some(part) = other.downcast_ref::<Part>() {
            self == part
        } else if let Some(part) = other.downcast_ref::<MovablePart>() {
            self.partno == part.partno()
        } else if let Some(entry) = other.downcast_ref::<PartEntry>() {
            self.partno == entry.partno()
        } else {
            false
        }
    }
}

impl PartialEq for Part {
    fn eq(&self, other: &Self) -> bool {
        self.partno == other.partno
    }
}

impl Eq for Part {}

impl Hash for Part {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.partno.hash(state);
    }
}

impl Displayable for Part {
    fn display(&self, sink: &mut dyn Sink) {
        sink.emit(&format!("partno = {}", self.partno));
        sink.emit(&format!("price = {}", self.price));
    }
}

impl Capabilities for Part {
    fn supports(&self, capability: Capability) -> bool {
        capability == Capability::Displayable
    }
}

/// A part that can move, tagged with a type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovablePart {
    #[serde(flatten)]
    part: Part,

    #[serde(rename = "type")]
    part_type: String,
}

impl MovablePart {
    pub fn new(partno: PartNo, price: f64, part_type: impl Into<String>) -> Self {
        Self {
            part: Part::new(partno, price),
            part_type: part_type.into(),
        }
    }

    /// The plain part data
    pub fn part(&self) -> &Part {
        &self.part
    }

    pub fn partno(&self) -> PartNo {
        self.part.partno()
    }

    pub fn price(&self) -> f64 {
        self.part.price()
    }

    pub fn part_type(&self) -> &str {
        &self.part_type
    }

    pub fn set_part_type(&mut self, part_type: impl Into<String>) {
        self.part_type = part_type.into();
    }
}

impl PartialEq for MovablePart {
    fn eq(&self, other: &Self) -> bool {
        self.part == other.part
    }
}

impl Eq for MovablePart {}

impl Hash for MovablePart {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.part.hash(state);
    }
}

impl PartialEq<Part> for MovablePart {
    fn eq(&self, other: &Part) -> bool {
        self.part == *other
    }
}

impl PartialEq<MovablePart> for Part {
    fn eq(&self, other: &MovablePart) -> bool {
        *self == other.part
    }
}

impl Displayable for MovablePart {
    fn display(&self, sink: &mut dyn Sink) {
        self.part.display(sink);
        sink.emit(&format!("type = {}", self.part_type));
        sink.emit("");
    }
}

impl Movable for MovablePart {
    fn move_part(&self, sink: &mut dyn Sink) {
        sink.emit(&format!("partno: {} is moving fast!", self.partno()));
    }
}

impl Capabilities for MovablePart {
    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Displayable | Capability::Movable)
    }
}

/// One entry of a part collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PartEntry {
    Plain(Part),
    Movable(MovablePart),
}

impl PartEntry {
    pub fn partno(&self) -> PartNo {
        self.part().partno()
    }

    pub fn price(&self) -> f64 {
        self.part().price()
    }

    /// The plain part data, whatever the kind
    pub fn part(&self) -> &Part {
        match self {
            PartEntry::Plain(part) => part,
            PartEntry::Movable(movable) => movable.part(),
        }
    }

    /// The type tag, for movable parts only
    pub fn part_type(&self) -> Option<&str> {
        self.as_movable_part().map(MovablePart::part_type)
    }

    /// The entry as a movable part, if it is one
    pub fn as_movable_part(&self) -> Option<&MovablePart> {
        match self {
            PartEntry::Movable(movable) => Some(movable),
            PartEntry::Plain(_) => None,
        }
    }

    /// The entry's Movable capability, if it has one
    pub fn as_movable(&self) -> Option<&dyn Movable> {
        self.as_movable_part().map(|movable| movable as &dyn Movable)
    }

    /// Short name of the entry's kind
    pub fn kind(&self) -> &'static str {
        match self {
            PartEntry::Plain(_) => "plain",
            PartEntry::Movable(_) => "movable",
        }
    }
}

impl PartialEq for PartEntry {
    fn eq(&self, other: &Self) -> bool {
        self.partno() == other.partno()
    }
}

impl Eq for PartEntry {}

impl Hash for PartEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.partno().hash(state);
    }
}

impl PartialEq<Part> for PartEntry {
    fn eq(&self, other: &Part) -> bool {
        self.part() == other
    }
}

impl Displayable for PartEntry {
    fn display(&self, sink: &mut dyn Sink) {
        match self {
            PartEntry::Plain(part) => part.display(sink),
            PartEntry::Movable(movable) => movable.display(sink),
        }
    }
}

impl Capabilities for PartEntry {
    fn supports(&self, capability: Capability) -> bool {
        match self {
            PartEntry::Plain(part) => part.supports(capability),
            PartEntry::Movable(movable) => movable.supports(capability),
        }
    }
}

impl From<Part> for PartEntry {
    fn from(part: Part) -> Self {
        PartEntry::Plain(part)
    }
}

impl From<MovablePart> for PartEntry {
    fn from(part: MovablePart) -> Self {
        PartEntry::Movable(part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::BufferSink;

    #[test]
    fn test_part_equality_ignores_price() {
        assert_eq!(Part::new(111, 100.0), Part::new(111, 999.0));
        assert_ne!(Part::new(111, 100.0), Part::new(222, 100.0));
    }

    #[test]
    fn test_part_equality_across_kinds() {
        let plain = Part::new(555, 10.0);
        let movable = MovablePart::new(555, 300.0, "TypeA");

        assert!(plain == movable);
        assert!(movable == plain);
        assert_eq!(PartEntry::from(plain.clone()), PartEntry::from(movable));
    }

    #[test]
    fn test_same_part_with_unrelated_value() {
        let part = Part::new(111, 100.0);

        assert!(part.same_part(&Part::new(111, 5.0)));
        assert!(part.same_part(&MovablePart::new(111, 5.0, "TypeB")));
        assert!(part.same_part(&PartEntry::from(Part::new(111, 1.0))));
        assert!(!part.same_part(&Part::new(112, 100.0)));
        assert!(!part.same_part(&111_i64));
        assert!(!part.same_part(&"111"));
    }

    #[test]
    fn test_setters_accept_anything() {
        let mut part = Part::new(1, 1.0);
        part.set_partno(-4);
        part.set_price(-20.5);

        assert_eq!(part.partno(), -4);
        assert_eq!(part.price(), -20.5);
    }

    #[test]
    fn test_part_display() {
        let mut sink = BufferSink::new();
        Part::new(111, 100.0).display(&mut sink);
        assert_eq!(sink.lines(), ["partno = 111", "price = 100"]);
    }

    #[test]
    fn test_movable_part_display_appends_type() {
        let mut sink = BufferSink::new();
        MovablePart::new(555, 300.5, "TypeA").display(&mut sink);
        assert_eq!(
            sink.lines(),
            ["partno = 555", "price = 300.5", "type = TypeA", ""]
        );
    }

    #[test]
    fn test_movable_part_move() {
        let mut sink = BufferSink::new();
        MovablePart::new(777, 300.0, "TypeB").move_part(&mut sink);
        assert_eq!(sink.lines(), ["partno: 777 is moving fast!"]);
    }

    #[test]
    fn test_entry_capabilities() {
        let plain = PartEntry::from(Part::new(1, 1.0));
        let movable = PartEntry::from(MovablePart::new(2, 1.0, "TypeA"));

        assert_eq!(plain.capabilities(), vec![Capability::Displayable]);
        assert_eq!(
            movable.capabilities(),
            vec![Capability::Displayable, Capability::Movable]
        );
        assert!(plain.as_movable().is_none());
        assert!(movable.as_movable().is_some());
        assert_eq!(movable.part_type(), Some("TypeA"));
        assert_eq!(plain.part_type(), None);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = PartEntry::from(MovablePart::new(655, 300.0, "TypeA"));
        let yaml = serde_yml::to_string(&entry).unwrap();

        assert!(yaml.contains("kind: movable"));
        assert!(yaml.contains("partno: 655"));
        assert!(yaml.contains("type: TypeA"));
    }
}

//! JetFighter entity - a model name and a speed, with flight capability

use serde::{Deserialize, Serialize};

use crate::core::capability::{Capabilities, Capability, Displayable, Flyable};
use crate::core::sink::Sink;

/// Flight-role state block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JetFighter {
    model: String,
    speed: i64,
}

impl JetFighter {
    pub fn new(model: impl Into<String>, speed: i64) -> Self {
        Self {
            model: model.into(),
            speed,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn speed(&self) -> i64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: i64) {
        self.speed = speed;
    }
}

impl Flyable for JetFighter {
    // Placeholder; composite entities supply the actual flight
    fn fly(&self, _sink: &mut dyn Sink) {}
}

impl Displayable for JetFighter {
    fn display(&self, sink: &mut dyn Sink) {
        sink.emit(&format!("model = {}", self.model));
        sink.emit(&format!("speed = {}", self.speed));
    }
}

impl Capabilities for JetFighter {
    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Displayable | Capability::Flyable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::BufferSink;

    #[test]
    fn test_jet_fighter_accessors() {
        let mut jet = JetFighter::new("F-16", 10000);
        assert_eq!(jet.model(), "F-16");
        assert_eq!(jet.speed(), 10000);

        jet.set_model("F-22");
        jet.set_speed(-1);
        assert_eq!(jet.model(), "F-22");
        assert_eq!(jet.speed(), -1);
    }

    #[test]
    fn test_jet_fighter_display() {
        let mut sink = BufferSink::new();
        JetFighter::new("F-16", 10000).display(&mut sink);
        assert_eq!(sink.lines(), ["model = F-16", "speed = 10000"]);
    }

    #[test]
    fn test_plain_fly_emits_nothing() {
        let mut sink = BufferSink::new();
        JetFighter::new("F-16", 10000).fly(&mut sink);
        assert!(sink.lines().is_empty());
    }
}

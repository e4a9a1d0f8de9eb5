//! Capability contracts - behavioral roles an entity may satisfy
//!
//! Each contract carries exactly one operation and no shared state. An
//! entity declares conformance by implementing the trait; collections that
//! hold mixed kinds answer [`Capability`] queries instead of inspecting
//! concrete types.

use serde::{Deserialize, Serialize};

use crate::core::sink::Sink;

/// Can emit a human-readable representation of itself
pub trait Displayable {
    fn display(&self, sink: &mut dyn Sink);
}

/// Can move (emits a motion notice referencing the entity's identifier)
pub trait Movable {
    fn move_part(&self, sink: &mut dyn Sink);
}

/// Can fly (emits a flight notice)
pub trait Flyable {
    fn fly(&self, sink: &mut dyn Sink);
}

/// Named capability, used for runtime capability queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Displayable,
    Movable,
    Flyable,
}

impl Capability {
    /// All capabilities, in declaration order
    pub const ALL: [Capability; 3] = [
        Capability::Displayable,
        Capability::Movable,
        Capability::Flyable,
    ];
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Displayable => write!(f, "displayable"),
            Capability::Movable => write!(f, "movable"),
            Capability::Flyable => write!(f, "flyable"),
        }
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "displayable" => Ok(Capability::Displayable),
            "movable" => Ok(Capability::Movable),
            "flyable" => Ok(Capability::Flyable),
            _ => Err(format!(
                "Unknown capability: {}. Use displayable, movable, or flyable",
                s
            )),
        }
    }
}

/// Answers which capabilities a value satisfies
pub trait Capabilities {
    fn supports(&self, capability: Capability) -> bool;

    /// The satisfied capabilities, in [`Capability::ALL`] order
    fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|cap| self.supports(*cap))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Glider;

    impl Capabilities for Glider {
        fn supports(&self, capability: Capability) -> bool {
            capability == Capability::Flyable
        }
    }

    #[test]
    fn test_capability_from_str() {
        assert_eq!("movable".parse::<Capability>(), Ok(Capability::Movable));
        assert_eq!("FLYABLE".parse::<Capability>(), Ok(Capability::Flyable));
        assert!("swimmable".parse::<Capability>().is_err());
    }

    #[test]
    fn test_capability_display_roundtrip() {
        for cap in Capability::ALL {
            assert_eq!(cap.to_string().parse::<Capability>(), Ok(cap));
        }
    }

    #[test]
    fn test_capabilities_lists_only_supported() {
        assert_eq!(Glider.capabilities(), vec![Capability::Flyable]);
    }
}

use serde::{Deserialize, Serialize};

/// Placeholder used for every field of a homeworld that could not be referenced
pub const UNKNOWN: &str = "Unknown";

/// Resolved home planet of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homeworld {
    pub name: String,
    #[serde(default)]
    pub terrain: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub population: String,
}

impl Homeworld {
    pub fn new(
        name: impl Into<String>,
        terrain: impl Into<String>,
        climate: impl Into<String>,
        population: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            terrain: terrain.into(),
            climate: climate.into(),
            population: population.into(),
        }
    }

    /// Sentinel for characters without a homeworld reference
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN, UNKNOWN, UNKNOWN)
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

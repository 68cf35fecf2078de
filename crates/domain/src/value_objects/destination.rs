//! Fixed destinations that every query is measured against

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A named destination address with known coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Human-readable name, shown in the report
    pub name: String,
    /// Location of the destination
    pub coordinate: Coordinate,
}

impl Destination {
    /// Create a new destination
    #[must_use]
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    /// The three office addresses used when no destinations are configured
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Vianen – Hagenweg 3c",
                Coordinate::new_unchecked(51.9919, 5.0912),
            ),
            Self::new(
                "Amersfoort – De Stuwdam 5",
                Coordinate::new_unchecked(52.1561, 5.3878),
            ),
            Self::new(
                "Woerden – Botnische Golf 24",
                Coordinate::new_unchecked(52.0867, 4.8833),
            ),
        ]
    }
}

//! Per-request user input: a place description or literal coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::errors::DomainError;

/// Country suffix appended to free-text queries built from form fields
const COUNTRY_SUFFIX: &str = "Netherlands";

/// What the user asked about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryInput {
    /// Free-text address or postcode to be geocoded
    Text(String),
    /// Coordinates supplied directly, no geocoding needed
    Coordinate(Coordinate),
}

impl QueryInput {
    /// Build a free-text query from a place name and an optional postcode
    ///
    /// Produces `"{postcode}, {place}, Netherlands"`, skipping blank parts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` when both place and postcode are blank.
    pub fn from_place(place: &str, postcode: Option<&str>) -> Result<Self, DomainError> {
        let place = place.trim();
        let postcode = postcode.map_or("", str::trim);

        if place.is_empty() && postcode.is_empty() {
            return Err(DomainError::InvalidQuery(
                "enter at least a place name (postcode is optional)".to_string(),
            ));
        }

        let query = [postcode, place, COUNTRY_SUFFIX]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Self::Text(query))
    }

    /// Parse literal `"lat,lon"` coordinates
    ///
    /// # Errors
    ///
    /// Returns a domain error when the text is malformed or out of range.
    pub fn parse_coordinates(text: &str) -> Result<Self, DomainError> {
        text.parse().map(Self::Coordinate)
    }
}

impl fmt::Display for QueryInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Coordinate(coord) => write!(f, "({coord})"),
        }
    }
}

//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod destination;
mod query_input;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, great_circle_km};
pub use destination::Destination;
pub use query_input::QueryInput;

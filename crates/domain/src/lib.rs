//! Domain layer for Afstand
//!
//! Contains the coordinate and destination value objects, the per-leg result
//! entity and the great-circle distance. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

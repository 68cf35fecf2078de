//! Application layer - Use cases and orchestration
//!
//! Contains the distance report use case, the per-session cache, report
//! formatting and the port definitions that adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

//! Logging initialisation
//!
//! Installs a `tracing-subscriber` registry that writes to stderr, so the
//! report on stdout stays clean.

mod logging;

pub use logging::{TelemetryError, init_logging, resolve_filter};

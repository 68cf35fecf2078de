//! Entities produced per query

mod leg_result;

pub use leg_result::{LegResult, LegSource};

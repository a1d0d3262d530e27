//! CSV-backed bracket schedules.
//!
//! Lets the federal, state, medicare and social security tables be replaced
//! without touching the calculator.

mod loader;

pub use loader::{BracketRecord, ScheduleLoader, ScheduleLoaderError};

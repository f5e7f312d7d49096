//! Query engine.
//!
//! Validates a raw query, filters the timetable to the requested route,
//! orders the matches by the requested criterion, and truncates the
//! result.

mod engine;
mod query;

pub use engine::{MAX_RESULTS, find_trains};
pub use query::{QueryError, TrainQuery, ValidQuery};

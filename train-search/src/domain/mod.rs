//! Domain types for the train search service.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod criterion;
mod error;
mod station;
mod time;
mod train;

pub use criterion::{InvalidCriterion, SortCriterion};
pub use error::DomainError;
pub use station::{InvalidStationId, StationId};
pub use time::{ScheduleTime, TimeParseError};
pub use train::{TrainId, TrainRecord};

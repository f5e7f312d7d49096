//! Train route search service.
//!
//! Answers a single query: given a departure station, an arrival station,
//! and a sort criterion, return the best-matching trains from a fixed
//! timetable, ordered by that criterion and capped to a small result
//! count.

pub mod domain;
pub mod search;
pub mod timetable;
pub mod web;

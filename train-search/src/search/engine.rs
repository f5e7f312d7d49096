//! Query execution: filter, order, truncate.

use crate::domain::{SortCriterion, TrainRecord};

use super::query::{QueryError, TrainQuery, ValidQuery};

/// Maximum number of records returned by a query.
pub const MAX_RESULTS: usize = 3;

/// Execute a query against the timetable.
///
/// Validates the raw query, filters the records to the exact requested
/// route, sorts the matches ascending by the requested criterion, and
/// returns at most [`MAX_RESULTS`] of them. Zero matches is a success
/// with an empty result, not an error.
///
/// The input slice is never mutated; sorting happens on a filtered copy.
pub fn find_trains(
    records: &[TrainRecord],
    query: &TrainQuery,
) -> Result<Vec<TrainRecord>, QueryError> {
    let valid = query.validate()?;
    Ok(execute(records, &valid))
}

/// Run a validated query.
fn execute(records: &[TrainRecord], query: &ValidQuery) -> Vec<TrainRecord> {
    // Filter before sorting: only the requested route is ever ordered.
    let mut matches: Vec<TrainRecord> = records
        .iter()
        .filter(|r| r.matches_route(query.departure, query.arrival))
        .cloned()
        .collect();

    // Vec::sort_by is stable, so ties keep their timetable order.
    match query.criterion {
        SortCriterion::Price => matches.sort_by(|a, b| a.price().total_cmp(&b.price())),
        SortCriterion::ArrivalTime => matches.sort_by_key(|r| r.arrival_time()),
        SortCriterion::DepartureTime => matches.sort_by_key(|r| r.departure_time()),
    }

    matches.truncate(MAX_RESULTS);
    matches
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::TrainRecord;

/// Shared application state.
///
/// The decoded timetable is immutable for the lifetime of the process, so
/// sharing it across handlers needs no synchronization beyond the `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The decoded timetable.
    pub records: Arc<Vec<TrainRecord>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(records: Vec<TrainRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

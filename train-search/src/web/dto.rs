//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::TrainRecord;

/// Query parameters for a search request.
///
/// All fields default to empty strings when absent, so that missing input
/// is reported by the engine's validation rather than by the HTTP layer.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Departure station id.
    #[serde(default)]
    pub departure: String,

    /// Arrival station id.
    #[serde(default)]
    pub arrival: String,

    /// Sort criterion.
    #[serde(default)]
    pub criterion: String,
}

/// A train record in JSON search results.
#[derive(Debug, Serialize)]
pub struct TrainRecordResponse {
    /// Train identifier.
    pub train_id: i64,

    /// Departure station id.
    pub departure_station_id: u32,

    /// Arrival station id.
    pub arrival_station_id: u32,

    /// Ticket price.
    pub price: f32,

    /// Departure time as "HH:MM:SS".
    pub departure_time: String,

    /// Arrival time as "HH:MM:SS".
    pub arrival_time: String,
}

impl TrainRecordResponse {
    /// Create from a domain TrainRecord.
    pub fn from_record(record: &TrainRecord) -> Self {
        Self {
            train_id: record.id().0,
            departure_station_id: record.departure_station().get(),
            arrival_station_id: record.arrival_station().get(),
            price: record.price(),
            departure_time: record.departure_time().to_string(),
            arrival_time: record.arrival_time().to_string(),
        }
    }
}

/// Response for a search request.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Matching trains, best first.
    pub trains: Vec<TrainRecordResponse>,
}

/// Response for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" once the server is up.
    pub status: &'static str,

    /// Number of loaded timetable records.
    pub records: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

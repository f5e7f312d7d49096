//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::TrainRecord;

/// Home page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Search results page.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub departure: String,
    pub arrival: String,
    pub criterion: String,
    pub records: Vec<RecordView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

/// Train record view model for templates.
#[derive(Debug, Clone)]
pub struct RecordView {
    pub train_id: String,
    pub departure_station: String,
    pub arrival_station: String,
    pub price: String,
    pub departure_time: String,
    pub arrival_time: String,
}

impl RecordView {
    /// Create from a domain TrainRecord.
    pub fn from_record(record: &TrainRecord) -> Self {
        Self {
            train_id: record.id().to_string(),
            departure_station: record.departure_station().to_string(),
            arrival_station: record.arrival_station().to_string(),
            price: format!("{:.2}", record.price()),
            departure_time: record.departure_time().to_string(),
            arrival_time: record.arrival_time().to_string(),
        }
    }
}

//! Conversion from dataset DTOs to domain records.
//!
//! Decoding is all-or-nothing: any single record failure fails the entire
//! batch, so a partially valid dataset is never returned.

use std::path::{Path, PathBuf};

use crate::domain::{DomainError, ScheduleTime, StationId, TrainId, TrainRecord};

use super::types::TrainRecordDto;

/// Error from loading or decoding the timetable dataset.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The raw input is not valid JSON, or a required field is absent or
    /// mistyped.
    #[error("malformed timetable data: {0}")]
    Json(#[from] serde_json::Error),

    /// A structurally valid object whose values violate a domain invariant.
    #[error("invalid record for train {train_id}: {source}")]
    Record {
        train_id: i64,
        #[source]
        source: DomainError,
    },

    /// The dataset file could not be read.
    #[error("failed to read timetable file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Decode a raw JSON dataset into domain records, preserving input order.
pub fn decode_records(raw: &str) -> Result<Vec<TrainRecord>, DecodeError> {
    let dtos: Vec<TrainRecordDto> = serde_json::from_str(raw)?;
    dtos.into_iter().map(convert_record).collect()
}

/// Read and decode the timetable dataset from a file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<TrainRecord>, DecodeError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_records(&raw)
}

/// Convert one DTO into a domain record, enforcing the invariants the
/// wire shape cannot: positive station ids, non-negative price, valid
/// HH:MM:SS times.
fn convert_record(dto: TrainRecordDto) -> Result<TrainRecord, DecodeError> {
    let train_id = dto.train_id;

    let build = || -> Result<TrainRecord, DomainError> {
        let departure_station = StationId::from_i64(dto.departure_station_id)?;
        let arrival_station = StationId::from_i64(dto.arrival_station_id)?;
        let departure_time = ScheduleTime::parse_hms(&dto.departure_time)?;
        let arrival_time = ScheduleTime::parse_hms(&dto.arrival_time)?;

        TrainRecord::new(
            TrainId(train_id),
            departure_station,
            arrival_station,
            dto.price,
            departure_time,
            arrival_time,
        )
    };

    build().map_err(|source| DecodeError::Record { train_id, source })
}

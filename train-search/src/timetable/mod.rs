//! Timetable decoding.
//!
//! Turns the raw JSON dataset into validated domain records in two
//! stages: serde deserialization into transport DTOs, then conversion
//! into domain types.

mod decode;
mod types;

pub use decode::{DecodeError, decode_records, load_records};
pub use types::TrainRecordDto;

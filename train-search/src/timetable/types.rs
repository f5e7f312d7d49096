//! Timetable dataset DTOs.
//!
//! These types map directly to the JSON dataset on disk. Field names
//! follow the wire format exactly, including its inconsistent casing
//! (`departureStationID` but `arrivalStationId`).

use serde::Deserialize;

/// One trip object as it appears in the dataset.
///
/// Times are carried as raw strings here; the conversion stage turns them
/// into domain types and enforces the domain invariants.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainRecordDto {
    /// Train identifier.
    #[serde(rename = "trainId")]
    pub train_id: i64,

    /// Departure station id.
    #[serde(rename = "departureStationID")]
    pub departure_station_id: i64,

    /// Arrival station id.
    #[serde(rename = "arrivalStationId")]
    pub arrival_station_id: i64,

    /// Ticket price.
    pub price: f32,

    /// Arrival time as "HH:MM:SS".
    #[serde(rename = "arrivalTime")]
    pub arrival_time: String,

    /// Departure time as "HH:MM:SS".
    #[serde(rename = "departureTime")]
    pub departure_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_record() {
        let json = r#"{
            "trainId": 1177,
            "departureStationID": 1929,
            "arrivalStationId": 1921,
            "price": 164.65,
            "arrivalTime": "05:23:00",
            "departureTime": "06:06:00"
        }"#;

        let dto: TrainRecordDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.train_id, 1177);
        assert_eq!(dto.departure_station_id, 1929);
        assert_eq!(dto.arrival_station_id, 1921);
        assert_eq!(dto.price, 164.65);
        assert_eq!(dto.arrival_time, "05:23:00");
        assert_eq!(dto.departure_time, "06:06:00");
    }

    #[test]
    fn deserialize_array_preserves_order() {
        let json = r#"[
            {"trainId": 1, "departureStationID": 1, "arrivalStationId": 2,
             "price": 10.0, "arrivalTime": "10:00:00", "departureTime": "08:00:00"},
            {"trainId": 2, "departureStationID": 1, "arrivalStationId": 2,
             "price": 5.0, "arrivalTime": "11:00:00", "departureTime": "09:00:00"}
        ]"#;

        let dtos: Vec<TrainRecordDto> = serde_json::from_str(json).unwrap();
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].train_id, 1);
        assert_eq!(dtos[1].train_id, 2);
    }

    #[test]
    fn missing_field_is_rejected() {
        // No departureTime
        let json = r#"{
            "trainId": 1,
            "departureStationID": 1,
            "arrivalStationId": 2,
            "price": 10.0,
            "arrivalTime": "10:00:00"
        }"#;

        assert!(serde_json::from_str::<TrainRecordDto>(json).is_err());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        // price as string
        let json = r#"{
            "trainId": 1,
            "departureStationID": 1,
            "arrivalStationId": 2,
            "price": "10.0",
            "arrivalTime": "10:00:00",
            "departureTime": "08:00:00"
        }"#;

        assert!(serde_json::from_str::<TrainRecordDto>(json).is_err());
    }
}

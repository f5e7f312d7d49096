//! Train record types.

use std::fmt;

use super::{DomainError, ScheduleTime, StationId};

/// Identifier of a train within the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(pub i64);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled trip in the timetable.
///
/// Records are immutable once decoded: they are built by the timetable
/// decoder and held read-only for the lifetime of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainRecord {
    id: TrainId,
    departure_station: StationId,
    arrival_station: StationId,
    price: f32,
    departure_time: ScheduleTime,
    arrival_time: ScheduleTime,
}

impl TrainRecord {
    /// Create a new train record.
    ///
    /// The price must be a finite, non-negative number; station ids and
    /// times carry their own invariants by construction.
    pub fn new(
        id: TrainId,
        departure_station: StationId,
        arrival_station: StationId,
        price: f32,
        departure_time: ScheduleTime,
        arrival_time: ScheduleTime,
    ) -> Result<Self, DomainError> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidPrice(price));
        }

        Ok(Self {
            id,
            departure_station,
            arrival_station,
            price,
            departure_time,
            arrival_time,
        })
    }

    /// Returns the train identifier.
    pub fn id(&self) -> TrainId {
        self.id
    }

    /// Returns the departure station.
    pub fn departure_station(&self) -> StationId {
        self.departure_station
    }

    /// Returns the arrival station.
    pub fn arrival_station(&self) -> StationId {
        self.arrival_station
    }

    /// Returns the ticket price.
    pub fn price(&self) -> f32 {
        self.price
    }

    /// Returns the departure time.
    pub fn departure_time(&self) -> ScheduleTime {
        self.departure_time
    }

    /// Returns the arrival time.
    pub fn arrival_time(&self) -> ScheduleTime {
        self.arrival_time
    }

    /// Whether this trip runs exactly the given route.
    pub fn matches_route(&self, departure: StationId, arrival: StationId) -> bool {
        self.departure_station == departure && self.arrival_station == arrival
    }
}

//! Query validation.

use crate::domain::{SortCriterion, StationId};

/// Error from query validation.
///
/// All variants are terminal for the query: they are returned to the
/// caller with no local recovery or retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Departure station input is missing
    #[error("empty departure station")]
    EmptyDeparture,

    /// Arrival station input is missing
    #[error("empty arrival station")]
    EmptyArrival,

    /// Departure station input is non-numeric or out of range
    #[error("bad departure station input")]
    InvalidDepartureInput { input: String },

    /// Arrival station input is non-numeric or out of range
    #[error("bad arrival station input")]
    InvalidArrivalInput { input: String },

    /// Criterion is not one of the recognized values
    #[error("unsupported criteria")]
    UnsupportedCriteria { input: String },
}

/// A raw search query as gathered by a front end.
///
/// All three fields arrive as strings; `validate` turns them into typed
/// values or reports the first failing check.
#[derive(Debug, Clone)]
pub struct TrainQuery {
    departure: String,
    arrival: String,
    criterion: String,
}

impl TrainQuery {
    /// Create a new query from raw inputs.
    pub fn new(
        departure: impl Into<String>,
        arrival: impl Into<String>,
        criterion: impl Into<String>,
    ) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
            criterion: criterion.into(),
        }
    }

    /// Validate the query.
    ///
    /// Checks run in a fixed order and the first failure wins: empty
    /// departure, empty arrival, non-numeric departure, non-numeric
    /// arrival, arrival below 1, departure below 1, unrecognized
    /// criterion.
    pub fn validate(&self) -> Result<ValidQuery, QueryError> {
        if self.departure.is_empty() {
            return Err(QueryError::EmptyDeparture);
        }

        if self.arrival.is_empty() {
            return Err(QueryError::EmptyArrival);
        }

        // Parse as i64 first so negative inputs reach the range checks
        // below rather than failing here as unparseable.
        let departure: i64 =
            self.departure
                .parse()
                .map_err(|_| QueryError::InvalidDepartureInput {
                    input: self.departure.clone(),
                })?;

        let arrival: i64 = self
            .arrival
            .parse()
            .map_err(|_| QueryError::InvalidArrivalInput {
                input: self.arrival.clone(),
            })?;

        if arrival < 1 {
            return Err(QueryError::InvalidArrivalInput {
                input: self.arrival.clone(),
            });
        }

        if departure < 1 {
            return Err(QueryError::InvalidDepartureInput {
                input: self.departure.clone(),
            });
        }

        let arrival =
            StationId::from_i64(arrival).map_err(|_| QueryError::InvalidArrivalInput {
                input: self.arrival.clone(),
            })?;

        let departure =
            StationId::from_i64(departure).map_err(|_| QueryError::InvalidDepartureInput {
                input: self.departure.clone(),
            })?;

        let criterion = SortCriterion::parse(&self.criterion).map_err(|_| {
            QueryError::UnsupportedCriteria {
                input: self.criterion.clone(),
            }
        })?;

        Ok(ValidQuery {
            departure,
            arrival,
            criterion,
        })
    }
}

/// A query that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidQuery {
    /// The requested departure station.
    pub departure: StationId,

    /// The requested arrival station.
    pub arrival: StationId,

    /// The field to order results by.
    pub criterion: SortCriterion,
}

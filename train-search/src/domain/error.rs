//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from query and IO errors.

use super::{InvalidStationId, TimeParseError};

/// Domain-level errors for validation failures at construction time.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Station id failed validation
    #[error(transparent)]
    Station(#[from] InvalidStationId),

    /// Time string failed validation
    #[error(transparent)]
    Time(#[from] TimeParseError),

    /// Price is negative or not a number
    #[error("price must be a finite non-negative number, got {0}")]
    InvalidPrice(f32),
}

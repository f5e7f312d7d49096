//! Sort criterion vocabulary.

use std::fmt;

/// Error returned when parsing an unrecognized criterion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported criteria: {input}")]
pub struct InvalidCriterion {
    input: String,
}

/// The field used to order matching trains.
///
/// # Examples
///
/// ```
/// use train_search::domain::SortCriterion;
///
/// assert_eq!(SortCriterion::parse("price").unwrap(), SortCriterion::Price);
///
/// // Matching is case-insensitive
/// assert_eq!(
///     SortCriterion::parse("Arrival-Time").unwrap(),
///     SortCriterion::ArrivalTime,
/// );
///
/// assert!(SortCriterion::parse("fastest").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    /// Ascending by price.
    Price,
    /// Ascending by arrival time.
    ArrivalTime,
    /// Ascending by departure time.
    DepartureTime,
}

impl SortCriterion {
    /// Parse a criterion from a string, case-insensitively.
    ///
    /// Accepts exactly `price`, `arrival-time`, and `departure-time`.
    pub fn parse(s: &str) -> Result<Self, InvalidCriterion> {
        match s.to_ascii_lowercase().as_str() {
            "price" => Ok(SortCriterion::Price),
            "arrival-time" => Ok(SortCriterion::ArrivalTime),
            "departure-time" => Ok(SortCriterion::DepartureTime),
            _ => Err(InvalidCriterion {
                input: s.to_string(),
            }),
        }
    }

    /// Returns the canonical (lowercase) spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Price => "price",
            SortCriterion::ArrivalTime => "arrival-time",
            SortCriterion::DepartureTime => "departure-time",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

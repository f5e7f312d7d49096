//! Station identifier types.

use std::fmt;

/// Error returned when constructing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A valid station identifier.
///
/// Station ids in the timetable are positive integers. This type guarantees
/// that any `StationId` value is valid by construction.
///
/// # Examples
///
/// ```
/// use train_search::domain::StationId;
///
/// let station = StationId::new(3).unwrap();
/// assert_eq!(station.get(), 3);
///
/// // Zero is rejected
/// assert!(StationId::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u32);

impl StationId {
    /// Create a station id from a raw integer.
    ///
    /// The input must be at least 1.
    pub fn new(id: u32) -> Result<Self, InvalidStationId> {
        if id == 0 {
            return Err(InvalidStationId {
                reason: "must be at least 1",
            });
        }

        Ok(StationId(id))
    }

    /// Create a station id from a wire integer.
    ///
    /// Wire formats carry station ids as signed integers; values below 1
    /// or beyond the id width are rejected.
    pub fn from_i64(raw: i64) -> Result<Self, InvalidStationId> {
        let id = u32::try_from(raw).map_err(|_| InvalidStationId {
            reason: "out of range",
        })?;
        Self::new(id)
    }

    /// Returns the raw integer value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert!(StationId::new(1).is_ok());
        assert!(StationId::new(42).is_ok());
        assert!(StationId::new(u32::MAX).is_ok());
    }

    #[test]
    fn reject_zero() {
        assert!(StationId::new(0).is_err());
    }

    #[test]
    fn from_i64_range() {
        assert!(StationId::from_i64(1).is_ok());
        assert!(StationId::from_i64(i64::from(u32::MAX)).is_ok());
        assert!(StationId::from_i64(0).is_err());
        assert!(StationId::from_i64(-3).is_err());
        assert!(StationId::from_i64(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn get_roundtrip() {
        let id = StationId::new(7).unwrap();
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn display() {
        let id = StationId::new(12).unwrap();
        assert_eq!(format!("{}", id), "12");
    }

    #[test]
    fn debug() {
        let id = StationId::new(12).unwrap();
        assert_eq!(format!("{:?}", id), "StationId(12)");
    }

    #[test]
    fn equality() {
        let a = StationId::new(3).unwrap();
        let b = StationId::new(3).unwrap();
        let c = StationId::new(4).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any positive integer is accepted and roundtrips
        #[test]
        fn positive_roundtrip(id in 1u32..) {
            let station = StationId::new(id).unwrap();
            prop_assert_eq!(station.get(), id);
        }

        /// Display matches the raw integer
        #[test]
        fn display_matches_raw(id in 1u32..) {
            let station = StationId::new(id).unwrap();
            prop_assert_eq!(station.to_string(), id.to_string());
        }
    }
}

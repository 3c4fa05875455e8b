//! Section distance type.

use std::fmt;
use std::num::NonZeroU32;

/// Error returned when constructing a distance that is not positive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance {value}: must be a positive integer")]
pub struct InvalidDistance {
    value: i64,
}

/// Length of a section, a positive integer.
///
/// Zero and negative distances are rejected at construction, so any edge
/// weight derived from a `Distance` is strictly positive.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
///
/// assert!(Distance::new(0).is_err());
/// assert!(Distance::new(-3).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(NonZeroU32);

impl Distance {
    /// Create a distance, rejecting values that are not in `1..=u32::MAX`.
    pub fn new(value: i64) -> Result<Self, InvalidDistance> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Distance)
            .ok_or(InvalidDistance { value })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Distance left over after taking `other` out of `self`.
    ///
    /// Returns `None` unless `other` is strictly shorter.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.get()
            .checked_sub(other.get())
            .and_then(NonZeroU32::new)
            .map(Distance)
    }

    /// Sum of two distances, or `None` if it does not fit in a `u32`.
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.get()).map(Distance)
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.get())
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Distance {
        Distance::new(v).unwrap()
    }

    #[test]
    fn rejects_non_positive() {
        assert!(Distance::new(0).is_err());
        assert!(Distance::new(-1).is_err());
        assert!(Distance::new(i64::from(u32::MAX) + 1).is_err());
        assert!(Distance::new(1).is_ok());
    }

    #[test]
    fn checked_sub_requires_strictly_shorter() {
        assert_eq!(d(10).checked_sub(d(3)), Some(d(7)));
        assert_eq!(d(10).checked_sub(d(10)), None);
        assert_eq!(d(3).checked_sub(d(10)), None);
    }

    #[test]
    fn checked_add_rejects_overflow() {
        assert_eq!(d(10).checked_add(d(5)), Some(d(15)));
        assert_eq!(d(i64::from(u32::MAX)).checked_add(d(1)), None);
        assert_eq!(d(3_000_000_000).checked_add(d(3_000_000_000)), None);
    }

    #[test]
    fn error_display() {
        let err = Distance::new(0).unwrap_err();
        assert_eq!(err.to_string(), "invalid distance 0: must be a positive integer");
    }
}

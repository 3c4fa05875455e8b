//! Section type.

use super::{Distance, LineError, Station};

/// A directed, weighted connection between two adjacent stations on a line.
///
/// # Invariants
///
/// - `up != down`
/// - `distance` is positive (guaranteed by [`Distance`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
}

impl Section {
    /// Create a section, rejecting one that starts and ends at the same station.
    pub fn new(up: Station, down: Station, distance: Distance) -> Result<Self, LineError> {
        if up == down {
            return Err(LineError::SameEndpoints(up.id()));
        }
        Ok(Self { up, down, distance })
    }

    /// The station nearer the top of the line.
    pub fn up(&self) -> &Station {
        &self.up
    }

    /// The station nearer the bottom of the line.
    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns true if `station` is either endpoint.
    pub fn touches(&self, station: &Station) -> bool {
        &self.up == station || &self.down == station
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), name)
    }

    #[test]
    fn rejects_loop() {
        let gangnam = station(1, "강남역");
        let err = Section::new(gangnam.clone(), gangnam, Distance::new(5).unwrap()).unwrap_err();
        assert_eq!(err, LineError::SameEndpoints(StationId(1)));
    }

    #[test]
    fn touches_either_endpoint() {
        let section = Section::new(
            station(1, "강남역"),
            station(2, "양재역"),
            Distance::new(10).unwrap(),
        )
        .unwrap();

        assert!(section.touches(&station(1, "강남역")));
        assert!(section.touches(&station(2, "양재역")));
        assert!(!section.touches(&station(3, "교대역")));
        assert_eq!(section.distance().get(), 10);
    }
}

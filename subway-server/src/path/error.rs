//! Path search errors.

use crate::domain::StationId;

/// Why a shortest-path query failed.
///
/// Every variant is a deterministic consequence of the inputs; retrying the
/// same query gives the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("source and target are the same station ({0})")]
    IdenticalEndpoints(StationId),

    /// Station is not on any line
    #[error("station {0} is not on any line")]
    UnknownStation(StationId),

    /// Source and target lie in disconnected parts of the network
    #[error("no path between stations {from} and {to}")]
    NoPath { from: StationId, to: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PathError::IdenticalEndpoints(StationId(1));
        assert_eq!(err.to_string(), "source and target are the same station (1)");

        let err = PathError::UnknownStation(StationId(42));
        assert_eq!(err.to_string(), "station 42 is not on any line");

        let err = PathError::NoPath {
            from: StationId(1),
            to: StationId(5),
        };
        assert_eq!(err.to_string(), "no path between stations 1 and 5");
        assert!(std::error::Error::source(&err).is_none());
    }
}

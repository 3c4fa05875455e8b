//! Domain error types.
//!
//! These errors represent violations of the line editing rules. They are
//! distinct from lookup failures in the store and from path search errors.

use super::{Distance, StationId};

/// Errors raised while editing the sections of a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// A section must join two different stations
    #[error("section endpoints must differ (station {0})")]
    SameEndpoints(StationId),

    /// Both stations of the new section are already on the line
    #[error("stations {up} and {down} are both already on the line")]
    SectionAlreadyRegistered { up: StationId, down: StationId },

    /// Neither station of the new section is on the line
    #[error("neither station {up} nor {down} is on the line")]
    SectionNotConnected { up: StationId, down: StationId },

    /// The new section does not fit inside the section it would split
    #[error("section of length {requested} does not fit inside existing section of length {existing}")]
    SectionTooLong {
        requested: Distance,
        existing: Distance,
    },

    /// The station to remove is not on the line
    #[error("station {0} is not on the line")]
    StationNotOnLine(StationId),

    /// A line must keep at least one section
    #[error("cannot remove a station from a line with a single section")]
    LastSection,

    /// Merging two sections would give a distance too long to store
    #[error("merged section of length {first} + {second} is too long")]
    DistanceOverflow { first: Distance, second: Distance },
}

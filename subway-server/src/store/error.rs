//! Network store error types.

use crate::domain::{FavoriteId, InvalidDistance, LineError, LineId, MemberId, StationId};

/// Errors that can occur when reading or editing the network store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("line {0} not found")]
    LineNotFound(LineId),

    #[error("member {0} not found")]
    MemberNotFound(MemberId),

    #[error("favorite {0} not found")]
    FavoriteNotFound(FavoriteId),

    #[error("a station named {0:?} already exists")]
    DuplicateStation(String),

    #[error("a line named {0:?} already exists")]
    DuplicateLine(String),

    #[error("a member with email {0:?} already exists")]
    DuplicateMember(String),

    #[error("favorite from station {from} to station {to} already exists")]
    DuplicateFavorite { from: StationId, to: StationId },

    /// Station is still referenced by a line or a favorite
    #[error("station {0} is still in use")]
    StationInUse(StationId),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    InvalidDistance(#[from] InvalidDistance),

    #[error(transparent)]
    Line(#[from] LineError),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("missing or unknown access token")]
    Unauthorized,
}

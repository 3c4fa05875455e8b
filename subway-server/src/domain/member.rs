//! Member accounts and their favorite routes.

use std::fmt;

use chrono::{DateTime, Utc};

use super::Station;

/// Numeric identifier of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier of a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FavoriteId(pub u64);

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub email: String,
    pub password: String,
    pub age: u32,
}

impl Member {
    /// Returns true if `password` matches the member's password.
    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}

/// A source/target pair saved by a member for quick path lookups.
#[derive(Debug, Clone)]
pub struct Favorite {
    pub id: FavoriteId,
    pub member: MemberId,
    pub source: Station,
    pub target: Station,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Returns true if this favorite belongs to `member`.
    pub fn is_created_by(&self, member: MemberId) -> bool {
        self.member == member
    }

    /// Returns true if this favorite goes between the same two stations, in
    /// the same direction.
    pub fn same_route(&self, source: &Station, target: &Station) -> bool {
        &self.source == source && &self.target == target
    }

    /// Returns true if either endpoint is `station`.
    pub fn mentions(&self, station: &Station) -> bool {
        &self.source == station || &self.target == station
    }
}

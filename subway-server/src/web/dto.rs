//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Favorite, Line, Member, Station};
use crate::path::PathResult;

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

/// A station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: i64,
}

/// Request to rename or recolor a line.
#[derive(Debug, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}

/// A line with its stations in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,

    /// Sum of section distances
    pub distance: u64,
}

/// Request to add a section to a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: i64,
}

/// Query for removing a station from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStationQuery {
    pub station_id: u64,
}

/// Query for a shortest path.
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    /// Source station id
    pub source: u64,

    /// Target station id
    pub target: u64,

    /// Passenger age; accepted for compatibility, not used
    pub age: Option<u32>,
}

/// Shortest path between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    /// Stations from source to target, inclusive
    pub stations: Vec<StationResponse>,

    /// Total distance
    pub distance: u64,
}

/// Request to register or update a member.
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    pub email: String,
    pub password: String,
    pub age: u32,
}

/// A member, without their password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: u64,
    pub email: String,
    pub age: u32,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    pub password: String,
}

/// Login response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// Request to save a favorite route.
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub source: u64,
    pub target: u64,
}

/// A saved favorite route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: u64,
    pub source: StationResponse,
    pub target: StationResponse,
    pub created_at: DateTime<Utc>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResponse {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().0,
            name: station.name().to_string(),
        }
    }
}

impl LineResponse {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id().0,
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations: line
                .stations()
                .into_iter()
                .map(StationResponse::from_station)
                .collect(),
            distance: line.total_distance(),
        }
    }
}

impl PathResponse {
    pub fn from_path(path: &PathResult) -> Self {
        Self {
            stations: path
                .stations
                .iter()
                .map(StationResponse::from_station)
                .collect(),
            distance: path.distance,
        }
    }
}

impl MemberResponse {
    pub fn from_member(member: &Member) -> Self {
        Self {
            id: member.id.0,
            email: member.email.clone(),
            age: member.age,
        }
    }
}

impl FavoriteResponse {
    pub fn from_favorite(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id.0,
            source: StationResponse::from_station(&favorite.source),
            target: StationResponse::from_station(&favorite.target),
            created_at: favorite.created_at,
        }
    }
}

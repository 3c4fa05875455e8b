//! In-memory network store.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::{
    Distance, Favorite, FavoriteId, Line, LineId, Member, MemberId, Section, Station, StationId,
};

use super::error::StoreError;

/// Thread-safe store for stations, lines, members and favorites.
///
/// Cloning the store is cheap and every clone sees the same data. Readers
/// receive owned snapshots, so a path query never holds the lock while it
/// searches, and never sees a write half-applied.
#[derive(Clone, Default)]
pub struct NetworkStore {
    inner: Arc<RwLock<Network>>,
}

#[derive(Default)]
struct Network {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
    members: BTreeMap<MemberId, Member>,
    favorites: BTreeMap<FavoriteId, Favorite>,
    /// Access token → member.
    sessions: HashMap<String, MemberId>,
    sequences: Sequences,
}

/// Identity counters, one per table.
#[derive(Default)]
struct Sequences {
    station: u64,
    line: u64,
    member: u64,
    favorite: u64,
    session: u64,
}

fn next(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

fn require_text(field: &str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Passwords are kept exactly as given; only blank ones are rejected.
fn require_password(value: &str) -> Result<String, StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidInput("password must not be empty".to_string()));
    }
    Ok(value.to_string())
}

impl Network {
    fn station(&self, id: StationId) -> Result<Station, StoreError> {
        self.stations
            .get(&id)
            .cloned()
            .ok_or(StoreError::StationNotFound(id))
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut Line, StoreError> {
        self.lines.get_mut(&id).ok_or(StoreError::LineNotFound(id))
    }

    fn email_taken(&self, email: &str, except: Option<MemberId>) -> bool {
        self.members
            .values()
            .any(|m| m.email == email && Some(m.id) != except)
    }
}

impl NetworkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Stations
    // ------------------------------------------------------------------

    /// Register a new station.
    pub async fn create_station(&self, name: &str) -> Result<Station, StoreError> {
        let name = require_text("station name", name)?;
        let mut guard = self.inner.write().await;

        if guard.stations.values().any(|s| s.name() == name) {
            return Err(StoreError::DuplicateStation(name));
        }

        let id = StationId(next(&mut guard.sequences.station));
        let station = Station::new(id, name);
        guard.stations.insert(id, station.clone());

        info!(station = %id, name = station.name(), "Created station");
        Ok(station)
    }

    /// All stations, ordered by id.
    pub async fn list_stations(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.stations.values().cloned().collect()
    }

    pub async fn find_station(&self, id: StationId) -> Result<Station, StoreError> {
        self.inner.read().await.station(id)
    }

    /// Delete a station that no line or favorite refers to.
    pub async fn delete_station(&self, id: StationId) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        let station = guard.station(id)?;

        let on_line = guard.lines.values().any(|l| l.contains(id));
        let in_favorite = guard.favorites.values().any(|f| f.mentions(&station));
        if on_line || in_favorite {
            return Err(StoreError::StationInUse(id));
        }

        guard.stations.remove(&id);
        info!(station = %id, "Deleted station");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------

    /// Create a line with a single section between two existing stations.
    pub async fn create_line(
        &self,
        name: &str,
        color: &str,
        up: StationId,
        down: StationId,
        distance: Distance,
    ) -> Result<Line, StoreError> {
        let name = require_text("line name", name)?;
        let color = require_text("line color", color)?;
        let mut guard = self.inner.write().await;

        if guard.lines.values().any(|l| l.name() == name) {
            return Err(StoreError::DuplicateLine(name));
        }
        let section = Section::new(guard.station(up)?, guard.station(down)?, distance)?;

        let id = LineId(next(&mut guard.sequences.line));
        let line = Line::new(id, name, color, section);
        guard.lines.insert(id, line.clone());

        info!(line = %id, name = line.name(), "Created line");
        Ok(line)
    }

    /// Snapshot of every line, ordered by id.
    ///
    /// The returned lines are copies; later edits to the store do not
    /// affect them.
    pub async fn list_lines(&self) -> Vec<Line> {
        let guard = self.inner.read().await;
        guard.lines.values().cloned().collect()
    }

    pub async fn find_line(&self, id: LineId) -> Result<Line, StoreError> {
        let guard = self.inner.read().await;
        guard.lines.get(&id).cloned().ok_or(StoreError::LineNotFound(id))
    }

    /// Rename and recolor a line.
    pub async fn update_line(
        &self,
        id: LineId,
        name: &str,
        color: &str,
    ) -> Result<Line, StoreError> {
        let name = require_text("line name", name)?;
        let color = require_text("line color", color)?;
        let mut guard = self.inner.write().await;

        if guard.lines.values().any(|l| l.name() == name && l.id() != id) {
            return Err(StoreError::DuplicateLine(name));
        }
        let line = guard.line_mut(id)?;
        line.update(name, color);

        debug!(line = %id, "Updated line");
        Ok(line.clone())
    }

    pub async fn delete_line(&self, id: LineId) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        guard
            .lines
            .remove(&id)
            .ok_or(StoreError::LineNotFound(id))?;

        info!(line = %id, "Deleted line");
        Ok(())
    }

    /// Add a section to a line. See [`Line::add_section`] for the rules.
    pub async fn add_section(
        &self,
        line: LineId,
        up: StationId,
        down: StationId,
        distance: Distance,
    ) -> Result<Line, StoreError> {
        let mut guard = self.inner.write().await;
        let up = guard.station(up)?;
        let down = guard.station(down)?;

        let line = guard.line_mut(line)?;
        line.add_section(up, down, distance)?;

        debug!(line = %line.id(), sections = line.sections().len(), "Added section");
        Ok(line.clone())
    }

    /// Remove a station from a line. See [`Line::remove_station`] for the rules.
    pub async fn remove_station_from_line(
        &self,
        line: LineId,
        station: StationId,
    ) -> Result<Line, StoreError> {
        let mut guard = self.inner.write().await;
        let line = guard.line_mut(line)?;
        line.remove_station(station)?;

        debug!(line = %line.id(), station = %station, "Removed station from line");
        Ok(line.clone())
    }

    // ------------------------------------------------------------------
    // Members and sessions
    // ------------------------------------------------------------------

    pub async fn create_member(
        &self,
        email: &str,
        password: &str,
        age: u32,
    ) -> Result<Member, StoreError> {
        let email = require_text("email", email)?;
        let password = require_password(password)?;
        let mut guard = self.inner.write().await;

        if guard.email_taken(&email, None) {
            return Err(StoreError::DuplicateMember(email));
        }

        let id = MemberId(next(&mut guard.sequences.member));
        let member = Member {
            id,
            email,
            password,
            age,
        };
        guard.members.insert(id, member.clone());

        info!(member = %id, "Created member");
        Ok(member)
    }

    pub async fn find_member(&self, id: MemberId) -> Result<Member, StoreError> {
        let guard = self.inner.read().await;
        guard
            .members
            .get(&id)
            .cloned()
            .ok_or(StoreError::MemberNotFound(id))
    }

    pub async fn update_member(
        &self,
        id: MemberId,
        email: &str,
        password: &str,
        age: u32,
    ) -> Result<Member, StoreError> {
        let email = require_text("email", email)?;
        let password = require_password(password)?;
        let mut guard = self.inner.write().await;

        if guard.email_taken(&email, Some(id)) {
            return Err(StoreError::DuplicateMember(email));
        }
        let member = guard
            .members
            .get_mut(&id)
            .ok_or(StoreError::MemberNotFound(id))?;
        member.email = email;
        member.password = password;
        member.age = age;

        Ok(member.clone())
    }

    /// Delete a member along with their favorites and sessions.
    pub async fn delete_member(&self, id: MemberId) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        guard
            .members
            .remove(&id)
            .ok_or(StoreError::MemberNotFound(id))?;
        guard.favorites.retain(|_, f| !f.is_created_by(id));
        guard.sessions.retain(|_, member| *member != id);

        info!(member = %id, "Deleted member");
        Ok(())
    }

    /// Check credentials and issue an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, StoreError> {
        let email = email.trim();
        let mut guard = self.inner.write().await;
        let member = guard
            .members
            .values()
            .find(|m| m.email == email && m.check_password(password))
            .map(|m| m.id)
            .ok_or(StoreError::InvalidCredentials)?;

        let serial = next(&mut guard.sequences.session);
        let issued = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let token = URL_SAFE_NO_PAD.encode(format!("{member}:{serial}:{issued}"));
        guard.sessions.insert(token.clone(), member);

        debug!(member = %member, "Issued access token");
        Ok(token)
    }

    /// Resolve an access token to its member.
    pub async fn authenticate(&self, token: &str) -> Result<MemberId, StoreError> {
        let guard = self.inner.read().await;
        guard
            .sessions
            .get(token)
            .copied()
            .ok_or(StoreError::Unauthorized)
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    pub async fn create_favorite(
        &self,
        member: MemberId,
        source: StationId,
        target: StationId,
    ) -> Result<Favorite, StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.members.contains_key(&member) {
            return Err(StoreError::MemberNotFound(member));
        }
        let source = guard.station(source)?;
        let target = guard.station(target)?;
        if source == target {
            return Err(StoreError::InvalidInput(
                "source and target must be different stations".to_string(),
            ));
        }

        let duplicate = guard
            .favorites
            .values()
            .any(|f| f.is_created_by(member) && f.same_route(&source, &target));
        if duplicate {
            return Err(StoreError::DuplicateFavorite {
                from: source.id(),
                to: target.id(),
            });
        }

        let id = FavoriteId(next(&mut guard.sequences.favorite));
        let favorite = Favorite {
            id,
            member,
            source,
            target,
            created_at: Utc::now(),
        };
        guard.favorites.insert(id, favorite.clone());

        info!(favorite = %id, member = %member, "Created favorite");
        Ok(favorite)
    }

    /// A member's favorites, ordered by id.
    pub async fn list_favorites(&self, member: MemberId) -> Vec<Favorite> {
        let guard = self.inner.read().await;
        guard
            .favorites
            .values()
            .filter(|f| f.is_created_by(member))
            .cloned()
            .collect()
    }

    /// Delete one of a member's favorites.
    ///
    /// A favorite owned by someone else is reported as not found.
    pub async fn delete_favorite(&self, member: MemberId, id: FavoriteId) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        match guard.favorites.get(&id) {
            Some(f) if f.is_created_by(member) => {}
            _ => return Err(StoreError::FavoriteNotFound(id)),
        }
        guard.favorites.remove(&id);

        info!(favorite = %id, member = %member, "Deleted favorite");
        Ok(())
    }
}

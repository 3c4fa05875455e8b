//! Subway line type.
//!
//! A `Line` is a chain of sections kept in travel order, so the stations of
//! a line can be read off front to back without re-sorting.

use std::fmt;

use super::{Distance, LineError, Section, Station, StationId};

/// Numeric identifier of a line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway line: an ordered chain of sections.
///
/// # Invariants
///
/// - At least one section
/// - `sections[i].down() == sections[i + 1].up()` for every adjacent pair
/// - Every station appears at most once
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    sections: Vec<Section>,
}

impl Line {
    /// Create a line made of a single section.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        first: Section,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            sections: vec![first],
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Rename and recolor the line. Sections are untouched.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    /// Sections in travel order, top to bottom.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Stations in travel order, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{Distance, Line, LineId, Section, Station, StationId};
    ///
    /// let gangnam = Station::new(StationId(1), "강남역");
    /// let yangjae = Station::new(StationId(2), "양재역");
    /// let seoul = Station::new(StationId(3), "서울역");
    ///
    /// let first = Section::new(gangnam, yangjae.clone(), Distance::new(10).unwrap()).unwrap();
    /// let mut line = Line::new(LineId(1), "신분당선", "bg-red-600", first);
    /// line.add_section(yangjae, seoul, Distance::new(30).unwrap()).unwrap();
    ///
    /// let names: Vec<_> = line.stations().iter().map(|s| s.name()).collect();
    /// assert_eq!(names, ["강남역", "양재역", "서울역"]);
    /// ```
    pub fn stations(&self) -> Vec<&Station> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        if let Some(first) = self.sections.first() {
            stations.push(first.up());
        }
        stations.extend(self.sections.iter().map(Section::down));
        stations
    }

    /// Returns true if the station is on this line.
    pub fn contains(&self, station: StationId) -> bool {
        self.sections
            .iter()
            .any(|s| s.up().id() == station || s.down().id() == station)
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }

    /// Add a section that shares exactly one station with the line.
    ///
    /// A section hanging off either end extends the line. A section that
    /// starts (or ends) at an interior station is inserted by splitting the
    /// section it overlaps; it must be strictly shorter than that section.
    ///
    /// # Errors
    ///
    /// - [`LineError::SameEndpoints`] if `up == down`
    /// - [`LineError::SectionAlreadyRegistered`] if both stations are on the line
    /// - [`LineError::SectionNotConnected`] if neither station is on the line
    /// - [`LineError::SectionTooLong`] if a split would leave no distance
    pub fn add_section(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<(), LineError> {
        let has_up = self.contains(up.id());
        let has_down = self.contains(down.id());
        let section = Section::new(up, down, distance)?;

        match (has_up, has_down) {
            (true, true) => Err(LineError::SectionAlreadyRegistered {
                up: section.up().id(),
                down: section.down().id(),
            }),
            (false, false) => Err(LineError::SectionNotConnected {
                up: section.up().id(),
                down: section.down().id(),
            }),
            (true, false) => self.insert_after(section),
            (false, true) => self.insert_before(section),
        }
    }

    /// Insert a section whose up station is already on the line.
    fn insert_after(&mut self, section: Section) -> Result<(), LineError> {
        let Some(idx) = self.sections.iter().position(|s| s.up() == section.up()) else {
            // up is the bottom terminal
            self.sections.push(section);
            return Ok(());
        };

        let existing = &self.sections[idx];
        let remainder = existing
            .distance()
            .checked_sub(section.distance())
            .ok_or(LineError::SectionTooLong {
                requested: section.distance(),
                existing: existing.distance(),
            })?;
        let tail = Section::new(section.down().clone(), existing.down().clone(), remainder)?;

        self.sections[idx] = section;
        self.sections.insert(idx + 1, tail);
        Ok(())
    }

    /// Insert a section whose down station is already on the line.
    fn insert_before(&mut self, section: Section) -> Result<(), LineError> {
        let Some(idx) = self
            .sections
            .iter()
            .position(|s| s.down() == section.down())
        else {
            // down is the top terminal
            self.sections.insert(0, section);
            return Ok(());
        };

        let existing = &self.sections[idx];
        let remainder = existing
            .distance()
            .checked_sub(section.distance())
            .ok_or(LineError::SectionTooLong {
                requested: section.distance(),
                existing: existing.distance(),
            })?;
        let head = Section::new(existing.up().clone(), section.up().clone(), remainder)?;

        self.sections[idx] = section;
        self.sections.insert(idx, head);
        Ok(())
    }

    /// Remove a station from the line.
    ///
    /// Removing a terminal drops its section. Removing an interior station
    /// merges the two sections around it into one spanning their combined
    /// distance.
    ///
    /// # Errors
    ///
    /// - [`LineError::StationNotOnLine`] if the station is not on the line
    /// - [`LineError::LastSection`] if the line has only one section left
    /// - [`LineError::DistanceOverflow`] if the merged section would be too long
    pub fn remove_station(&mut self, station: StationId) -> Result<(), LineError> {
        let arriving = self.sections.iter().position(|s| s.down().id() == station);
        let leaving = self.sections.iter().position(|s| s.up().id() == station);

        match (arriving, leaving) {
            (None, None) => return Err(LineError::StationNotOnLine(station)),
            _ if self.sections.len() <= 1 => return Err(LineError::LastSection),
            (Some(before), Some(after)) => {
                let first = self.sections[before].distance();
                let second = self.sections[after].distance();
                let distance = first
                    .checked_add(second)
                    .ok_or(LineError::DistanceOverflow { first, second })?;
                let merged = Section::new(
                    self.sections[before].up().clone(),
                    self.sections[after].down().clone(),
                    distance,
                )?;
                self.sections[before] = merged;
                self.sections.remove(after);
            }
            (Some(idx), None) | (None, Some(idx)) => {
                self.sections.remove(idx);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), name)
    }

    fn d(v: i64) -> Distance {
        Distance::new(v).unwrap()
    }

    fn gangnam() -> Station {
        station(1, "강남역")
    }
    fn yangjae() -> Station {
        station(2, "양재역")
    }
    fn gyodae() -> Station {
        station(3, "교대역")
    }
    fn seoul() -> Station {
        station(4, "서울역")
    }

    /// 강남역 --10-- 양재역
    fn sinbundang() -> Line {
        let first = Section::new(gangnam(), yangjae(), d(10)).unwrap();
        Line::new(LineId(1), "신분당선", "bg-red-600", first)
    }

    fn station_ids(line: &Line) -> Vec<u64> {
        line.stations().iter().map(|s| s.id().0).collect()
    }

    fn distances(line: &Line) -> Vec<u32> {
        line.sections().iter().map(|s| s.distance().get()).collect()
    }

    #[test]
    fn extend_at_bottom() {
        let mut line = sinbundang();
        line.add_section(yangjae(), seoul(), d(30)).unwrap();

        assert_eq!(station_ids(&line), [1, 2, 4]);
        assert_eq!(distances(&line), [10, 30]);
        assert_eq!(line.total_distance(), 40);
    }

    #[test]
    fn extend_at_top() {
        let mut line = sinbundang();
        line.add_section(gyodae(), gangnam(), d(15)).unwrap();

        assert_eq!(station_ids(&line), [3, 1, 2]);
        assert_eq!(distances(&line), [15, 10]);
    }

    #[test]
    fn split_from_up_station() {
        let mut line = sinbundang();
        line.add_section(gangnam(), gyodae(), d(4)).unwrap();

        assert_eq!(station_ids(&line), [1, 3, 2]);
        assert_eq!(distances(&line), [4, 6]);
    }

    #[test]
    fn split_from_down_station() {
        let mut line = sinbundang();
        line.add_section(gyodae(), yangjae(), d(4)).unwrap();

        assert_eq!(station_ids(&line), [1, 3, 2]);
        assert_eq!(distances(&line), [6, 4]);
    }

    #[test]
    fn split_rejects_section_as_long_as_existing() {
        let mut line = sinbundang();
        let err = line.add_section(gangnam(), gyodae(), d(10)).unwrap_err();

        assert_eq!(
            err,
            LineError::SectionTooLong {
                requested: d(10),
                existing: d(10),
            }
        );
        assert_eq!(station_ids(&line), [1, 2]);
    }

    #[test]
    fn rejects_section_with_both_stations_present() {
        let mut line = sinbundang();
        let err = line.add_section(gangnam(), yangjae(), d(3)).unwrap_err();
        assert!(matches!(err, LineError::SectionAlreadyRegistered { .. }));
    }

    #[test]
    fn rejects_disconnected_section() {
        let mut line = sinbundang();
        let err = line.add_section(gyodae(), seoul(), d(3)).unwrap_err();
        assert!(matches!(err, LineError::SectionNotConnected { .. }));
    }

    #[test]
    fn remove_interior_station_merges_sections() {
        let mut line = sinbundang();
        line.add_section(yangjae(), seoul(), d(30)).unwrap();
        line.remove_station(StationId(2)).unwrap();

        assert_eq!(station_ids(&line), [1, 4]);
        assert_eq!(distances(&line), [40]);
    }

    #[test]
    fn remove_terminal_drops_section() {
        let mut line = sinbundang();
        line.add_section(yangjae(), seoul(), d(30)).unwrap();

        line.remove_station(StationId(4)).unwrap();
        assert_eq!(station_ids(&line), [1, 2]);

        line.add_section(yangjae(), seoul(), d(30)).unwrap();
        line.remove_station(StationId(1)).unwrap();
        assert_eq!(station_ids(&line), [2, 4]);
    }

    #[test]
    fn remove_rejects_last_section() {
        let mut line = sinbundang();
        assert_eq!(line.remove_station(StationId(1)), Err(LineError::LastSection));
    }

    #[test]
    fn remove_rejects_unknown_station() {
        let mut line = sinbundang();
        line.add_section(yangjae(), seoul(), d(30)).unwrap();
        assert_eq!(
            line.remove_station(StationId(99)),
            Err(LineError::StationNotOnLine(StationId(99)))
        );
    }

    #[test]
    fn remove_rejects_merge_that_overflows() {
        let first = Section::new(gangnam(), yangjae(), d(3_000_000_000)).unwrap();
        let mut line = Line::new(LineId(1), "신분당선", "bg-red-600", first);
        line.add_section(yangjae(), seoul(), d(3_000_000_000)).unwrap();

        assert_eq!(
            line.remove_station(StationId(2)),
            Err(LineError::DistanceOverflow {
                first: d(3_000_000_000),
                second: d(3_000_000_000),
            })
        );
        assert_eq!(station_ids(&line), [1, 2, 4]);
        assert_eq!(line.total_distance(), 6_000_000_000);
    }

    #[test]
    fn update_keeps_sections() {
        let mut line = sinbundang();
        line.update("구분당선", "bg-blue-600");
        assert_eq!(line.name(), "구분당선");
        assert_eq!(line.color(), "bg-blue-600");
        assert_eq!(station_ids(&line), [1, 2]);
    }
}

//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Line, Station};
use crate::path::PathResult;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationOption>,
    pub lines: Vec<LineView>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Shortest path fragment.
#[derive(Template)]
#[template(path = "path_result.html")]
pub struct PathResultTemplate {
    pub path: PathView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A station as a `<select>` option.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub id: u64,
    pub name: String,
}

impl StationOption {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().0,
            name: station.name().to_string(),
        }
    }
}

/// A line summary on the index page.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub color: String,
    pub stations: Vec<String>,
}

impl LineView {
    pub fn from_line(line: &Line) -> Self {
        Self {
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations: line
                .stations()
                .into_iter()
                .map(|s| s.name().to_string())
                .collect(),
        }
    }

    /// Station names joined for display, e.g. "강남역 → 양재역 → 서울역".
    pub fn route(&self) -> String {
        self.stations.join(" → ")
    }
}

/// A shortest path ready for display.
#[derive(Debug, Clone)]
pub struct PathView {
    pub source: String,
    pub target: String,
    pub distance: u64,
    pub hops: Vec<HopView>,
}

/// One section travelled along a path.
#[derive(Debug, Clone)]
pub struct HopView {
    pub from: String,
    pub to: String,
    pub line: String,
    pub color: String,
    pub distance: u32,
}

impl PathView {
    /// Build a view of `path`, looking up line names in `lines`.
    ///
    /// `lines` should be the snapshot the path was computed from. A section
    /// missing from it is shown without a line name.
    pub fn from_path(path: &PathResult, lines: &[Line]) -> Self {
        let hops = path
            .stations
            .windows(2)
            .zip(&path.sections)
            .map(|(pair, section)| {
                let line = lines.iter().find(|l| l.id() == section.line);
                let distance = line
                    .and_then(|l| l.sections().get(section.index))
                    .map(|s| s.distance().get())
                    .unwrap_or_default();
                HopView {
                    from: pair[0].name().to_string(),
                    to: pair[1].name().to_string(),
                    line: line.map(|l| l.name().to_string()).unwrap_or_default(),
                    color: line.map(|l| l.color().to_string()).unwrap_or_default(),
                    distance,
                }
            })
            .collect();

        Self {
            source: path
                .stations
                .first()
                .map(|s| s.name().to_string())
                .unwrap_or_default(),
            target: path
                .stations
                .last()
                .map(|s| s.name().to_string())
                .unwrap_or_default(),
            distance: path.distance,
            hops,
        }
    }

    /// Number of times the path changes line.
    pub fn transfers(&self) -> usize {
        self.hops
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .count()
    }
}

//! Dijkstra shortest-path search over a [`Topology`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{Line, Station, StationId};

use super::error::PathError;
use super::topology::{SectionRef, Topology};

/// Result of a successful path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Stations from source to target, both included.
    pub stations: Vec<Station>,

    /// Sum of the distances of the traversed sections.
    pub distance: u64,

    /// The section ridden for each hop; one fewer than `stations`.
    pub sections: Vec<SectionRef>,
}

/// Find the shortest path between two stations over a set of lines.
///
/// Builds a fresh [`Topology`] from `lines` and searches it. Validation runs
/// in a fixed order so the reported error is deterministic:
///
/// 1. [`PathError::IdenticalEndpoints`] if `source == target`
/// 2. [`PathError::UnknownStation`] if either station is on no line
///    (source checked first)
/// 3. [`PathError::NoPath`] if the two stations are not connected
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Distance, Line, LineId, Section, Station, StationId};
/// use subway_server::path::find_shortest_path;
///
/// let gangnam = Station::new(StationId(1), "강남역");
/// let yangjae = Station::new(StationId(2), "양재역");
/// let seoul = Station::new(StationId(3), "서울역");
///
/// let first = Section::new(gangnam, yangjae.clone(), Distance::new(10).unwrap()).unwrap();
/// let mut line = Line::new(LineId(1), "신분당선", "bg-red-600", first);
/// line.add_section(yangjae, seoul, Distance::new(30).unwrap()).unwrap();
///
/// let path = find_shortest_path(&[line], StationId(1), StationId(3)).unwrap();
/// assert_eq!(path.distance, 40);
/// assert_eq!(path.stations.len(), 3);
/// ```
pub fn find_shortest_path(
    lines: &[Line],
    source: StationId,
    target: StationId,
) -> Result<PathResult, PathError> {
    if source == target {
        return Err(PathError::IdenticalEndpoints(source));
    }

    let topology = Topology::build(lines);
    debug!(
        lines = lines.len(),
        vertices = topology.vertex_count(),
        edges = topology.edge_count(),
        "Assembled topology"
    );

    shortest_path(&topology, source, target)
}

/// Find the shortest path between two stations in an assembled topology.
///
/// Applies the same validation order as [`find_shortest_path`].
pub fn shortest_path(
    topology: &Topology,
    source: StationId,
    target: StationId,
) -> Result<PathResult, PathError> {
    if source == target {
        return Err(PathError::IdenticalEndpoints(source));
    }
    let start = topology
        .vertex(source)
        .ok_or(PathError::UnknownStation(source))?;
    let goal = topology
        .vertex(target)
        .ok_or(PathError::UnknownStation(target))?;

    let parents = dijkstra(topology, start, goal).ok_or(PathError::NoPath {
        from: source,
        to: target,
    })?;
    let result = reconstruct_path(topology, &parents, start, goal);

    debug!(
        %source,
        %target,
        hops = result.sections.len(),
        distance = result.distance,
        "Shortest path found"
    );

    Ok(result)
}

/// Run Dijkstra from `start` until `goal` is settled.
///
/// Returns, for every reached vertex, the edge used to reach it, or `None`
/// if `goal` is unreachable.
fn dijkstra(topology: &Topology, start: usize, goal: usize) -> Option<Vec<Option<usize>>> {
    let n = topology.vertex_count();
    let mut distances = vec![u64::MAX; n];
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut queue = BinaryHeap::new();

    distances[start] = 0;
    queue.push(QueueEntry {
        vertex: start,
        cost: 0,
    });

    while let Some(QueueEntry { vertex, cost }) = queue.pop() {
        if cost > distances[vertex] {
            continue;
        }
        if vertex == goal {
            return Some(parents);
        }

        trace!(
            station = %topology.station(vertex).id(),
            cost,
            "Settling vertex"
        );

        for (edge, next, weight) in topology.neighbours(vertex) {
            let next_cost = cost + u64::from(weight);
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(edge);
                queue.push(QueueEntry {
                    vertex: next,
                    cost: next_cost,
                });
            }
        }
    }

    None
}

fn reconstruct_path(
    topology: &Topology,
    parents: &[Option<usize>],
    start: usize,
    goal: usize,
) -> PathResult {
    let mut stations = vec![topology.station(goal).clone()];
    let mut sections = Vec::new();
    let mut distance = 0u64;

    // Every vertex settled by `dijkstra` other than `start` has a parent
    // edge, so the walk back from `goal` always ends at `start`.
    let mut current = goal;
    while current != start {
        debug_assert!(
            parents[current].is_some(),
            "broken parent chain at vertex {current}"
        );
        let Some(edge_idx) = parents[current] else {
            break;
        };
        let edge = topology.edge(edge_idx);
        distance += u64::from(edge.weight);
        sections.push(edge.section);
        current = edge.other(current);
        stations.push(topology.station(current).clone());
    }

    stations.reverse();
    sections.reverse();

    PathResult {
        stations,
        distance,
        sections,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    vertex: usize,
    cost: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;

//! Graph assembly from subway lines.
//!
//! Every station on any line becomes one vertex, however many lines it
//! appears on. Every section becomes one edge, traversable in both
//! directions. Parallel sections between the same pair of stations stay
//! distinct edges.

use std::collections::HashMap;

use crate::domain::{Line, LineId, Station, StationId};

/// Position of the section an edge was built from.
///
/// `index` is the section's position on its line at the time the graph
/// was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionRef {
    pub line: LineId,
    pub index: usize,
}

/// Weighted edge between two vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Vertex of the section's up station.
    pub up: usize,
    /// Vertex of the section's down station.
    pub down: usize,
    /// Section distance.
    pub weight: u32,
    /// Where this edge came from.
    pub section: SectionRef,
}

impl Edge {
    /// The vertex at the far end of the edge when leaving from `from`.
    pub fn other(&self, from: usize) -> usize {
        if from == self.up { self.down } else { self.up }
    }
}

/// Undirected weighted multigraph of stations and sections.
///
/// Built once per query from a snapshot of the lines; immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    edges: Vec<Edge>,
    /// Edge indices incident to each vertex.
    adjacency: Vec<Vec<usize>>,
}

impl Topology {
    /// Assemble the graph for a set of lines.
    ///
    /// Vertices are numbered in order of first appearance, so the same
    /// lines always produce the same graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{Distance, Line, LineId, Section, Station, StationId};
    /// use subway_server::path::Topology;
    ///
    /// let gangnam = Station::new(StationId(1), "강남역");
    /// let yangjae = Station::new(StationId(2), "양재역");
    ///
    /// let first = Section::new(gangnam, yangjae, Distance::new(10).unwrap()).unwrap();
    /// let line = Line::new(LineId(1), "신분당선", "bg-red-600", first);
    ///
    /// let topology = Topology::build(&[line]);
    /// assert_eq!(topology.vertex_count(), 2);
    /// assert_eq!(topology.edge_count(), 1);
    /// ```
    pub fn build(lines: &[Line]) -> Self {
        let mut topology = Topology::default();

        for line in lines {
            for (index, section) in line.sections().iter().enumerate() {
                let up = topology.add_vertex(section.up());
                let down = topology.add_vertex(section.down());
                topology.add_edge(Edge {
                    up,
                    down,
                    weight: section.distance().get(),
                    section: SectionRef {
                        line: line.id(),
                        index,
                    },
                });
            }
        }

        topology
    }

    fn add_vertex(&mut self, station: &Station) -> usize {
        if let Some(&idx) = self.index.get(&station.id()) {
            return idx;
        }
        let idx = self.stations.len();
        self.stations.push(station.clone());
        self.index.insert(station.id(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    fn add_edge(&mut self, edge: Edge) {
        let idx = self.edges.len();
        self.adjacency[edge.up].push(idx);
        self.adjacency[edge.down].push(idx);
        self.edges.push(edge);
    }

    pub fn vertex_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the station is a vertex.
    pub fn contains(&self, station: StationId) -> bool {
        self.index.contains_key(&station)
    }

    /// Vertex number of a station.
    pub fn vertex(&self, station: StationId) -> Option<usize> {
        self.index.get(&station).copied()
    }

    /// Station at a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn station(&self, vertex: usize) -> &Station {
        &self.stations[vertex]
    }

    /// All vertices' stations, in vertex order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, idx: usize) -> &Edge {
        &self.edges[idx]
    }

    /// Edges leaving `vertex`, paired with the edge index and the vertex
    /// at the other end.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| {
                let edge = &self.edges[idx];
                (idx, edge.other(vertex), edge.weight)
            })
    }
}

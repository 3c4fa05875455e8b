//! Shortest-path search over the subway network.
//!
//! A query takes a snapshot of every line, assembles it into an undirected
//! weighted multigraph ([`Topology`]) and runs Dijkstra between two
//! stations. The graph is rebuilt for every query and never shared, so a
//! query cannot observe a half-edited network.

mod error;
mod solver;
mod topology;

pub use error::PathError;
pub use solver::{PathResult, find_shortest_path, shortest_path};
pub use topology::{Edge, SectionRef, Topology};

//! In-memory persistence for the subway network.
//!
//! Owns stations, lines, members, sessions and favorites, and hands out
//! owned snapshots to readers. Optionally pre-populated from a seed file at
//! startup.

mod error;
mod network;
mod seed;

pub use error::StoreError;
pub use network::NetworkStore;
pub use seed::{SeedError, SeedFile, SeedLine, SeedSection, SeedSummary, load_seed};

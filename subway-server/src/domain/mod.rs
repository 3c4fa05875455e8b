//! Domain types for the subway network.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction time, so code that receives these
//! types can trust their validity.

mod distance;
mod error;
mod line;
mod member;
mod section;
mod station;

pub use distance::{Distance, InvalidDistance};
pub use error::LineError;
pub use line::{Line, LineId};
pub use member::{Favorite, FavoriteId, Member, MemberId};
pub use section::Section;
pub use station::{Station, StationId};

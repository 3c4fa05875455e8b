//! Web layer for the subway route finder.
//!
//! Provides HTTP endpoints for editing the network, finding shortest paths,
//! and managing members and their favorite routes.

mod auth;
mod dto;
mod error;
mod routes;
mod state;
pub mod templates;

pub use auth::AuthMember;
pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;

//! Web layer for the transit route finder.
//!
//! Provides HTTP endpoints for route search and the interleaving demo.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;

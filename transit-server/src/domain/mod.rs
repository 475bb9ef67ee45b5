//! Domain types for the transit route finder.
//!
//! Stations are opaque names, lines are ordered station lists, and routes
//! are non-empty station sequences. Types that have an invariant enforce it
//! at construction time.

mod error;
mod line;
mod route;
mod station;

pub use error::DomainError;
pub use line::Line;
pub use route::Route;
pub use station::Station;

//! Transit network feed client.
//!
//! Fetches the list of lines (name plus ordered stations) that the route
//! finder works from. The feed is either fetched over HTTP or, for local
//! development and tests, served from a fixed list loaded from disk.

mod client;
mod error;
mod source;

pub use client::{DEFAULT_NETWORK_URL, NetworkClient, NetworkClientConfig, parse_lines};
pub use error::NetworkError;
pub use source::NetworkSource;

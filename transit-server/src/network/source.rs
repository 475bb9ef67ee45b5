//! Where the line list comes from.

use std::path::Path;
use std::sync::Arc;

use crate::domain::Line;

use super::client::{NetworkClient, parse_lines};
use super::error::NetworkError;

/// Source of the transit network.
///
/// `Http` fetches the live feed on every call. `Fixed` always returns the
/// same lines, loaded up front; it stands in for the feed during
/// development and in tests.
#[derive(Debug, Clone)]
pub enum NetworkSource {
    /// Live JSON feed.
    Http(NetworkClient),
    /// Pre-loaded lines.
    Fixed(Arc<Vec<Line>>),
}

impl NetworkSource {
    /// A source that always returns `lines`.
    pub fn fixed(lines: Vec<Line>) -> Self {
        NetworkSource::Fixed(Arc::new(lines))
    }

    /// Load a fixed source from a JSON file in feed format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|e| NetworkError::File {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::fixed(parse_lines(&body)?))
    }

    /// Fetch the current line list.
    pub async fn fetch_lines(&self) -> Result<Arc<Vec<Line>>, NetworkError> {
        match self {
            NetworkSource::Http(client) => client.fetch_lines().await.map(Arc::new),
            NetworkSource::Fixed(lines) => Ok(lines.clone()),
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            NetworkSource::Http(client) => format!("feed {}", client.url()),
            NetworkSource::Fixed(lines) => format!("{} fixed lines", lines.len()),
        }
    }
}

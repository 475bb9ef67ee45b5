//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::SearchResult;

/// Query for the interleaving demo.
#[derive(Debug, Default, Deserialize)]
pub struct PataRequest {
    /// First string
    #[serde(default)]
    pub a: String,

    /// Second string
    #[serde(default)]
    pub b: String,
}

/// Query for a route search.
///
/// Field names match the original route form.
#[derive(Debug, Default, Deserialize)]
pub struct RouteRequest {
    /// Start station name
    pub fromsta: Option<String>,

    /// Destination station name
    pub tosta: Option<String>,
}

impl RouteRequest {
    /// Both station names, if both were supplied.
    pub fn stations(&self) -> Option<(&str, &str)> {
        Some((self.fromsta.as_deref()?, self.tosta.as_deref()?))
    }
}

/// Response for a route search.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Start station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Whether a route was found
    pub found: bool,

    /// Stations from start to destination, if found
    pub route: Option<Vec<String>>,

    /// Number of hops, if found
    pub hops: Option<usize>,

    /// Partial routes examined by the search
    pub routes_explored: usize,
}

impl RouteResponse {
    /// Create from a search result.
    pub fn from_result(from: &str, to: &str, result: &SearchResult) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            found: result.is_found(),
            route: result
                .route
                .as_ref()
                .map(|r| r.stations().iter().map(|s| s.to_string()).collect()),
            hops: result.route.as_ref().map(|r| r.hops()),
            routes_explored: result.routes_explored,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedNetwork;
use crate::graph::GraphBuilder;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached network feed
    pub network: Arc<CachedNetwork>,

    /// How station graphs are built for each search
    pub graph_builder: GraphBuilder,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: CachedNetwork, graph_builder: GraphBuilder) -> Self {
        Self {
            network: Arc::new(network),
            graph_builder,
        }
    }
}

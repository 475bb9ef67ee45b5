//! BFS route search algorithm.
//!
//! Finds the route with the fewest hops between two stations.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{Route, Station};
use crate::graph::Graph;

/// Request for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Station the route starts at.
    pub from: Station,

    /// Station the route must reach.
    pub to: Station,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(from: impl Into<Station>, to: impl Into<Station>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result of route search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// The route found, or `None` when the destination is unreachable or
    /// the start station is unknown to the graph.
    pub route: Option<Route>,

    /// Number of partial routes taken off the queue during search.
    pub routes_explored: usize,
}

impl SearchResult {
    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        self.route.is_some()
    }
}

/// One queued partial route: its last station plus the entry it extends.
///
/// Following `parent` links back to the root spells out the whole partial
/// route, so each entry stands for exactly one queued station sequence.
struct Entry<'a> {
    station: &'a str,
    parent: Option<usize>,
}

/// Breadth-first route finder over a built graph.
///
/// The graph is only read. Each search owns its own queue and visited set,
/// so a finder can be reused for any number of searches.
#[derive(Debug, Clone, Copy)]
pub struct RouteFinder<'g> {
    graph: &'g Graph,
}

impl<'g> RouteFinder<'g> {
    /// Create a finder for the given graph.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Search for a route.
    ///
    /// Partial routes are kept in a FIFO queue, seeded with the start
    /// station alone. Each step takes the front route, marks its last
    /// station visited and returns the route if that station is the
    /// destination. Otherwise every neighbor not yet visited, in stored
    /// order, extends the route and is queued at the back.
    ///
    /// Stations are marked visited when dequeued rather than when queued,
    /// so a station can sit in the queue more than once. The first route
    /// to reach the destination off the queue is still a shortest one.
    pub fn search(&self, request: &SearchRequest) -> SearchResult {
        let start = request.from.as_str();
        let end = request.to.as_str();

        let mut entries: Vec<Entry<'_>> = vec![Entry {
            station: start,
            parent: None,
        }];
        let mut queue: VecDeque<usize> = VecDeque::from([0]);
        let mut visited: HashSet<&str> = HashSet::new();
        let mut routes_explored = 0;

        while let Some(idx) = queue.pop_front() {
            routes_explored += 1;
            let current = entries[idx].station;
            visited.insert(current);

            if current == end {
                let route = reconstruct(&entries, idx);
                debug!(
                    from = start,
                    to = end,
                    hops = route.hops(),
                    routes_explored,
                    "Route found"
                );
                return SearchResult {
                    route: Some(route),
                    routes_explored,
                };
            }

            let Some(neighbors) = self.graph.neighbors(current) else {
                continue;
            };

            trace!(
                station = current,
                neighbors = neighbors.len(),
                queued = queue.len(),
                "Expanding station"
            );

            for next in neighbors {
                if visited.contains(next.as_str()) {
                    continue;
                }
                entries.push(Entry {
                    station: next.as_str(),
                    parent: Some(idx),
                });
                queue.push_back(entries.len() - 1);
            }
        }

        debug!(from = start, to = end, routes_explored, "No route found");

        SearchResult {
            route: None,
            routes_explored,
        }
    }
}

/// Walk parent links from `idx` back to the root and return the stations
/// start first.
fn reconstruct(entries: &[Entry<'_>], idx: usize) -> Route {
    let mut stations = Vec::new();
    let mut cursor = Some(idx);

    while let Some(i) = cursor {
        stations.push(Station::new(entries[i].station));
        cursor = entries[i].parent;
    }

    stations.reverse();
    Route::from_nonempty(stations)
}

/// Find the fewest-hop route from `start` to `end`.
///
/// Returns `None` when no route exists. `start == end` always yields the
/// one-station route, even if the station is not in the graph.
pub fn find_route(graph: &Graph, start: &str, end: &str) -> Option<Route> {
    RouteFinder::new(graph)
        .search(&SearchRequest::new(start, end))
        .route
}

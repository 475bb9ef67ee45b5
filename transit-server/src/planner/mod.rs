//! Route finder using BFS search.
//!
//! This module answers: "which stations do I pass through to get from A to
//! B in the fewest hops?" over a graph built by [`crate::graph`].
//!
//! The search is unweighted breadth-first search. When several routes are
//! equally short, the one returned is decided by neighbor order in the
//! graph, so the same lines always produce the same answer.

mod search;

#[cfg(test)]
mod search_tests;

pub use search::{RouteFinder, SearchRequest, SearchResult, find_route};

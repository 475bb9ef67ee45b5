//! Station adjacency graph.
//!
//! Converts line definitions into a mapping from each station to the
//! stations reachable from it in one hop. Neighbor order is significant:
//! the route finder expands neighbors in stored order, which decides which
//! of several equally short routes is returned.

mod builder;

pub use builder::{AdjacencyMode, GraphBuilder, InvalidAdjacencyMode, build_graph};

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Station;

/// Adjacency lists keyed by station.
///
/// Lists may contain duplicates and the relation need not be symmetric. A
/// station only has an entry if at least one neighbor was recorded for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: HashMap<Station, Vec<Station>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` to the end of `from`'s neighbor list.
    pub fn push_neighbor(&mut self, from: &Station, to: &Station) {
        match self.adjacency.get_mut(from.as_str()) {
            Some(neighbors) => neighbors.push(to.clone()),
            None => {
                self.adjacency.insert(from.clone(), vec![to.clone()]);
            }
        }
    }

    /// Neighbors of a station in stored order, or `None` if it has no entry.
    pub fn neighbors(&self, station: &str) -> Option<&[Station]> {
        self.adjacency.get(station).map(Vec::as_slice)
    }

    /// Whether the station has an adjacency entry.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Whether `to` appears in `from`'s neighbor list.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.neighbors(from)
            .is_some_and(|n| n.iter().any(|s| s.as_str() == to))
    }

    /// Number of stations with an adjacency entry.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total neighbor entries, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if no station has an entry.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over `(station, neighbors)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Station, &[Station])> {
        self.adjacency.iter().map(|(s, n)| (s, n.as_slice()))
    }
}

//! Graph construction from line definitions.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::domain::Line;

use super::Graph;

/// Rule for linking a station to the next one along its line.
///
/// Every station is always linked back to its predecessor. The modes differ
/// only in which stations get a forward link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjacencyMode {
    /// Forward links only for positions `idx < len - 2`.
    ///
    /// The second-to-last station never links forward to the last one, so
    /// the last station of every line can be left but not reached from its
    /// predecessor. This is the behavior the route page has always had.
    #[default]
    Literal,

    /// Forward links for every position with a successor (`idx < len - 1`),
    /// giving a symmetric graph.
    Symmetric,
}

impl AdjacencyMode {
    /// Whether the station at `idx` on a line of `len` stations gets a
    /// forward link.
    fn links_forward(self, idx: usize, len: usize) -> bool {
        match self {
            AdjacencyMode::Literal => idx + 2 < len,
            AdjacencyMode::Symmetric => idx + 1 < len,
        }
    }

    /// Name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            AdjacencyMode::Literal => "literal",
            AdjacencyMode::Symmetric => "symmetric",
        }
    }
}

impl fmt::Display for AdjacencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown adjacency mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown adjacency mode {0:?} (expected \"literal\" or \"symmetric\")")]
pub struct InvalidAdjacencyMode(String);

impl FromStr for AdjacencyMode {
    type Err = InvalidAdjacencyMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(AdjacencyMode::Literal),
            "symmetric" => Ok(AdjacencyMode::Symmetric),
            _ => Err(InvalidAdjacencyMode(s.to_string())),
        }
    }
}

/// Builds a [`Graph`] from lines.
///
/// Holds no state between builds beyond its mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    mode: AdjacencyMode,
}

impl GraphBuilder {
    /// Create a builder using [`AdjacencyMode::Literal`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different adjacency mode.
    pub fn with_mode(mut self, mode: AdjacencyMode) -> Self {
        self.mode = mode;
        self
    }

    /// The adjacency mode in use.
    pub fn mode(&self) -> AdjacencyMode {
        self.mode
    }

    /// Build the graph.
    ///
    /// Lines are processed in order and each line's stations by position.
    /// For each station the predecessor (if any) is appended first, then
    /// the successor if the mode links forward from that position. A
    /// station on several lines accumulates neighbors from all of them in
    /// line order.
    pub fn build(&self, lines: &[Line]) -> Graph {
        let mut graph = Graph::new();

        for line in lines {
            let stations = &line.stations;
            let len = stations.len();

            for (idx, station) in stations.iter().enumerate() {
                if idx > 0 {
                    graph.push_neighbor(station, &stations[idx - 1]);
                }
                if self.mode.links_forward(idx, len) {
                    graph.push_neighbor(station, &stations[idx + 1]);
                }
            }
        }

        debug!(
            lines = lines.len(),
            stations = graph.station_count(),
            edges = graph.edge_count(),
            mode = %self.mode,
            "Built station graph"
        );

        graph
    }
}

/// Build a graph with the default (literal) adjacency rule.
pub fn build_graph(lines: &[Line]) -> Graph {
    GraphBuilder::new().build(lines)
}

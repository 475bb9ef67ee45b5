//! Askama templates for the web frontend.

use std::collections::BTreeSet;

use askama::Template;

use crate::domain::{Line, Route};
use crate::planner::SearchResult;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: the interleaving demo.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub a: String,
    pub b: String,
    pub pata: String,
}

/// Route search page.
#[derive(Template)]
#[template(path = "norikae.html")]
pub struct NorikaeTemplate {
    pub from: String,
    pub to: String,
    /// Every station on the network, for the input suggestions.
    pub stations: Vec<String>,
    pub lines: Vec<LineView>,
    /// Whether a search was run for this request.
    pub searched: bool,
    pub route: Option<RouteView>,
}

impl NorikaeTemplate {
    /// Page showing the network and, if `result` is given, its outcome.
    pub fn new(from: String, to: String, lines: &[Line], result: Option<&SearchResult>) -> Self {
        let stations: BTreeSet<&str> = lines
            .iter()
            .flat_map(|l| l.stations.iter().map(|s| s.as_str()))
            .collect();

        Self {
            from,
            to,
            stations: stations.into_iter().map(str::to_string).collect(),
            lines: lines.iter().map(LineView::from_line).collect(),
            searched: result.is_some(),
            route: result.and_then(|r| r.route.as_ref()).map(RouteView::from_route),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Line view model.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub stations: Vec<String>,
}

impl LineView {
    /// Create from a domain Line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            name: line.name.clone(),
            stations: line.stations.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Stations joined for display, e.g. "渋谷 → 恵比寿 → 目黒".
    pub fn summary(&self) -> String {
        self.stations.join(" → ")
    }
}

/// Found route view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub stations: Vec<String>,
    pub hops: usize,
}

impl RouteView {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            stations: route.stations().iter().map(|s| s.to_string()).collect(),
            hops: route.hops(),
        }
    }
}

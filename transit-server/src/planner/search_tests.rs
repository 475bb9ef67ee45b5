//! Unit tests for the BFS route search.

use super::*;
use crate::domain::{Line, Station};
use crate::graph::{AdjacencyMode, Graph, GraphBuilder, build_graph};

fn st(name: &str) -> Station {
    Station::new(name)
}

fn names(route: &crate::domain::Route) -> Vec<&str> {
    route.stations().iter().map(Station::as_str).collect()
}

/// Build a graph directly from directed edges, bypassing the line rules.
///
/// Each station's neighbors keep the order their edges are listed in.
fn graph_of(edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for (from, to) in edges {
        graph.push_neighbor(&st(from), &st(to));
    }
    graph
}

fn four_station_graph() -> Graph {
    build_graph(&[Line::new("L", ["A", "B", "C", "D"])])
}

#[test]
fn start_equals_end_returns_single_station() {
    let graph = four_station_graph();
    let route = find_route(&graph, "B", "B").unwrap();
    assert_eq!(names(&route), ["B"]);
}

#[test]
fn start_equals_end_even_when_unknown() {
    let graph = Graph::new();
    let route = find_route(&graph, "Nowhere", "Nowhere").unwrap();
    assert_eq!(names(&route), ["Nowhere"]);
}

#[test]
fn empty_graph_distinct_stations_not_found() {
    let graph = Graph::new();
    assert!(find_route(&graph, "A", "B").is_none());
}

#[test]
fn literal_asymmetry_blocks_forward_route() {
    let graph = four_station_graph();
    assert!(find_route(&graph, "A", "D").is_none());
}

#[test]
fn literal_graph_reverse_route() {
    let graph = four_station_graph();
    let route = find_route(&graph, "D", "A").unwrap();
    assert_eq!(names(&route), ["D", "C", "B", "A"]);
}

#[test]
fn symmetric_graph_reaches_last_station() {
    let graph = GraphBuilder::new()
        .with_mode(AdjacencyMode::Symmetric)
        .build(&[Line::new("L", ["A", "B", "C", "D"])]);
    let route = find_route(&graph, "A", "D").unwrap();
    assert_eq!(names(&route), ["A", "B", "C", "D"]);
}

#[test]
fn unknown_start_not_found() {
    let graph = four_station_graph();
    let result = RouteFinder::new(&graph).search(&SearchRequest::new("Z", "A"));

    assert!(!result.is_found());
    assert_eq!(result.routes_explored, 1);
}

#[test]
fn unreachable_end_not_found() {
    let graph = build_graph(&[
        Line::new("East", ["A", "B", "C"]),
        Line::new("West", ["X", "Y", "Z"]),
    ]);
    assert!(find_route(&graph, "A", "Z").is_none());
}

#[test]
fn route_across_lines_via_shared_station() {
    let graph = build_graph(&[
        Line::new("Yamanote", ["Ebisu", "Shibuya", "Harajuku", "Yoyogi"]),
        Line::new("Toyoko", ["Shibuya", "Daikanyama", "Nakameguro", "Yutenji"]),
    ]);

    let route = find_route(&graph, "Ebisu", "Nakameguro").unwrap();
    assert_eq!(names(&route), ["Ebisu", "Shibuya", "Daikanyama", "Nakameguro"]);
}

#[test]
fn shortest_route_preferred_over_longer() {
    // S reaches T directly and via a detour
    let graph = graph_of(&[("S", "P"), ("S", "T"), ("P", "Q"), ("Q", "T")]);
    let route = find_route(&graph, "S", "T").unwrap();
    assert_eq!(names(&route), ["S", "T"]);
}

#[test]
fn tie_broken_by_neighbor_order() {
    let x_first = graph_of(&[("S", "X"), ("S", "Y"), ("X", "T"), ("Y", "T")]);
    let y_first = graph_of(&[("S", "Y"), ("S", "X"), ("X", "T"), ("Y", "T")]);

    assert_eq!(names(&find_route(&x_first, "S", "T").unwrap()), ["S", "X", "T"]);
    assert_eq!(names(&find_route(&y_first, "S", "T").unwrap()), ["S", "Y", "T"]);
}

#[test]
fn tie_broken_by_line_order() {
    let one = Line::new("One", ["S", "X", "T", "End"]);
    let two = Line::new("Two", ["S", "Y", "T", "End"]);

    let graph = build_graph(&[one.clone(), two.clone()]);
    assert_eq!(names(&find_route(&graph, "S", "T").unwrap()), ["S", "X", "T"]);

    let graph = build_graph(&[two, one]);
    assert_eq!(names(&find_route(&graph, "S", "T").unwrap()), ["S", "Y", "T"]);
}

#[test]
fn stations_marked_visited_on_dequeue() {
    // D is queued twice (via B and via C) because neither copy has been
    // dequeued when the second is queued.
    let graph = graph_of(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    let result = RouteFinder::new(&graph).search(&SearchRequest::new("A", "Z"));

    assert!(!result.is_found());
    assert_eq!(result.routes_explored, 5);
}

#[test]
fn duplicate_neighbors_do_not_change_route() {
    let graph = build_graph(&[
        Line::new("L", ["A", "B", "C", "D"]),
        Line::new("L", ["A", "B", "C", "D"]),
    ]);
    let route = find_route(&graph, "D", "A").unwrap();
    assert_eq!(names(&route), ["D", "C", "B", "A"]);
}

#[test]
fn cycles_terminate() {
    let graph = graph_of(&[("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(find_route(&graph, "A", "Z").is_none());
    assert_eq!(names(&find_route(&graph, "B", "A").unwrap()), ["B", "C", "A"]);
}

#[test]
fn search_stops_at_first_arrival() {
    let graph = graph_of(&[("A", "T"), ("A", "B"), ("B", "C")]);
    let result = RouteFinder::new(&graph).search(&SearchRequest::new("A", "T"));

    assert_eq!(names(result.route.as_ref().unwrap()), ["A", "T"]);
    // [A] then [A, T]; [A, B] is still queued
    assert_eq!(result.routes_explored, 2);
}

#[test]
fn finder_is_reusable() {
    let graph = four_station_graph();
    let finder = RouteFinder::new(&graph);

    let first = finder.search(&SearchRequest::new("D", "A"));
    let second = finder.search(&SearchRequest::new("D", "A"));
    assert_eq!(first, second);
}

#[test]
fn empty_station_names_are_ordinary() {
    let graph = build_graph(&[Line::new("odd", ["", " ", "x", "y"])]);
    let route = find_route(&graph, "x", "").unwrap();
    assert_eq!(names(&route), ["x", " ", ""]);
}

#[test]
fn result_serializes_for_api() {
    let graph = four_station_graph();
    let result = RouteFinder::new(&graph).search(&SearchRequest::new("C", "A"));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["route"], serde_json::json!(["C", "B", "A"]));
    assert_eq!(json["routes_explored"], 3);

    let missing = RouteFinder::new(&graph).search(&SearchRequest::new("A", "D"));
    let json = serde_json::to_value(&missing).unwrap();
    assert!(json["route"].is_null());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{HashMap, VecDeque};

    const STATIONS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

    /// Random directed graphs over A-F; G never has an entry.
    fn graphs() -> impl Strategy<Value = Graph> {
        prop::collection::vec((0..6usize, 0..6usize), 0..20).prop_map(|edges| {
            let mut graph = Graph::new();
            for (from, to) in edges {
                graph.push_neighbor(&st(STATIONS[from]), &st(STATIONS[to]));
            }
            graph
        })
    }

    fn station() -> impl Strategy<Value = &'static str> {
        (0..STATIONS.len()).prop_map(|i| STATIONS[i])
    }

    /// Hop distances from `start`, computed with a plain BFS.
    fn distances(graph: &Graph, start: &str) -> HashMap<String, usize> {
        let mut dist = HashMap::new();
        dist.insert(start.to_string(), 0);
        let mut queue = VecDeque::from([start.to_string()]);

        while let Some(current) = queue.pop_front() {
            let d = dist[&current];
            for next in graph.neighbors(&current).unwrap_or(&[]) {
                if !dist.contains_key(next.as_str()) {
                    dist.insert(next.as_str().to_string(), d + 1);
                    queue.push_back(next.as_str().to_string());
                }
            }
        }
        dist
    }

    proptest! {
        /// A station always reaches itself with a one-station route
        #[test]
        fn self_route(graph in graphs(), s in station()) {
            let route = find_route(&graph, s, s).unwrap();
            prop_assert_eq!(names(&route), vec![s]);
        }

        /// Consecutive stations on a returned route are adjacent
        #[test]
        fn routes_follow_edges(graph in graphs(), from in station(), to in station()) {
            if let Some(route) = find_route(&graph, from, to) {
                prop_assert_eq!(route.start().as_str(), from);
                prop_assert_eq!(route.end().as_str(), to);
                for pair in route.stations().windows(2) {
                    prop_assert!(graph.has_edge(pair[0].as_str(), pair[1].as_str()));
                }
            }
        }

        /// A route is found exactly when one exists, and it is minimal
        #[test]
        fn routes_are_shortest(graph in graphs(), from in station(), to in station()) {
            let dist = distances(&graph, from);
            match (find_route(&graph, from, to), dist.get(to)) {
                (Some(route), Some(d)) => prop_assert_eq!(route.hops(), *d),
                (None, None) => {}
                (found, expected) => prop_assert!(
                    false,
                    "found {:?} but expected distance {:?}",
                    found,
                    expected
                ),
            }
        }
    }
}

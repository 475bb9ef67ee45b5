//! Route type.

use serde::Serialize;

use super::{DomainError, Station};

/// A discovered path from a start station to an end station, inclusive.
///
/// A route always holds at least one station; "no route" is represented by
/// the absence of a `Route` (see [`crate::planner::SearchResult`]), never by
/// an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<Station>);

impl Route {
    /// Create a route from its stations.
    ///
    /// Fails if `stations` is empty.
    pub fn new(stations: Vec<Station>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        Ok(Self(stations))
    }

    /// Create a route from stations the caller knows to be non-empty.
    pub(crate) fn from_nonempty(stations: Vec<Station>) -> Self {
        debug_assert!(!stations.is_empty());
        Self(stations)
    }

    /// The stations, start first.
    pub fn stations(&self) -> &[Station] {
        &self.0
    }

    /// The first station.
    pub fn start(&self) -> &Station {
        &self.0[0]
    }

    /// The last station.
    pub fn end(&self) -> &Station {
        &self.0[self.0.len() - 1]
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    /// Consume the route, returning its stations.
    pub fn into_stations(self) -> Vec<Station> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations(names: &[&str]) -> Vec<Station> {
        names.iter().map(|n| Station::new(*n)).collect()
    }

    #[test]
    fn empty_route_rejected() {
        assert!(matches!(Route::new(vec![]), Err(DomainError::EmptyRoute)));
    }

    #[test]
    fn single_station_route() {
        let route = Route::new(stations(&["Shibuya"])).unwrap();
        assert_eq!(route.hops(), 0);
        assert_eq!(route.start(), route.end());
    }

    #[test]
    fn endpoints_and_hops() {
        let route = Route::new(stations(&["D", "C", "B", "A"])).unwrap();
        assert_eq!(route.start().as_str(), "D");
        assert_eq!(route.end().as_str(), "A");
        assert_eq!(route.hops(), 3);
        assert_eq!(route.into_stations().len(), 4);
    }

    #[test]
    fn serializes_as_list() {
        let route = Route::new(stations(&["Ueno", "Okachimachi"])).unwrap();
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"["Ueno","Okachimachi"]"#);
    }
}

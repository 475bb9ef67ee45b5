//! Transit line type.

use serde::{Deserialize, Serialize};

use super::Station;

/// A named line: stations in the order a train visits them.
///
/// The wire form matches the upstream network feed, which capitalises its
/// field names:
///
/// ```json
/// { "Name": "山手線", "Stations": ["渋谷", "恵比寿", "目黒"] }
/// ```
///
/// Nothing is validated. Empty lines, single-station lines and repeated
/// stations are all accepted and simply contribute fewer (or odd) edges
/// when the graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Line {
    /// Line name, for display only.
    pub name: String,

    /// Stations in running order.
    #[serde(default)]
    pub stations: Vec<Station>,
}

impl Line {
    /// Create a line from a name and station names.
    pub fn new<I, S>(name: impl Into<String>, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Station>,
    {
        Self {
            name: name.into(),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of stations on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the line has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_feed_format() {
        let json = r#"[
            {"Name": "Yamanote", "Stations": ["Shibuya", "Ebisu", "Meguro"]},
            {"Name": "Empty", "Stations": []}
        ]"#;

        let lines: Vec<Line> = serde_json::from_str(json).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Yamanote");
        assert_eq!(
            lines[0].stations,
            vec![
                Station::new("Shibuya"),
                Station::new("Ebisu"),
                Station::new("Meguro")
            ]
        );
        assert!(lines[1].is_empty());
    }

    #[test]
    fn missing_stations_field_is_empty() {
        let line: Line = serde_json::from_str(r#"{"Name": "Ghost"}"#).unwrap();
        assert_eq!(line.len(), 0);
    }

    #[test]
    fn serializes_with_feed_field_names() {
        let line = Line::new("Tokyu Toyoko", ["Shibuya", "Daikanyama"]);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["Name"], "Tokyu Toyoko");
        assert_eq!(json["Stations"][1], "Daikanyama");
    }
}

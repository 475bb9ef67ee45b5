//! Station name type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A station, identified only by its name.
///
/// Names are opaque: no trimming, case folding or validation is applied, so
/// two stations are the same exactly when their names are byte-for-byte
/// equal. An empty name is a perfectly good station.
///
/// # Examples
///
/// ```
/// use transit_server::domain::Station;
///
/// let shibuya = Station::new("渋谷");
/// assert_eq!(shibuya.as_str(), "渋谷");
///
/// // No normalisation happens
/// assert_ne!(Station::new("Ebisu"), Station::new("ebisu "));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    /// Create a station from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the station, returning its name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Self(name)
    }
}

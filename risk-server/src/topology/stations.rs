//! Station topology lookup.

use std::collections::HashMap;

use crate::domain::{LineCode, Station};

/// The static station network: each station's line and coordinates.
///
/// Read-only once built. Iteration order is insertion order, which is also
/// the order `stations_on` reports stations for a line (not geographic order).
#[derive(Debug, Clone, Default)]
pub struct StationTopology {
    stations: Vec<Station>,

    /// Map from station name to position in `stations`.
    index: HashMap<String, usize>,
}

impl StationTopology {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a station by exact (case-sensitive) name.
    pub fn lookup(&self, name: &str) -> Option<&Station> {
        self.index.get(name).map(|&i| &self.stations[i])
    }

    /// Check whether a station exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Distinct line codes, in order of first appearance.
    pub fn lines(&self) -> Vec<&LineCode> {
        let mut lines: Vec<&LineCode> = Vec::new();
        for station in &self.stations {
            if !lines.contains(&&station.line) {
                lines.push(&station.line);
            }
        }
        lines
    }

    /// Names of the stations on a line, in insertion order.
    pub fn stations_on(&self, line: &LineCode) -> Vec<&str> {
        self.stations
            .iter()
            .filter(|s| &s.line == line)
            .map(|s| s.name.as_str())
            .collect()
    }

    /// All stations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the topology has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Builder for a [`StationTopology`].
///
/// Stations with an invalid line code are ignored. If a name is added twice
/// the first entry wins.
#[derive(Debug, Default)]
pub struct StationTopologyBuilder {
    inner: StationTopology,
}

impl StationTopologyBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn add(self, name: &str, line: &str, lat: f64, lng: f64) -> Self {
        match LineCode::parse(line) {
            Ok(line) => self.station(Station::new(name, line, lat, lng)),
            Err(_) => self,
        }
    }

    /// Add an already-built station.
    pub fn station(mut self, station: Station) -> Self {
        if !self.inner.index.contains_key(&station.name) {
            self.inner
                .index
                .insert(station.name.clone(), self.inner.stations.len());
            self.inner.stations.push(station);
        }
        self
    }

    /// Build the topology.
    pub fn build(self) -> StationTopology {
        self.inner
    }
}

impl FromIterator<Station> for StationTopology {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StationTopologyBuilder::new(), StationTopologyBuilder::station)
            .build()
    }
}

/// The Toronto subway stations known to the delay model.
pub fn toronto_topology() -> StationTopology {
    StationTopologyBuilder::new()
        // Yonge-University
        .add("UNION STATION", "YU", 43.6452, -79.3806)
        .add("BLOOR-YONGE", "YU", 43.6706, -79.3856)
        .add("ST GEORGE", "YU", 43.6684, -79.3997)
        .add("SPADINA", "YU", 43.6674, -79.4047)
        .add("BAY", "YU", 43.6706, -79.3856)
        .add("SHEPPARD-YONGE", "YU", 43.7615, -79.4110)
        .add("FINCH", "YU", 43.7805, -79.4147)
        .add("DOWNSVIEW", "YU", 43.7225, -79.4778)
        // Bloor-Danforth
        .add("KIPLING", "BD", 43.6372, -79.5356)
        .add("KENNEDY", "BD", 43.7322, -79.2628)
        .add("DON MILLS", "BD", 43.7615, -79.3328)
        // Scarborough RT
        .add("SCARBOROUGH CENTRE", "SRT", 43.7731, -79.2578)
        .build()
}

//! Interchange stations between lines.
//!
//! Two lines are connected by a short, fixed list of transfer stations.
//! Lookups are symmetric: the pair (A, B) and (B, A) name the same entry.

use std::collections::HashMap;

use crate::domain::LineCode;

/// Known transfer stations, keyed by unordered line pair.
#[derive(Debug, Clone, Default)]
pub struct TransferTable {
    /// Keys are stored with the smaller line code first.
    pairs: HashMap<(LineCode, LineCode), Vec<String>>,
}

fn pair_key(a: &LineCode, b: &LineCode) -> (LineCode, LineCode) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

impl TransferTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add transfer stations between two lines.
    ///
    /// Stations are appended to any already listed for the pair; a station
    /// already listed is not repeated. Adding a line paired with itself is a
    /// no-op, since no transfer is needed to stay on one line.
    pub fn add<S: AsRef<str>>(&mut self, a: &LineCode, b: &LineCode, stations: &[S]) {
        if a == b {
            return;
        }
        let entry = self.pairs.entry(pair_key(a, b)).or_default();
        for station in stations {
            let station = station.as_ref();
            if !entry.iter().any(|s| s == station) {
                entry.push(station.to_string());
            }
        }
    }

    /// Transfer stations between two lines, in table order.
    ///
    /// Returns an empty slice when both lines are the same (direct route
    /// only) or when no transfer between the lines is known.
    pub fn find_transfer_stations(&self, a: &LineCode, b: &LineCode) -> &[String] {
        if a == b {
            return &[];
        }
        self.pairs
            .get(&pair_key(a, b))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of line pairs with known transfers.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no transfers are known.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Builder for a [`TransferTable`].
#[derive(Debug, Default)]
pub struct TransferTableBuilder {
    inner: TransferTable,
}

impl TransferTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add transfer stations between two lines. Invalid line codes are ignored.
    pub fn add(mut self, a: &str, b: &str, stations: &[&str]) -> Self {
        if let (Ok(a), Ok(b)) = (LineCode::parse(a), LineCode::parse(b)) {
            self.inner.add(&a, &b, stations);
        }
        self
    }

    /// Build the table.
    pub fn build(self) -> TransferTable {
        self.inner
    }
}

/// Interchanges for the Toronto subway lines in [`super::toronto_topology`].
pub fn toronto_transfers() -> TransferTable {
    TransferTableBuilder::new()
        .add("YU", "BD", &["BLOOR-YONGE", "ST GEORGE", "SPADINA"])
        .add("BD", "SRT", &["KENNEDY"])
        .build()
}

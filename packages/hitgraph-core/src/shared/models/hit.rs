//! Detector hit records and the in-memory hits table.
//!
//! A hit is one measurement in one detector layer: cylindrical coordinates
//! (r, phi, z) plus the event it belongs to and the truth particle barcode
//! that produced it. The hits table spans one or more events and supports the
//! two groupings the graph builder needs: by event, and by layer within an
//! event.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One detector hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Event identifier
    pub evtid: i64,
    /// Detector layer identifier (0 = innermost)
    pub layer: u32,
    /// Cylindrical radius
    pub r: f64,
    /// Azimuthal angle in [-pi, pi]
    pub phi: f64,
    /// Longitudinal coordinate
    pub z: f64,
    /// Truth particle identifier
    pub barcode: i64,
}

/// Ordered collection of hits spanning one or more events.
#[derive(Debug, Clone, Default)]
pub struct HitsTable {
    hits: Vec<Hit>,
}

impl HitsTable {
    /// Create a table from a hit vector, preserving row order.
    pub fn from_hits(hits: Vec<Hit>) -> Self {
        Self { hits }
    }

    /// Number of hits in the table.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the table holds no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// All hits in row order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Distinct event ids, in order of first appearance in the table.
    pub fn event_ids(&self) -> Vec<i64> {
        let mut seen: HashSet<i64> = HashSet::new();
        let mut ids = Vec::new();
        for hit in &self.hits {
            if seen.insert(hit.evtid) {
                ids.push(hit.evtid);
            }
        }
        ids
    }

    /// Group hits by event, in order of first appearance. Row order is
    /// preserved within each event.
    pub fn group_by_event(&self) -> Vec<(i64, Vec<Hit>)> {
        let mut slots: HashMap<i64, usize> = HashMap::new();
        let mut events: Vec<(i64, Vec<Hit>)> = Vec::new();
        for hit in &self.hits {
            let slot = *slots.entry(hit.evtid).or_insert_with(|| {
                events.push((hit.evtid, Vec::new()));
                events.len() - 1
            });
            events[slot].1.push(*hit);
        }
        events
    }

    /// Hits belonging to one event, in row order.
    pub fn event(&self, evtid: i64) -> Vec<Hit> {
        self.hits.iter().copied().filter(|h| h.evtid == evtid).collect()
    }
}

/// Group an event's hits by layer, returning positional indices into the
/// slice. Index order within each layer follows row order.
pub fn group_by_layer(hits: &[Hit]) -> HashMap<u32, Vec<usize>> {
    let mut groups: HashMap<u32, Vec<usize>> = HashMap::new();
    for (idx, hit) in hits.iter().enumerate() {
        groups.entry(hit.layer).or_default().push(idx);
    }
    groups
}

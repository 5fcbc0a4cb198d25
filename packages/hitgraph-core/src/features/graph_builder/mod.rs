//! Per-event hit-graph construction.
//!
//! Turns one event's hits into a [`SparseGraph`]:
//!
//! 1. Select segments across the configured layer pairs
//! 2. Scale node features: (r, phi, z) / [`FEATURE_SCALE`]
//! 3. Fill the incidence coordinates: edges point out of their starting hit
//!    (`ro`) and into their ending hit (`ri`)
//! 4. Label each edge 1.0 when both hits carry the same truth barcode
//!
//! Every hit of the event becomes a node, including hits on layers that no
//! configured pair touches. An event with no surviving segments still yields
//! a valid zero-edge graph.

use ndarray::Array2;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::GraphBuilderConfig;
use crate::errors::{HitGraphError, Result};
use crate::features::segments::SegmentSelector;
use crate::shared::models::{Hit, HitsTable, SparseGraph, FEATURE_SCALE};

/// Builds one hit graph per event from a hits table.
pub struct GraphBuilder {
    config: GraphBuilderConfig,
    selector: SegmentSelector,
}

impl GraphBuilder {
    /// Create a builder from construction settings, validating them first.
    pub fn new(config: &GraphBuilderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            selector: SegmentSelector::new(config),
        })
    }

    /// Construct the graph for a single event.
    ///
    /// All hits must carry the same event id; positional order of the slice
    /// defines the node order of the graph.
    pub fn build_event(&self, hits: &[Hit]) -> Result<SparseGraph> {
        let evtid = match hits.first() {
            Some(hit) => hit.evtid,
            None => {
                return Err(HitGraphError::construction(
                    "cannot build a graph from an empty event",
                ))
            }
        };
        if let Some(stray) = hits.iter().find(|h| h.evtid != evtid) {
            return Err(HitGraphError::construction(format!(
                "mixed event ids in one event: {} and {}",
                evtid, stray.evtid
            )));
        }

        let segments = self.selector.select_event_segments(hits);
        let n_hits = hits.len();
        let n_edges = segments.len();

        // Scaled node features
        let mut x = Array2::<f32>::zeros((n_hits, 3));
        for (row, hit) in hits.iter().enumerate() {
            x[[row, 0]] = (hit.r / FEATURE_SCALE[0]) as f32;
            x[[row, 1]] = (hit.phi / FEATURE_SCALE[1]) as f32;
            x[[row, 2]] = (hit.z / FEATURE_SCALE[2]) as f32;
        }

        // Incidence coordinates, one entry per edge: ri maps hits onto their
        // incoming edges (segment endings), ro onto outgoing (beginnings).
        let mut ri_rows = Vec::with_capacity(n_edges);
        let mut ro_rows = Vec::with_capacity(n_edges);
        let mut y = Vec::with_capacity(n_edges);
        for segment in &segments {
            ri_rows.push(segment.end as u32);
            ro_rows.push(segment.start as u32);
            let same_particle = hits[segment.start].barcode == hits[segment.end].barcode;
            y.push(if same_particle { 1.0 } else { 0.0 });
        }
        let edge_cols: Vec<u32> = (0..n_edges as u32).collect();

        debug!(
            evtid,
            n_hits,
            n_edges,
            "constructed event graph"
        );

        Ok(SparseGraph {
            x,
            ri_rows,
            ri_cols: edge_cols.clone(),
            ro_rows,
            ro_cols: edge_cols,
            y,
        })
    }

    /// Construct graphs for every event in the table, in order of first
    /// appearance, capped at `max_events` when configured.
    ///
    /// Returns `(evtid, graph)` pairs; event order is preserved in the
    /// output even though events are built in parallel.
    pub fn build_all(&self, hits: &HitsTable) -> Result<Vec<(i64, SparseGraph)>> {
        let mut events = hits.group_by_event();
        if let Some(max_events) = self.config.max_events {
            events.truncate(max_events);
        }

        let graphs: Result<Vec<(i64, SparseGraph)>> = events
            .par_iter()
            .map(|(evtid, event_hits)| Ok((*evtid, self.build_event(event_hits)?)))
            .collect();
        let graphs = graphs?;

        let total_edges: usize = graphs.iter().map(|(_, g)| g.n_edges()).sum();
        info!(
            n_events = graphs.len(),
            total_edges,
            "constructed hit graphs"
        );
        Ok(graphs)
    }
}

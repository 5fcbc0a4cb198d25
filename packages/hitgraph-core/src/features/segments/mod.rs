//! Segment selection.
//!
//! A segment is a candidate edge joining two hits on a configured layer
//! pair. The selector enumerates all pairs between the two layers of one
//! event and keeps the geometrically compatible ones:
//!
//! - `|phi_slope| < phi_slope_max`
//! - `|z0| < z0_max` (inner or outer cut, by layer pair)
//!
//! Both comparisons are strict, so non-finite values from same-radius pairs
//! never pass.

use tracing::debug;

use crate::config::GraphBuilderConfig;
use crate::geometry::{phi_slope, z0};
use crate::shared::models::{group_by_layer, Hit};

/// Candidate edge between two hits, as positional indices into the event's
/// hit slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Index of the hit the segment starts from (inner layer)
    pub start: usize,
    /// Index of the hit the segment ends at (outer layer)
    pub end: usize,
}

/// Applies the geometric selection cuts to layer-pair hit combinations.
pub struct SegmentSelector {
    config: GraphBuilderConfig,
}

impl SegmentSelector {
    /// Create a selector from validated construction settings.
    pub fn new(config: &GraphBuilderConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Select segments between two hit subsets of the same event.
    ///
    /// `idx1` and `idx2` are positional indices into `hits`; every
    /// `(idx1, idx2)` combination is tested against the cuts.
    pub fn select_segments(
        &self,
        hits: &[Hit],
        idx1: &[usize],
        idx2: &[usize],
        z0_max: f64,
    ) -> Vec<Segment> {
        let mut segments = Vec::new();
        for &start in idx1 {
            let h1 = &hits[start];
            for &end in idx2 {
                let h2 = &hits[end];
                if phi_slope(h1, h2).abs() < self.config.phi_slope_max
                    && z0(h1, h2).abs() < z0_max
                {
                    segments.push(Segment { start, end });
                }
            }
        }
        segments
    }

    /// Select all segments for one event across the configured layer pairs.
    ///
    /// Layer pairs with no hits on either layer are skipped. Results are
    /// concatenated in layer-pair order.
    pub fn select_event_segments(&self, hits: &[Hit]) -> Vec<Segment> {
        let layer_groups = group_by_layer(hits);
        let mut segments = Vec::new();
        for &(layer1, layer2) in &self.config.layer_pairs {
            let (idx1, idx2) = match (layer_groups.get(&layer1), layer_groups.get(&layer2)) {
                (Some(idx1), Some(idx2)) => (idx1, idx2),
                _ => {
                    debug!("skipping layer pair ({layer1}, {layer2}): empty layer");
                    continue;
                }
            };
            let z0_max = self.config.z0_max_for(layer1, layer2);
            segments.extend(self.select_segments(hits, idx1, idx2, z0_max));
        }
        segments
    }
}

//! Graph construction configuration.
//!
//! Serde-backed settings with preset defaults, YAML loading, and a
//! validation pass that rejects unusable cuts before any event is touched.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{HitGraphError, Result};

/// Layer id at and above which the looser z0 cut applies.
const DEFAULT_OUTER_LAYER_START: u32 = 8;

/// Settings for per-event hit-graph construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphBuilderConfig {
    /// Adjacent layer pairings considered for segments
    pub layer_pairs: Vec<(u32, u32)>,

    /// Upper bound on |dphi / dr| for a candidate segment
    pub phi_slope_max: f64,

    /// Upper bound on |z0| when both layers are inner layers
    pub z0_max_inner: f64,

    /// Upper bound on |z0| when either layer is an outer layer
    pub z0_max_outer: f64,

    /// First layer id treated as "outer" for the z0 cut
    pub outer_layer_start: u32,

    /// Optional cap on the number of events to build
    pub max_events: Option<usize>,
}

impl Default for GraphBuilderConfig {
    fn default() -> Self {
        Self {
            // Ten consecutive barrel pairings (0,1) .. (9,10)
            layer_pairs: (0..10).map(|l| (l, l + 1)).collect(),
            phi_slope_max: 6e-4,
            z0_max_inner: 150.0,
            z0_max_outer: 300.0,
            outer_layer_start: DEFAULT_OUTER_LAYER_START,
            max_events: None,
        }
    }
}

impl GraphBuilderConfig {
    /// Load a config from a YAML file and validate it.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    /// Parse a config from a YAML string and validate it.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|e| HitGraphError::config(format!("invalid YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every cut is usable.
    ///
    /// Cuts must be finite and positive; a non-positive or NaN cut would
    /// silently reject every segment. Layer pairs must join two distinct
    /// layers.
    pub fn validate(&self) -> Result<()> {
        if self.layer_pairs.is_empty() {
            return Err(HitGraphError::config("layer_pairs must not be empty"));
        }
        for &(l1, l2) in &self.layer_pairs {
            if l1 == l2 {
                return Err(HitGraphError::config(format!(
                    "layer pair ({l1}, {l2}) joins a layer to itself"
                )));
            }
        }
        for (name, value) in [
            ("phi_slope_max", self.phi_slope_max),
            ("z0_max_inner", self.z0_max_inner),
            ("z0_max_outer", self.z0_max_outer),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(HitGraphError::config(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if let Some(0) = self.max_events {
            return Err(HitGraphError::config("max_events must be at least 1"));
        }
        Ok(())
    }

    /// The z0 cut for a given layer pair: the looser outer cut when either
    /// layer is at or beyond `outer_layer_start`.
    pub fn z0_max_for(&self, layer1: u32, layer2: u32) -> f64 {
        if layer1 >= self.outer_layer_start || layer2 >= self.outer_layer_start {
            self.z0_max_outer
        } else {
            self.z0_max_inner
        }
    }
}

//! Shared test fixtures: deterministic synthetic events.
//!
//! Tracks are straight lines from near the beamline, z = slope * r + z_intercept,
//! with a gentle azimuthal drift well inside the default phi-slope cut. One
//! hit per layer on the ten-plus-one barrel layers at radii 32 + 40 * layer.

use hitgraph_core::Hit;

/// Barrel layer radii used by the fixtures.
pub fn layer_radius(layer: u32) -> f64 {
    32.0 + 40.0 * layer as f64
}

/// Parameters of one synthetic straight-line track.
#[derive(Debug, Clone, Copy)]
pub struct Track {
    pub barcode: i64,
    pub phi0: f64,
    /// Azimuthal drift per unit radius; keep well below the selection cut
    pub phi_drift: f64,
    pub z_slope: f64,
    pub z_intercept: f64,
}

/// Hits of one track across layers `0..n_layers`, in layer order.
pub fn track_hits(evtid: i64, track: &Track, n_layers: u32) -> Vec<Hit> {
    (0..n_layers)
        .map(|layer| {
            let r = layer_radius(layer);
            Hit {
                evtid,
                layer,
                r,
                phi: track.phi0 + track.phi_drift * r,
                z: track.z_slope * r + track.z_intercept,
                barcode: track.barcode,
            }
        })
        .collect()
}

/// A small event with `n_tracks` well-separated tracks on all eleven layers.
pub fn synthetic_event(evtid: i64, n_tracks: usize) -> Vec<Hit> {
    let mut hits = Vec::new();
    for t in 0..n_tracks {
        let track = Track {
            barcode: 100 + t as i64,
            // Spread tracks around the cylinder so they never get close
            phi0: -3.0 + 6.0 * (t as f64 + 0.5) / n_tracks as f64,
            phi_drift: 1e-4 * (t as f64 % 3.0 - 1.0),
            z_slope: -0.3 + 0.6 * (t as f64 + 0.5) / n_tracks as f64,
            z_intercept: 10.0 * (t as f64 % 5.0 - 2.0),
        };
        hits.extend(track_hits(evtid, &track, 11));
    }
    hits
}

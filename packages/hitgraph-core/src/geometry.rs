//! Pairwise geometric compatibility kernels.
//!
//! A candidate segment between two hits is characterized by two quantities:
//!
//! ```text
//! phi_slope = dphi / dr              (azimuthal bend per unit radius)
//! z0        = z1 - r1 * dz / dr     (straight-line extrapolation to r = 0)
//! ```
//!
//! Real tracks from the beamline have small |phi_slope| and |z0|, so both
//! serve as selection cuts. When `dr == 0` the division produces an infinity
//! (or NaN when the numerator is also zero); the strict `<` comparisons in
//! the selector reject such pairs without any special casing.

use std::f64::consts::PI;

use crate::shared::models::Hit;

/// Compute `phi2 - phi1` wrapped into `[-pi, pi]`.
///
/// Both inputs are assumed to lie in `[-pi, pi]`, so a single wrap step is
/// enough to take the short way around the cylinder.
pub fn calc_dphi(phi1: f64, phi2: f64) -> f64 {
    let dphi = phi2 - phi1;
    if dphi > PI {
        dphi - 2.0 * PI
    } else if dphi < -PI {
        dphi + 2.0 * PI
    } else {
        dphi
    }
}

/// Azimuthal slope of the segment from `h1` to `h2`.
///
/// Non-finite when the two hits share a radius.
pub fn phi_slope(h1: &Hit, h2: &Hit) -> f64 {
    calc_dphi(h1.phi, h2.phi) / (h2.r - h1.r)
}

/// Longitudinal intercept of the segment from `h1` to `h2`, extrapolated to
/// `r = 0`.
///
/// Non-finite when the two hits share a radius.
pub fn z0(h1: &Hit, h2: &Hit) -> f64 {
    let dz = h2.z - h1.z;
    let dr = h2.r - h1.r;
    h1.z - h1.r * dz / dr
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(r: f64, phi: f64, z: f64) -> Hit {
        Hit {
            evtid: 0,
            layer: 0,
            r,
            phi,
            z,
            barcode: 0,
        }
    }

    #[test]
    fn dphi_wraps_across_pi() {
        let d = calc_dphi(3.0, -3.0);
        assert!((d - (2.0 * PI - 6.0)).abs() < 1e-12);
        let d = calc_dphi(-3.0, 3.0);
        assert!((d + (2.0 * PI - 6.0)).abs() < 1e-12);
    }

    #[test]
    fn dphi_plain_difference_inside_range() {
        assert!((calc_dphi(0.25, 0.75) - 0.5).abs() < 1e-12);
        assert!((calc_dphi(0.75, 0.25) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn z0_extrapolates_through_origin_track() {
        // A straight track through (0, 0): z = 2r, so z0 = 0.
        let h1 = hit(30.0, 0.0, 60.0);
        let h2 = hit(70.0, 0.0, 140.0);
        assert!(z0(&h1, &h2).abs() < 1e-9);
    }

    #[test]
    fn z0_recovers_displaced_intercept() {
        // z = 0.5 r + 10
        let h1 = hit(40.0, 0.0, 30.0);
        let h2 = hit(100.0, 0.0, 60.0);
        assert!((z0(&h1, &h2) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn same_radius_pair_is_non_finite() {
        let h1 = hit(50.0, 0.1, 10.0);
        let h2 = hit(50.0, 0.2, 20.0);
        assert!(!phi_slope(&h1, &h2).is_finite());
        assert!(!z0(&h1, &h2).is_finite());
        // Fully degenerate pair: NaN, still rejected by a strict `<` cut.
        let h3 = hit(50.0, 0.1, 10.0);
        assert!(phi_slope(&h1, &h3).is_nan());
    }
}

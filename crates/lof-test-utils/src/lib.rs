//! Test utilities for lof development.
//!
//! Provides standard particle arrangements ([`fixtures`]) and polyline
//! assertions shared by the unit, integration and benchmark suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{charge_pair, dipole, ring_of_sources, scatter, single_source};

use glam::DVec2;

/// Total length of a polyline.
pub fn polyline_length(vertices: &[DVec2]) -> f64 {
    vertices.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Assert that `vertices` is non-empty and its last point lies within
/// `radius` of `target`.
///
/// # Panics
///
/// Panics with a descriptive message otherwise.
pub fn assert_ends_near(vertices: &[DVec2], target: DVec2, radius: f64) {
    let last = match vertices.last() {
        Some(v) => *v,
        None => panic!("expected a line ending near {target}, got no vertices"),
    };
    let d = last.distance(target);
    assert!(
        d <= radius,
        "line ends at {last}, {d} from {target} (allowed {radius})"
    );
}

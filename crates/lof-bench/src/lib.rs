//! Benchmark profiles for the lof field-line tracer.
//!
//! - [`reference_scene`]: a source, a weaker sink and a second source
//! - [`stress_scene`]: many scattered charges with a positive net charge
//! - [`neutral_dipole`]: a dipole traced under the extended step budget

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use glam::DVec2;
use lof_core::Particle;
use lof_test_utils::{dipole, scatter};

/// Three charges with net `q = +1.5`, so tracing uses the normal budget.
pub fn reference_scene() -> Vec<Particle> {
    vec![
        Particle::new(0.0, 0.0, 1.0),
        Particle::new(0.08, 0.02, -0.5),
        Particle::new(-0.05, 0.06, 1.0),
    ]
}

/// `count` scattered unit charges plus one `q = +2` anchor at the origin.
///
/// The scattered set alternates sign, so the anchor keeps the net charge
/// positive and the budget normal.
pub fn stress_scene(count: usize, seed: u64) -> Vec<Particle> {
    let mut particles = scatter(count, 0.4, seed);
    particles.push(Particle {
        position: DVec2::ZERO,
        q: 2.0,
    });
    particles
}

/// A unit dipole with the given separation. Net charge is zero.
pub fn neutral_dipole(separation: f64) -> Vec<Particle> {
    dipole(separation)
}

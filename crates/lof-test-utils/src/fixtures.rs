//! Reusable particle arrangements.
//!
//! - [`single_source`]: one unit source at the origin.
//! - [`dipole`]: unit source at the origin, unit sink on the +x axis.
//! - [`charge_pair`]: two charges on the x axis.
//! - [`ring_of_sources`]: sources evenly spaced on a circle.
//! - [`scatter`]: deterministic pseudo-random particles.

use std::f64::consts::TAU;

use glam::DVec2;
use lof_core::Particle;

/// One `q = +1` source at the origin.
pub fn single_source() -> Vec<Particle> {
    vec![Particle::new(0.0, 0.0, 1.0)]
}

/// A `q = +1` source at the origin and a `q = -1` sink at `(separation, 0)`.
pub fn dipole(separation: f64) -> Vec<Particle> {
    vec![
        Particle::new(0.0, 0.0, 1.0),
        Particle::new(separation, 0.0, -1.0),
    ]
}

/// Charge `q0` at the origin and `q1` at `(separation, 0)`.
pub fn charge_pair(q0: f64, q1: f64, separation: f64) -> Vec<Particle> {
    vec![Particle::new(0.0, 0.0, q0), Particle::new(separation, 0.0, q1)]
}

/// `count` sources of charge `q` evenly spaced on a circle of `radius`.
pub fn ring_of_sources(count: usize, radius: f64, q: f64) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            Particle {
                position: DVec2::new(angle.cos(), angle.sin()) * radius,
                q,
            }
        })
        .collect()
}

/// `count` particles in `[-extent, extent]²` with charges `±1`,
/// deterministic in `seed`.
///
/// Positions come from a 64-bit LCG; the sign alternates so the set is
/// roughly neutral.
pub fn scatter(count: usize, extent: f64, seed: u64) -> Vec<Particle> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Top 53 bits → [0, 1).
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..count)
        .map(|i| {
            let x = (next() * 2.0 - 1.0) * extent;
            let y = (next() * 2.0 - 1.0) * extent;
            let q = if i % 2 == 0 { 1.0 } else { -1.0 };
            Particle::new(x, y, q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dipole_is_neutral() {
        let d = dipole(0.05);
        assert_eq!(d.iter().map(|p| p.q).sum::<f64>(), 0.0);
        assert_eq!(d[1].position, DVec2::new(0.05, 0.0));
    }

    #[test]
    fn ring_sources_sit_on_circle() {
        for p in ring_of_sources(6, 0.2, 1.0) {
            assert!((p.position.length() - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn scatter_is_deterministic_and_bounded() {
        let a = scatter(10, 0.5, 7);
        let b = scatter(10, 0.5, 7);
        assert_eq!(a, b);
        assert_ne!(a, scatter(10, 0.5, 8));
        for p in &a {
            assert!(p.position.x.abs() <= 0.5 && p.position.y.abs() <= 0.5);
            assert!(p.validate().is_ok());
        }
    }
}

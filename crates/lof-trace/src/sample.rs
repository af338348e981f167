//! Superposed field evaluation with sink capture.

use glam::DVec2;
use lof_core::vecmath::point_charge_field;
use lof_core::Particle;

/// Outcome of evaluating the field at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldSample {
    /// The point lies within the capture radius of the sink at this
    /// particle index. No field is reported.
    Captured {
        /// Index of the capturing sink in the particle slice.
        sink: usize,
    },
    /// Summed field of all particles.
    Field(DVec2),
}

/// Evaluate the field at `at`, stopping at the first sink (in particle
/// order) whose centre is within `capture_radius`.
///
/// Sources never capture. A particle coinciding with `at` contributes no
/// field.
pub fn sample_field(particles: &[Particle], at: DVec2, capture_radius: f64) -> FieldSample {
    let mut sum = DVec2::ZERO;
    for (index, p) in particles.iter().enumerate() {
        if p.q < 0.0 && at.distance(p.position) <= capture_radius {
            return FieldSample::Captured { sink: index };
        }
        sum += point_charge_field(p.position, p.q, at);
    }
    FieldSample::Field(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_has_zero_field() {
        assert_eq!(sample_field(&[], DVec2::ONE, 0.01), FieldSample::Field(DVec2::ZERO));
    }

    #[test]
    fn sources_superpose() {
        let particles = [Particle::new(-1.0, 0.0, 1.0), Particle::new(1.0, 0.0, 1.0)];
        // Midpoint: contributions cancel.
        match sample_field(&particles, DVec2::ZERO, 0.01) {
            FieldSample::Field(e) => assert!(e.length() < 1e-15),
            other => panic!("expected field, got {other:?}"),
        }
    }

    #[test]
    fn sink_within_radius_captures() {
        let particles = [Particle::new(0.0, 0.0, 1.0), Particle::new(0.05, 0.0, -1.0)];
        assert_eq!(
            sample_field(&particles, DVec2::new(0.045, 0.0), 0.01),
            FieldSample::Captured { sink: 1 }
        );
    }

    #[test]
    fn source_within_radius_does_not_capture() {
        let particles = [Particle::new(0.0, 0.0, 1.0)];
        assert!(matches!(
            sample_field(&particles, DVec2::new(0.001, 0.0), 0.01),
            FieldSample::Field(_)
        ));
    }

    #[test]
    fn first_sink_in_order_wins() {
        let particles = [
            Particle::new(0.0, 0.0, -1.0),
            Particle::new(0.002, 0.0, -1.0),
        ];
        assert_eq!(
            sample_field(&particles, DVec2::new(0.001, 0.0), 0.01),
            FieldSample::Captured { sink: 0 }
        );
    }

    #[test]
    fn coincident_source_is_skipped() {
        let particles = [Particle::new(0.0, 0.0, 1.0), Particle::new(1.0, 0.0, 2.0)];
        match sample_field(&particles, DVec2::ZERO, 0.01) {
            FieldSample::Field(e) => {
                assert!(e.is_finite());
                assert!((e - DVec2::new(-2.0, 0.0)).length() < 1e-12);
            }
            other => panic!("expected field, got {other:?}"),
        }
    }
}

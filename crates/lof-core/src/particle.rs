//! Point charges and whole-system charge totals.

use glam::DVec2;

use crate::error::ParticleError;

/// Whether a particle emits or absorbs field lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Positive charge: field lines originate here.
    Source,
    /// Negative charge: field lines terminate here.
    Sink,
}

/// A charged point particle.
///
/// Owned by the collaborator that edits the scene; the tracer only reads
/// particles during a recomputation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in world units.
    pub position: DVec2,
    /// Signed charge. Positive is a source, negative a sink.
    pub q: f64,
}

impl Particle {
    /// Create a particle without validation.
    pub fn new(x: f64, y: f64, q: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            q,
        }
    }

    /// Create a particle, rejecting non-finite values and zero charge.
    pub fn try_new(x: f64, y: f64, q: f64) -> Result<Self, ParticleError> {
        let particle = Self::new(x, y, q);
        particle.validate()?;
        Ok(particle)
    }

    /// A unit source (`q = +1`) at `position`.
    pub fn source(position: DVec2) -> Self {
        Self { position, q: 1.0 }
    }

    /// A unit sink (`q = -1`) at `position`.
    pub fn sink(position: DVec2) -> Self {
        Self { position, q: -1.0 }
    }

    /// Check the particle's invariants.
    pub fn validate(&self) -> Result<(), ParticleError> {
        if !self.position.is_finite() {
            return Err(ParticleError::NonFinitePosition {
                x: self.position.x,
                y: self.position.y,
            });
        }
        if !self.q.is_finite() {
            return Err(ParticleError::NonFiniteCharge { q: self.q });
        }
        if self.q == 0.0 {
            return Err(ParticleError::ZeroCharge);
        }
        Ok(())
    }

    /// `Some(polarity)` for a charged particle, `None` for `q == 0`.
    pub fn polarity(&self) -> Option<Polarity> {
        if self.q > 0.0 {
            Some(Polarity::Source)
        } else if self.q < 0.0 {
            Some(Polarity::Sink)
        } else {
            None
        }
    }

    /// Strictly positive charge.
    pub fn is_source(&self) -> bool {
        self.q > 0.0
    }

    /// Strictly negative charge.
    pub fn is_sink(&self) -> bool {
        self.q < 0.0
    }
}

/// Charge totals over a particle set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChargeSummary {
    /// Sum of all strictly positive charges. Zero when there are no sources.
    pub positive_sum: f64,
    /// Sum of all charges, signed.
    pub net: f64,
    /// Number of particles with `q > 0`.
    pub source_count: usize,
    /// Number of particles with `q < 0`.
    pub sink_count: usize,
}

impl ChargeSummary {
    /// Accumulate totals over `particles` in slice order.
    pub fn of(particles: &[Particle]) -> Self {
        let mut summary = Self::default();
        for p in particles {
            summary.net += p.q;
            if p.q > 0.0 {
                summary.positive_sum += p.q;
                summary.source_count += 1;
            } else if p.q < 0.0 {
                summary.sink_count += 1;
            }
        }
        summary
    }

    /// Whether at least one source is present.
    pub fn has_sources(&self) -> bool {
        self.source_count > 0 && self.positive_sum > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_zero_and_non_finite() {
        assert_eq!(Particle::try_new(0.0, 0.0, 0.0), Err(ParticleError::ZeroCharge));
        assert!(matches!(
            Particle::try_new(f64::NAN, 0.0, 1.0),
            Err(ParticleError::NonFinitePosition { .. })
        ));
        assert!(matches!(
            Particle::try_new(0.0, 0.0, f64::NEG_INFINITY),
            Err(ParticleError::NonFiniteCharge { .. })
        ));
        assert!(Particle::try_new(0.1, -0.2, -2.5).is_ok());
    }

    #[test]
    fn polarity_follows_sign() {
        assert_eq!(Particle::source(DVec2::ZERO).polarity(), Some(Polarity::Source));
        assert_eq!(Particle::sink(DVec2::ZERO).polarity(), Some(Polarity::Sink));
        assert_eq!(Particle::new(0.0, 0.0, 0.0).polarity(), None);
    }

    #[test]
    fn summary_separates_positive_sum_from_net() {
        let particles = [
            Particle::new(0.0, 0.0, 2.0),
            Particle::new(1.0, 0.0, 1.0),
            Particle::new(0.0, 1.0, -4.0),
        ];
        let s = ChargeSummary::of(&particles);
        assert_eq!(s.positive_sum, 3.0);
        assert_eq!(s.net, -1.0);
        assert_eq!(s.source_count, 2);
        assert_eq!(s.sink_count, 1);
        assert!(s.has_sources());
    }

    #[test]
    fn summary_of_sinks_only_has_no_sources() {
        let s = ChargeSummary::of(&[Particle::sink(DVec2::ZERO)]);
        assert_eq!(s.positive_sum, 0.0);
        assert!(!s.has_sources());
        assert!(!ChargeSummary::of(&[]).has_sources());
    }
}

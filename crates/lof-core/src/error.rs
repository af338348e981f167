//! Particle validation errors.

use std::error::Error;
use std::fmt;

/// Reasons a particle cannot take part in field-line tracing.
///
/// The tracer itself never fails; particles are checked once, where the
/// collaborator hands them over (see [`Particle::try_new`](crate::Particle::try_new)).
#[derive(Clone, Debug, PartialEq)]
pub enum ParticleError {
    /// A position coordinate is NaN or infinite.
    NonFinitePosition {
        /// The offending x coordinate.
        x: f64,
        /// The offending y coordinate.
        y: f64,
    },
    /// The charge is NaN or infinite.
    NonFiniteCharge {
        /// The offending charge.
        q: f64,
    },
    /// The charge is exactly zero. A particle must be a source or a sink.
    ZeroCharge,
}

impl fmt::Display for ParticleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePosition { x, y } => {
                write!(f, "particle position ({x}, {y}) is not finite")
            }
            Self::NonFiniteCharge { q } => write!(f, "particle charge {q} is not finite"),
            Self::ZeroCharge => write!(f, "particle charge must be nonzero"),
        }
    }
}

impl Error for ParticleError {}

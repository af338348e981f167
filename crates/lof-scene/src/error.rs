//! Scene error types.

use std::error::Error;
use std::fmt;

use lof_core::ParticleError;
use lof_trace::ConfigError;

/// Errors from [`Scene`](crate::Scene) operations.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    /// The particle failed validation.
    InvalidParticle(ParticleError),
    /// No particle at the given index.
    ParticleOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of particles in the scene.
        len: usize,
    },
    /// The tracing configuration is invalid.
    Config(ConfigError),
    /// Pick radius must be finite and non-negative.
    InvalidPickRadius {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParticle(e) => write!(f, "invalid particle: {e}"),
            Self::ParticleOutOfRange { index, len } => {
                write!(f, "particle index {index} out of range for {len} particles")
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::InvalidPickRadius { value } => {
                write!(f, "pick radius must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidParticle(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::ParticleOutOfRange { .. } | Self::InvalidPickRadius { .. } => None,
        }
    }
}

impl From<ParticleError> for SceneError {
    fn from(e: ParticleError) -> Self {
        Self::InvalidParticle(e)
    }
}

impl From<ConfigError> for SceneError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

//! Tracing tunables and their validation.
//!
//! [`TraceConfig`] carries every constant the allocator and tracer use.
//! [`validate()`](TraceConfig::validate) checks the structural invariants
//! once, when the [`FieldTracer`](crate::FieldTracer) is constructed; the
//! tracing pass itself assumes a valid config and never fails.

use std::error::Error;
use std::fmt;

// ── TraceConfig ────────────────────────────────────────────────────

/// Tunables for line allocation and integration.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceConfig {
    /// Number of lines a lone source receives. Lines are apportioned to
    /// sources by their share of the total positive charge. Default: 50.
    pub preferred_line_count: u32,
    /// Vertex ceiling per line when the net charge is positive. Default: 100.
    pub normal_max_segments: u32,
    /// Vertex ceiling per line when the net charge is zero or negative.
    /// Default: 100_000.
    pub extended_max_segments: u32,
    /// Source/sink interaction radius in world units. A line entering this
    /// radius around a sink terminates. Default: 0.010.
    pub charge_radius: f64,
    /// Length of one integration micro-step in world units. Default: 0.0002.
    pub line_piece_length: f64,
    /// Micro-steps per recorded vertex. Default: 10.
    pub substeps_per_vertex: u32,
}

impl TraceConfig {
    /// Default preferred line count.
    pub const DEFAULT_PREFERRED_LINE_COUNT: u32 = 50;

    /// Default vertex ceiling under positive net charge.
    pub const DEFAULT_NORMAL_MAX_SEGMENTS: u32 = 100;

    /// Default vertex ceiling under non-positive net charge.
    pub const DEFAULT_EXTENDED_MAX_SEGMENTS: u32 = 100 * 1000;

    /// Default interaction radius.
    pub const DEFAULT_CHARGE_RADIUS: f64 = 0.010;

    /// Default number of micro-steps per vertex.
    pub const DEFAULT_SUBSTEPS_PER_VERTEX: u32 = 10;

    /// Default micro-step length: one vertex spacing of 0.002 split into
    /// [`DEFAULT_SUBSTEPS_PER_VERTEX`](Self::DEFAULT_SUBSTEPS_PER_VERTEX) pieces.
    pub const DEFAULT_LINE_PIECE_LENGTH: f64 = 0.002 / Self::DEFAULT_SUBSTEPS_PER_VERTEX as f64;

    /// Radius of the circle on which seeds are placed around a source.
    pub fn seed_radius(&self) -> f64 {
        self.charge_radius - self.line_piece_length
    }

    /// Validate all tunables.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.line_piece_length.is_finite() || self.line_piece_length <= 0.0 {
            return Err(ConfigError::InvalidPieceLength {
                value: self.line_piece_length,
            });
        }
        if !self.charge_radius.is_finite() || self.charge_radius <= self.line_piece_length {
            return Err(ConfigError::InvalidChargeRadius {
                value: self.charge_radius,
                piece_length: self.line_piece_length,
            });
        }
        if self.substeps_per_vertex == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }
        if self.normal_max_segments == 0 {
            return Err(ConfigError::ZeroSegmentBudget);
        }
        if self.extended_max_segments < self.normal_max_segments {
            return Err(ConfigError::ExtendedBudgetTooSmall {
                normal: self.normal_max_segments,
                extended: self.extended_max_segments,
            });
        }
        Ok(())
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            preferred_line_count: Self::DEFAULT_PREFERRED_LINE_COUNT,
            normal_max_segments: Self::DEFAULT_NORMAL_MAX_SEGMENTS,
            extended_max_segments: Self::DEFAULT_EXTENDED_MAX_SEGMENTS,
            charge_radius: Self::DEFAULT_CHARGE_RADIUS,
            line_piece_length: Self::DEFAULT_LINE_PIECE_LENGTH,
            substeps_per_vertex: Self::DEFAULT_SUBSTEPS_PER_VERTEX,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`TraceConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `line_piece_length` is NaN, infinite, zero, or negative.
    InvalidPieceLength {
        /// The invalid value.
        value: f64,
    },
    /// `charge_radius` is not finite or does not exceed `line_piece_length`,
    /// leaving no room for the seed circle.
    InvalidChargeRadius {
        /// The invalid radius.
        value: f64,
        /// The configured micro-step length.
        piece_length: f64,
    },
    /// `substeps_per_vertex` is zero.
    ZeroSubsteps,
    /// `normal_max_segments` is zero.
    ZeroSegmentBudget,
    /// `extended_max_segments` is below `normal_max_segments`.
    ExtendedBudgetTooSmall {
        /// The normal budget.
        normal: u32,
        /// The extended budget.
        extended: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPieceLength { value } => {
                write!(f, "line_piece_length must be finite and positive, got {value}")
            }
            Self::InvalidChargeRadius {
                value,
                piece_length,
            } => {
                write!(
                    f,
                    "charge_radius {value} must be finite and exceed line_piece_length {piece_length}"
                )
            }
            Self::ZeroSubsteps => write!(f, "substeps_per_vertex must be at least 1"),
            Self::ZeroSegmentBudget => write!(f, "normal_max_segments must be at least 1"),
            Self::ExtendedBudgetTooSmall { normal, extended } => {
                write!(
                    f,
                    "extended_max_segments {extended} is below normal_max_segments {normal}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

//! Core types for the lof field-line tracer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the point-charge [`Particle`], the [`ChargeSummary`] used for line
//! apportionment, the [`LineId`] index type, particle validation errors,
//! and the small vector-math layer shared by the tracer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod particle;
pub mod vecmath;

pub use error::ParticleError;
pub use id::LineId;
pub use particle::{ChargeSummary, Particle, Polarity};

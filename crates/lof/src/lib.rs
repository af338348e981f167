//! Lof: electric lines of force for systems of 2-D point charges.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the `lof-*` sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use lof::prelude::*;
//!
//! // A source and a weaker sink: net charge is positive, so the normal
//! // step budget applies.
//! let particles = vec![Particle::new(0.0, 0.0, 1.0), Particle::new(0.1, 0.0, -0.5)];
//!
//! let mut tracer = FieldTracer::new(TraceConfig::default()).unwrap();
//! tracer.recompute(&particles);
//!
//! assert_eq!(tracer.line_count(), 50);
//! for line in tracer.lines() {
//!     assert!(line.vertices.len() <= tracer.max_line_segments() as usize);
//! }
//! let first = tracer.vertices_of(LineId(0)).unwrap();
//! assert!(!first.is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lof-core` | Particles, line IDs, vector helpers |
//! | [`trace`] | `lof-trace` | Line allocation, tracing, line storage |
//! | [`scene`] | `lof-scene` | Editable particle scene with drag throttling |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Particles, IDs and field math (`lof-core`).
pub use lof_core as types;

/// Field-line allocation and tracing (`lof-trace`).
///
/// [`trace::FieldTracer`] is the entry point; [`trace::trace_line`] traces
/// a single line without storage.
pub use lof_trace as trace;

/// Interactive scene (`lof-scene`).
///
/// [`scene::Scene`] keeps its lines current across edits and drags.
pub use lof_scene as scene;

/// Common imports for typical usage.
///
/// ```rust
/// use lof::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lof_core::{ChargeSummary, LineId, Particle, ParticleError, Polarity};

    // Tracing
    pub use lof_trace::{
        ConfigError, FieldLine, FieldTracer, StepBudget, Termination, TraceConfig, TraceMetrics,
    };

    // Scene
    pub use lof_scene::{Scene, SceneConfig, SceneError};
}

//! Field-line allocation and tracing for systems of point charges.
//!
//! # Pipeline
//!
//! ```text
//! FieldTracer::recompute(particles)
//! ├── LineStorage::clear           (release the previous pass)
//! ├── recompute_layout             (lines per source, step budget)
//! └── for each source, each seed:
//!     └── LineTracer::trace        (fixed-step integration → LineStorage)
//! ```
//!
//! Everything is recomputed from scratch on every call. The produced
//! polylines are read back with [`FieldTracer::vertices_of`] and friends
//! and remain valid until the next `recompute`.
//!
//! # Step budget
//!
//! When the net charge of the system is zero or negative, lines are given
//! the extended budget ([`TraceConfig::extended_max_segments`]) because
//! there may be no sink to terminate them early.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod field_tracer;
pub mod layout;
pub mod metrics;
pub mod sample;
pub mod seed;
pub mod storage;
pub mod tracer;

pub use config::{ConfigError, TraceConfig};
pub use field_tracer::FieldTracer;
pub use layout::{recompute_layout, LineLayout, SourceLines, StepBudget};
pub use metrics::TraceMetrics;
pub use sample::{sample_field, FieldSample};
pub use seed::seed_points;
pub use storage::{FieldLine, LineSpan, LineStorage, Termination};
pub use tracer::{trace_line, LineTracer, TraceStats, TracedLine, VertexSink};

//! Mutable particle scene for interactive field-line display.
//!
//! [`Scene`] owns the particles and a [`FieldTracer`](lof_trace::FieldTracer)
//! and recomputes after every edit. Pointer drags go through a
//! [`RecomputeThrottle`] so rapid motion does not trace on every event.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod scene;
pub mod throttle;

pub use error::SceneError;
pub use scene::{Scene, SceneConfig};
pub use throttle::RecomputeThrottle;

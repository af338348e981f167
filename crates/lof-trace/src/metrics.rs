//! Per-pass diagnostics for the field tracer.
//!
//! [`TraceMetrics`] captures timing and line statistics for one
//! recomputation pass, for profiling and for callers deciding how often
//! to trigger recomputation.

/// Timing and line statistics collected during a single pass.
///
/// All durations are in microseconds. The tracer populates these fields
/// at the end of each `recompute()` call; they stay readable until the
/// next one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceMetrics {
    /// Wall-clock time for the entire pass, in microseconds.
    pub total_us: u64,
    /// Time spent apportioning lines, in microseconds.
    pub layout_us: u64,
    /// Time spent integrating lines, in microseconds.
    pub tracing_us: u64,
    /// Number of lines traced.
    pub lines_traced: u32,
    /// Lines that reached a sink.
    pub lines_terminated: u32,
    /// Lines that exhausted the step budget.
    pub lines_open: u32,
    /// Vertices stored across all lines.
    pub vertex_total: usize,
    /// Field evaluations performed across all lines.
    pub field_evaluations: u64,
    /// Largest field magnitude observed during the pass.
    pub max_field_intensity: f64,
}

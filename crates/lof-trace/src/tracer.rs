//! Fixed-step integration of a single field line.
//!
//! A line advances by micro-steps of fixed length along the normalised
//! field. One vertex is recorded every `substeps_per_vertex` micro-steps,
//! so a line that never meets a sink ends with exactly
//! `max_line_segments` vertices:
//!
//! ```text
//! for piece in 0..=(max_line_segments - 1) * substeps:
//!     if within capture radius of a sink:
//!         flush current position (unless piece 0 or just recorded)
//!         stop: Sink
//!     E = Σ field contributions
//!     position += normalize(E) * line_piece_length
//!     if piece % substeps == 0: record position
//! stop: Open
//! ```

use glam::DVec2;
use lof_core::vecmath::normalize_with_length;
use lof_core::Particle;

use crate::config::TraceConfig;
use crate::sample::{sample_field, FieldSample};
use crate::storage::{LineWriter, Termination};

/// Destination for recorded vertices.
pub trait VertexSink {
    /// Record one vertex.
    fn push_vertex(&mut self, vertex: DVec2);
}

impl VertexSink for Vec<DVec2> {
    fn push_vertex(&mut self, vertex: DVec2) {
        self.push(vertex);
    }
}

impl VertexSink for LineWriter<'_> {
    fn push_vertex(&mut self, vertex: DVec2) {
        self.push(vertex);
    }
}

/// Counters accumulated while tracing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceStats {
    /// Largest field magnitude seen.
    pub peak_intensity: f64,
    /// Number of field evaluations performed.
    pub field_evaluations: u64,
}

/// Integrates lines through the field of one particle set.
#[derive(Clone, Copy, Debug)]
pub struct LineTracer<'a> {
    particles: &'a [Particle],
    charge_radius: f64,
    piece_length: f64,
    substeps: u64,
    max_line_segments: u32,
}

impl<'a> LineTracer<'a> {
    /// Create a tracer for `particles` with the given vertex ceiling.
    ///
    /// `config` is assumed valid (see [`TraceConfig::validate`]); a zero
    /// `max_line_segments` is treated as one.
    pub fn new(particles: &'a [Particle], config: &TraceConfig, max_line_segments: u32) -> Self {
        Self {
            particles,
            charge_radius: config.charge_radius,
            piece_length: config.line_piece_length,
            substeps: u64::from(config.substeps_per_vertex.max(1)),
            max_line_segments: max_line_segments.max(1),
        }
    }

    /// Vertex ceiling per line.
    pub fn max_line_segments(&self) -> u32 {
        self.max_line_segments
    }

    /// Index of the final micro-step a line may take.
    pub fn last_piece(&self) -> u64 {
        u64::from(self.max_line_segments - 1) * self.substeps
    }

    /// Trace one line from `seed`, pushing vertices into `out`.
    pub fn trace<S: VertexSink>(&self, seed: DVec2, out: &mut S, stats: &mut TraceStats) -> Termination {
        let mut position = seed;
        let mut last_recorded: Option<u64> = None;

        for piece in 0..=self.last_piece() {
            stats.field_evaluations += 1;
            let field = match sample_field(self.particles, position, self.charge_radius) {
                FieldSample::Captured { sink } => {
                    let just_recorded = piece > 0 && last_recorded == Some(piece - 1);
                    if piece != 0 && !just_recorded {
                        out.push_vertex(position);
                    }
                    return Termination::Sink { particle: sink };
                }
                FieldSample::Field(e) => e,
            };

            let magnitude = field.length();
            if magnitude > stats.peak_intensity {
                stats.peak_intensity = magnitude;
            }

            position += normalize_with_length(field, magnitude) * self.piece_length;

            if piece % self.substeps == 0 {
                out.push_vertex(position);
                last_recorded = Some(piece);
            }
        }

        Termination::Open
    }
}

/// An owned, fully traced line.
#[derive(Clone, Debug, PartialEq)]
pub struct TracedLine {
    /// Recorded vertices, sized exactly to the path.
    pub vertices: Box<[DVec2]>,
    /// How the line ended.
    pub termination: Termination,
    /// Largest field magnitude seen along the line.
    pub peak_intensity: f64,
}

/// Trace a single line from `seed` through the field of `particles`.
///
/// The result holds at most `max_line_segments` vertices.
pub fn trace_line(
    particles: &[Particle],
    seed: DVec2,
    config: &TraceConfig,
    max_line_segments: u32,
) -> TracedLine {
    let tracer = LineTracer::new(particles, config, max_line_segments);
    let mut vertices = Vec::with_capacity(tracer.max_line_segments() as usize);
    let mut stats = TraceStats::default();
    let termination = tracer.trace(seed, &mut vertices, &mut stats);
    TracedLine {
        vertices: vertices.into_boxed_slice(),
        termination,
        peak_intensity: stats.peak_intensity,
    }
}

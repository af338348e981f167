//! The recomputation context: allocator, tracer and line storage.
//!
//! [`FieldTracer`] owns everything a pass produces. Each
//! [`recompute()`](FieldTracer::recompute) releases the previous pass,
//! re-runs the allocator, then traces every seed in order. Results stay
//! readable through the accessors until the next call.

use std::time::Instant;

use glam::DVec2;
use lof_core::{LineId, Particle};

use crate::config::{ConfigError, TraceConfig};
use crate::layout::{recompute_layout, LineLayout};
use crate::metrics::TraceMetrics;
use crate::seed::seed_points;
use crate::storage::{FieldLine, LineStorage, Termination};
use crate::tracer::{LineTracer, TraceStats};

/// Field-line tracing context.
///
/// Single-threaded and synchronous: a pass runs to completion before
/// `recompute` returns. Under the extended step budget a pass costs up to
/// `line_count * max_line_segments * substeps * particle_count` field
/// evaluations, so callers driven by pointer motion should throttle how
/// often they recompute.
#[derive(Clone, Debug)]
pub struct FieldTracer {
    config: TraceConfig,
    layout: LineLayout,
    storage: LineStorage,
    max_field_intensity: f64,
    last_metrics: TraceMetrics,
}

impl FieldTracer {
    /// Create a tracer with no lines.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(config: TraceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = LineLayout::empty(&config);
        Ok(Self {
            config,
            layout,
            storage: LineStorage::new(),
            max_field_intensity: 0.0,
            last_metrics: TraceMetrics::default(),
        })
    }

    /// Discard all stored lines and trace `particles` from scratch.
    pub fn recompute(&mut self, particles: &[Particle]) {
        let pass_start = Instant::now();

        self.storage.clear();
        self.max_field_intensity = 0.0;

        let layout_start = Instant::now();
        self.layout = recompute_layout(particles, &self.config);
        let layout_us = layout_start.elapsed().as_micros() as u64;

        let mut metrics = TraceMetrics {
            layout_us,
            ..TraceMetrics::default()
        };

        if self.layout.line_count == 0 {
            log::debug!(
                "recompute: {} particles, no lines (positive charge sum {})",
                particles.len(),
                self.layout.positive_charge_sum
            );
            metrics.total_us = pass_start.elapsed().as_micros() as u64;
            self.last_metrics = metrics;
            return;
        }

        self.storage.reset(self.layout.line_count);
        let trace_start = Instant::now();
        let tracer = LineTracer::new(particles, &self.config, self.layout.max_line_segments);
        let seed_radius = self.config.seed_radius();
        let mut stats = TraceStats::default();

        for source in self.layout.seeded_sources() {
            let center = particles[source.particle].position;
            log::trace!(
                "source {} (q = {}): {} lines",
                source.particle,
                particles[source.particle].q,
                source.line_count
            );
            for seed in seed_points(center, seed_radius, source.line_count) {
                let mut writer = self.storage.begin_line();
                let termination = tracer.trace(seed, &mut writer, &mut stats);
                writer.finish(termination);
                if termination.is_terminated() {
                    metrics.lines_terminated += 1;
                } else {
                    metrics.lines_open += 1;
                }
            }
        }
        self.storage.shrink_to_fit();

        self.max_field_intensity = stats.peak_intensity;
        metrics.tracing_us = trace_start.elapsed().as_micros() as u64;
        metrics.lines_traced = self.storage.line_count() as u32;
        metrics.vertex_total = self.storage.vertex_total();
        metrics.field_evaluations = stats.field_evaluations;
        metrics.max_field_intensity = stats.peak_intensity;
        metrics.total_us = pass_start.elapsed().as_micros() as u64;

        log::debug!(
            "recompute: {} particles, {} lines ({} terminated, {} open), budget {} ({:?}), {} us",
            particles.len(),
            metrics.lines_traced,
            metrics.lines_terminated,
            metrics.lines_open,
            self.layout.max_line_segments,
            self.layout.budget,
            metrics.total_us
        );
        self.last_metrics = metrics;
    }

    /// Number of lines from the most recent pass.
    pub fn line_count(&self) -> usize {
        self.storage.line_count()
    }

    /// Vertices of `line`, or `None` if out of range.
    pub fn vertices_of(&self, line: LineId) -> Option<&[DVec2]> {
        self.storage.vertices_of(line)
    }

    /// Vertex count of `line`, or `None` if out of range.
    pub fn vertex_count_of(&self, line: LineId) -> Option<usize> {
        self.storage.vertex_count_of(line)
    }

    /// How `line` ended, or `None` if out of range.
    pub fn termination_of(&self, line: LineId) -> Option<Termination> {
        self.storage.span_of(line).map(|s| s.termination)
    }

    /// Iterate the lines of the most recent pass.
    pub fn lines(&self) -> impl Iterator<Item = FieldLine<'_>> {
        self.storage.iter()
    }

    /// Allocation result of the most recent pass.
    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }

    /// Vertex ceiling per line chosen for the most recent pass.
    pub fn max_line_segments(&self) -> u32 {
        self.layout.max_line_segments
    }

    /// Sum of positive charges in the most recent pass.
    pub fn positive_charge_sum(&self) -> f64 {
        self.layout.positive_charge_sum
    }

    /// Largest field magnitude seen during the most recent pass.
    pub fn max_field_intensity(&self) -> f64 {
        self.max_field_intensity
    }

    /// Metrics from the most recent pass.
    pub fn last_metrics(&self) -> &TraceMetrics {
        &self.last_metrics
    }

    /// The tunables this tracer was built with.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }
}

impl Default for FieldTracer {
    fn default() -> Self {
        let config = TraceConfig::default();
        Self {
            layout: LineLayout::empty(&config),
            config,
            storage: LineStorage::new(),
            max_field_intensity: 0.0,
            last_metrics: TraceMetrics::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_config() {
        let config = TraceConfig {
            substeps_per_vertex: 0,
            ..TraceConfig::default()
        };
        assert_eq!(FieldTracer::new(config).unwrap_err(), ConfigError::ZeroSubsteps);
    }

    #[test]
    fn fresh_tracer_has_no_lines() {
        let t = FieldTracer::default();
        assert_eq!(t.line_count(), 0);
        assert!(t.vertices_of(LineId(0)).is_none());
        assert_eq!(t.max_field_intensity(), 0.0);
    }

    #[test]
    fn recompute_replaces_previous_pass() {
        let mut t = FieldTracer::default();
        t.recompute(&[Particle::new(0.0, 0.0, 1.0)]);
        assert_eq!(t.line_count(), 50);
        t.recompute(&[Particle::new(0.0, 0.0, -1.0)]);
        assert_eq!(t.line_count(), 0);
        assert!(t.vertices_of(LineId(0)).is_none());
        assert_eq!(t.max_field_intensity(), 0.0);
        assert_eq!(t.last_metrics().lines_traced, 0);
    }

    #[test]
    fn metrics_agree_with_storage() {
        let mut t = FieldTracer::default();
        t.recompute(&[Particle::new(0.0, 0.0, 1.0), Particle::new(0.3, 0.0, 1.0)]);
        let m = t.last_metrics();
        assert_eq!(m.lines_traced as usize, t.line_count());
        assert_eq!(m.lines_open + m.lines_terminated, m.lines_traced);
        let total: usize = t.lines().map(|l| l.vertices.len()).sum();
        assert_eq!(m.vertex_total, total);
        assert_eq!(m.max_field_intensity, t.max_field_intensity());
        assert!(m.field_evaluations > 0);
    }

    #[test]
    fn line_ids_follow_source_order() {
        let mut t = FieldTracer::default();
        let particles = [Particle::new(0.0, 0.0, 1.0), Particle::new(0.5, 0.0, 1.0)];
        t.recompute(&particles);
        assert_eq!(t.line_count(), 50);
        // First 25 lines start around particle 0, the rest around particle 1.
        let first = t.vertices_of(LineId(0)).unwrap()[0];
        let last = t.vertices_of(LineId(49)).unwrap()[0];
        assert!(first.distance(particles[0].position) < 0.02);
        assert!(last.distance(particles[1].position) < 0.02);
    }
}

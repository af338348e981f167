//! End-to-end recomputation scenarios.
//!
//! Each test drives `FieldTracer::recompute` with default tunables on a
//! standard particle arrangement and checks the stored line set.

use glam::DVec2;
use lof_core::{LineId, Particle};
use lof_test_utils::{assert_ends_near, charge_pair, dipole, single_source};
use lof_trace::{FieldTracer, StepBudget, Termination, TraceConfig};

fn tracer_with(preferred: u32) -> FieldTracer {
    FieldTracer::new(TraceConfig {
        preferred_line_count: preferred,
        ..TraceConfig::default()
    })
    .unwrap()
}

// ── Lone source ──────────────────────────────────────────────────

#[test]
fn lone_source_lines_are_all_open_at_normal_budget() {
    let mut t = FieldTracer::default();
    t.recompute(&single_source());

    assert_eq!(t.line_count(), 50);
    assert_eq!(t.layout().budget, StepBudget::Normal);
    assert_eq!(t.max_line_segments(), 100);
    assert_eq!(t.positive_charge_sum(), 1.0);
    for line in t.lines() {
        assert_eq!(line.termination, Termination::Open);
        assert_eq!(line.vertices.len(), 100);
    }
    assert_eq!(t.last_metrics().lines_open, 50);
}

#[test]
fn lone_source_lines_radiate_outward() {
    let mut t = FieldTracer::default();
    t.recompute(&single_source());
    let seed_radius = t.config().seed_radius();
    let step = t.config().line_piece_length;
    for line in t.lines() {
        let first = line.vertices[0];
        let last = *line.vertices.last().unwrap();
        assert!((first.length() - (seed_radius + step)).abs() < 1e-12);
        // 99 vertex gaps of 10 micro-steps each, straight out.
        let expected = seed_radius + step + 99.0 * 10.0 * step;
        assert!((last.length() - expected).abs() < 1e-9);
    }
}

#[test]
fn lone_source_peak_intensity_is_at_seed_circle() {
    let mut t = FieldTracer::default();
    t.recompute(&single_source());
    let expected = 1.0 / t.config().seed_radius();
    assert!((t.max_field_intensity() - expected).abs() < 1e-9 * expected);
}

// ── Two sources ──────────────────────────────────────────────────

#[test]
fn two_to_one_sources_split_thirty_lines() {
    let mut t = tracer_with(30);
    let particles = charge_pair(2.0, 1.0, 0.5);
    t.recompute(&particles);

    assert_eq!(t.positive_charge_sum(), 3.0);
    assert_eq!(t.line_count(), 30);
    let counts: Vec<u32> = t.layout().sources.iter().map(|s| s.line_count).collect();
    assert_eq!(counts, vec![20, 10]);

    // First 20 lines seed around the q=2 source, the last 10 around q=1.
    for i in 0..30u32 {
        let v0 = t.vertices_of(LineId(i)).unwrap()[0];
        let owner = if i < 20 { 0 } else { 1 };
        assert!(v0.distance(particles[owner].position) < 0.011, "line {i}");
    }
    for line in t.lines() {
        assert_eq!(line.vertices.len(), 100);
    }
}

// ── Dipole ───────────────────────────────────────────────────────

#[test]
fn neutral_dipole_selects_extended_budget() {
    let mut t = FieldTracer::default();
    t.recompute(&dipole(0.05));

    assert_eq!(t.line_count(), 50);
    assert_eq!(t.layout().net_charge, 0.0);
    assert_eq!(t.layout().budget, StepBudget::Extended);
    assert_eq!(t.max_line_segments(), 100_000);
}

#[test]
fn neutral_dipole_lines_end_at_the_sink() {
    let mut t = FieldTracer::default();
    let particles = dipole(0.05);
    t.recompute(&particles);
    let sink = particles[1].position;
    let radius = t.config().charge_radius;

    // Seed i = 25 of 50 sits at angle π, pointing straight away from the
    // sink along the axis; that line escapes. Every other line curves back.
    let escaping = LineId(24);
    for line in t.lines() {
        let count = line.vertices.len();
        assert!(count <= t.max_line_segments() as usize);
        if line.id == escaping {
            continue;
        }
        assert_eq!(
            line.termination,
            Termination::Sink { particle: 1 },
            "line {} did not terminate",
            line.id
        );
        assert_ends_near(line.vertices, sink, radius);
        // The widest returning arc is about 1.2 units long (~600 vertices).
        assert!(count < 1_000, "line {} used {count} vertices", line.id);
    }
    assert_eq!(t.termination_of(escaping), Some(Termination::Open));
    assert_eq!(t.last_metrics().lines_terminated, 49);
}

#[test]
fn line_seeded_toward_sink_terminates_quickly() {
    let mut t = FieldTracer::default();
    let particles = dipole(0.05);
    t.recompute(&particles);
    // The last seed of a source sits at angle 2π, i.e. on the +x axis.
    let toward = LineId(49);
    let vertices = t.vertices_of(toward).unwrap();
    assert_ends_near(vertices, particles[1].position, t.config().charge_radius);
    for v in vertices {
        assert!(v.y.abs() < 1e-9);
    }
    // 0.0302 of travel at 0.002 per vertex.
    assert!(t.vertex_count_of(toward).unwrap() <= 17);
}

// ── Degenerate inputs ────────────────────────────────────────────

#[test]
fn no_particles_produces_no_lines() {
    let mut t = FieldTracer::default();
    t.recompute(&[]);
    assert_eq!(t.line_count(), 0);
    assert_eq!(t.positive_charge_sum(), 0.0);
}

#[test]
fn sinks_only_produces_no_lines() {
    let mut t = FieldTracer::default();
    t.recompute(&[Particle::new(0.0, 0.0, -1.0), Particle::new(0.2, 0.1, -2.0)]);
    assert_eq!(t.line_count(), 0);
    assert_eq!(t.layout().budget, StepBudget::Extended);
    assert_eq!(t.last_metrics().field_evaluations, 0);
}

#[test]
fn seed_inside_neighbouring_sink_yields_empty_line() {
    let mut t = FieldTracer::default();
    // The +x seed of the source lies 0.0052 from the sink.
    t.recompute(&charge_pair(1.0, -0.5, 0.015));
    let toward = LineId(49);
    assert_eq!(t.vertex_count_of(toward), Some(0));
    assert_eq!(t.termination_of(toward), Some(Termination::Sink { particle: 1 }));
    assert_eq!(t.vertices_of(toward), Some(&[][..]));
}

#[test]
fn source_rounding_to_zero_is_skipped() {
    let mut t = FieldTracer::default();
    let particles = vec![Particle::new(0.0, 0.0, 1.0), Particle::new(0.5, 0.0, 0.01)];
    t.recompute(&particles);
    assert_eq!(t.line_count(), 49);
    for line in t.lines() {
        assert!(line.vertices[0].distance(DVec2::ZERO) < 0.011);
    }
}

#[test]
fn out_of_range_line_is_none() {
    let mut t = FieldTracer::default();
    t.recompute(&single_source());
    assert!(t.vertices_of(LineId(50)).is_none());
    assert!(t.vertex_count_of(LineId(50)).is_none());
    assert!(t.termination_of(LineId(50)).is_none());
}

// ── Determinism ──────────────────────────────────────────────────

#[test]
fn recompute_is_idempotent() {
    let particles = vec![
        Particle::new(0.0, 0.0, 1.0),
        Particle::new(0.12, 0.03, 1.0),
        Particle::new(0.06, -0.08, -1.0),
    ];
    let mut t = FieldTracer::default();
    t.recompute(&particles);
    let first: Vec<Vec<DVec2>> = t.lines().map(|l| l.vertices.to_vec()).collect();
    let first_terminations: Vec<Termination> = t.lines().map(|l| l.termination).collect();

    t.recompute(&particles);
    let second: Vec<Vec<DVec2>> = t.lines().map(|l| l.vertices.to_vec()).collect();
    let second_terminations: Vec<Termination> = t.lines().map(|l| l.termination).collect();

    assert_eq!(first, second);
    assert_eq!(first_terminations, second_terminations);
}

//! Trace a few standard arrangements and print per-pass metrics.

use lof_bench::{neutral_dipole, reference_scene, stress_scene};
use lof_core::Particle;
use lof_trace::{FieldTracer, Termination};

fn report(name: &str, particles: &[Particle]) {
    let mut tracer = FieldTracer::default();
    tracer.recompute(particles);
    let m = tracer.last_metrics();

    println!("--- {name} ({} particles) ---", particles.len());
    println!(
        "  budget: {:?} ({} vertices per line)",
        tracer.layout().budget,
        tracer.max_line_segments()
    );
    println!(
        "  lines: {} ({} terminated, {} open)",
        m.lines_traced, m.lines_terminated, m.lines_open
    );
    println!(
        "  vertices: {} total, {} field evaluations",
        m.vertex_total, m.field_evaluations
    );
    println!("  peak intensity: {:.2}", m.max_field_intensity);
    println!(
        "  time: {} us total ({} us layout, {} us tracing)",
        m.total_us, m.layout_us, m.tracing_us
    );

    let longest = tracer
        .lines()
        .max_by_key(|l| l.vertices.len())
        .map(|l| (l.id, l.vertices.len(), l.termination));
    if let Some((id, len, termination)) = longest {
        let end = match termination {
            Termination::Sink { particle } => format!("sink {particle}"),
            Termination::Open => "open".to_string(),
        };
        println!("  longest line: {id} ({len} vertices, {end})");
    }
    println!();
}

fn main() {
    println!("=== Lof Field-Line Report ===\n");
    report("reference", &reference_scene());
    report("stress", &stress_scene(41, 42));
    report("neutral dipole", &neutral_dipole(0.05));
}

//! Editable particle set that keeps its field lines current.

use std::time::{Duration, Instant};

use glam::DVec2;
use lof_core::Particle;
use lof_trace::{FieldTracer, TraceConfig};

use crate::error::SceneError;
use crate::throttle::RecomputeThrottle;

// ── SceneConfig ─────────────────────────────────────────────────

/// Tunables for a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Tracing tunables passed to the owned [`FieldTracer`].
    pub trace: TraceConfig,
    /// Minimum time between recomputations while dragging.
    pub drag_interval: Duration,
    /// Hit-test radius for [`Scene::particle_at`], in world units.
    pub pick_radius: f64,
}

impl SceneConfig {
    /// Default hit-test radius: 0.01 world units.
    pub const DEFAULT_PICK_RADIUS: f64 = 0.01;

    /// Check tunables.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.trace.validate()?;
        if !self.pick_radius.is_finite() || self.pick_radius < 0.0 {
            return Err(SceneError::InvalidPickRadius {
                value: self.pick_radius,
            });
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            trace: TraceConfig::default(),
            drag_interval: RecomputeThrottle::DEFAULT_INTERVAL,
            pick_radius: Self::DEFAULT_PICK_RADIUS,
        }
    }
}

// ── Scene ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
struct Drag {
    index: usize,
    pending: bool,
}

/// A particle set plus the field lines traced from it.
///
/// Every edit is followed by a full recomputation, except pointer drags,
/// which are rate limited by a [`RecomputeThrottle`]. A drag that skipped
/// its last recomputation is flushed by [`end_drag`](Scene::end_drag), so
/// once no drag is in progress the lines always match the particles.
#[derive(Clone, Debug)]
pub struct Scene {
    particles: Vec<Particle>,
    tracer: FieldTracer,
    throttle: RecomputeThrottle,
    pick_radius: f64,
    drag: Option<Drag>,
}

impl Scene {
    /// Build a scene from `particles` and trace it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] if the config or any particle is invalid.
    pub fn new(config: SceneConfig, particles: Vec<Particle>) -> Result<Self, SceneError> {
        config.validate()?;
        for p in &particles {
            p.validate()?;
        }
        let tracer = FieldTracer::new(config.trace)?;
        let mut scene = Self {
            particles,
            tracer,
            throttle: RecomputeThrottle::new(config.drag_interval),
            pick_radius: config.pick_radius,
            drag: None,
        };
        scene.retrace();
        Ok(scene)
    }

    /// One `q = +1` source at the origin, default tunables, already traced.
    pub fn with_unit_source() -> Self {
        let mut scene = Self {
            particles: vec![Particle::source(DVec2::ZERO)],
            tracer: FieldTracer::default(),
            throttle: RecomputeThrottle::default(),
            pick_radius: SceneConfig::DEFAULT_PICK_RADIUS,
            drag: None,
        };
        scene.retrace();
        scene
    }

    /// The current particles, in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The tracer holding the lines for the current particles.
    pub fn tracer(&self) -> &FieldTracer {
        &self.tracer
    }

    // ── Editing ─────────────────────────────────────────────────

    /// Append `particle` and recompute. Returns its index.
    pub fn add_particle(&mut self, particle: Particle) -> Result<usize, SceneError> {
        particle.validate()?;
        self.particles.push(particle);
        let index = self.particles.len() - 1;
        log::debug!(
            "added particle {index} at ({}, {}) with q = {}",
            particle.position.x,
            particle.position.y,
            particle.q
        );
        self.retrace();
        Ok(index)
    }

    /// Append a unit source at `position`.
    pub fn add_source(&mut self, position: DVec2) -> Result<usize, SceneError> {
        self.add_particle(Particle::source(position))
    }

    /// Append a unit sink at `position`.
    pub fn add_sink(&mut self, position: DVec2) -> Result<usize, SceneError> {
        self.add_particle(Particle::sink(position))
    }

    /// Move particle `index` to `position` and recompute.
    pub fn move_particle(&mut self, index: usize, position: DVec2) -> Result<(), SceneError> {
        self.set_position(index, position)?;
        log::debug!("moved particle {index} to ({}, {})", position.x, position.y);
        self.retrace();
        Ok(())
    }

    /// Remove particle `index` and recompute. Later indices shift down by one.
    ///
    /// Cancels the drag if it held the removed particle.
    pub fn remove_particle(&mut self, index: usize) -> Result<Particle, SceneError> {
        self.check_index(index)?;
        let removed = self.particles.remove(index);
        self.drag = match self.drag {
            Some(d) if d.index == index => None,
            Some(d) if d.index > index => Some(Drag {
                index: d.index - 1,
                ..d
            }),
            other => other,
        };
        log::debug!("removed particle {index} (q = {})", removed.q);
        self.retrace();
        Ok(removed)
    }

    // ── Dragging ────────────────────────────────────────────────

    /// Index of the first particle within the pick radius of `point`.
    pub fn particle_at(&self, point: DVec2) -> Option<usize> {
        self.particles
            .iter()
            .position(|p| p.position.distance(point) <= self.pick_radius)
    }

    /// Start dragging the particle under `point`, if any.
    ///
    /// The first [`drag_to`](Scene::drag_to) after this always recomputes.
    pub fn begin_drag(&mut self, point: DVec2) -> Option<usize> {
        let index = self.particle_at(point)?;
        self.drag = Some(Drag {
            index,
            pending: false,
        });
        self.throttle.reset();
        log::trace!("drag started on particle {index}");
        Some(index)
    }

    /// Move the dragged particle to `point`.
    ///
    /// Returns `true` if the lines were recomputed. When the throttle
    /// refuses, the particle still moves and the recompute is deferred.
    /// Does nothing and returns `false` when no drag is active or `point`
    /// is not finite.
    pub fn drag_to(&mut self, point: DVec2, now: Instant) -> bool {
        let Some(mut drag) = self.drag else {
            return false;
        };
        if self.set_position(drag.index, point).is_err() {
            return false;
        }
        let recomputed = if self.throttle.admit(now) {
            self.retrace();
            drag.pending = false;
            true
        } else {
            log::trace!("drag recompute deferred for particle {}", drag.index);
            drag.pending = true;
            false
        };
        self.drag = Some(drag);
        recomputed
    }

    /// Finish the drag, recomputing if the last move was deferred.
    ///
    /// Returns `true` if a recompute ran.
    pub fn end_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(Drag {
                index,
                pending: true,
            }) => {
                log::trace!("drag ended on particle {index}, flushing deferred recompute");
                self.retrace();
                true
            }
            _ => false,
        }
    }

    /// Index of the particle being dragged.
    pub fn dragging(&self) -> Option<usize> {
        self.drag.map(|d| d.index)
    }

    /// Whether the stored lines lag behind a deferred drag move.
    pub fn is_stale(&self) -> bool {
        self.drag.is_some_and(|d| d.pending)
    }

    // ── Internals ───────────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<(), SceneError> {
        if index >= self.particles.len() {
            return Err(SceneError::ParticleOutOfRange {
                index,
                len: self.particles.len(),
            });
        }
        Ok(())
    }

    fn set_position(&mut self, index: usize, position: DVec2) -> Result<(), SceneError> {
        self.check_index(index)?;
        let moved = Particle {
            position,
            q: self.particles[index].q,
        };
        moved.validate()?;
        self.particles[index] = moved;
        Ok(())
    }

    fn retrace(&mut self) {
        self.tracer.recompute(&self.particles);
    }
}

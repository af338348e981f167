//! Line allocation: how many lines each source receives.
//!
//! Lines are apportioned to sources in proportion to their share of the
//! total positive charge, rounded down:
//!
//! ```text
//! lines(i) = floor(q_i * preferred_line_count / positive_charge_sum)   for q_i > 0
//! ```
//!
//! Rounding down never over-allocates, so the total is at most
//! `preferred_line_count`. A system without sources gets no lines.

use lof_core::{ChargeSummary, Particle};
use smallvec::SmallVec;

use crate::config::TraceConfig;

/// Which vertex ceiling applies to the current pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepBudget {
    /// Net charge is positive: [`TraceConfig::normal_max_segments`].
    Normal,
    /// Net charge is zero or negative, so lines are less likely to find a
    /// sink: [`TraceConfig::extended_max_segments`].
    Extended,
}

impl StepBudget {
    /// Pick the budget for a system with the given net charge.
    pub fn for_net_charge(net: f64) -> Self {
        if net <= 0.0 {
            Self::Extended
        } else {
            Self::Normal
        }
    }

    /// The vertex ceiling this budget resolves to under `config`.
    pub fn max_line_segments(self, config: &TraceConfig) -> u32 {
        match self {
            Self::Normal => config.normal_max_segments,
            Self::Extended => config.extended_max_segments,
        }
    }
}

/// Lines allotted to one source particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLines {
    /// Index of the source in the particle slice.
    pub particle: usize,
    /// Number of lines seeded around it. May be zero.
    pub line_count: u32,
}

/// Result of the allocation step for one recomputation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    /// Total lines across all sources.
    pub line_count: u32,
    /// One entry per source, in particle order.
    pub sources: SmallVec<[SourceLines; 8]>,
    /// Budget chosen from the net charge.
    pub budget: StepBudget,
    /// Vertex ceiling per line for this pass.
    pub max_line_segments: u32,
    /// Sum of strictly positive charges.
    pub positive_charge_sum: f64,
    /// Sum of all charges.
    pub net_charge: f64,
}

impl LineLayout {
    /// The layout of an empty system under `config`.
    pub fn empty(config: &TraceConfig) -> Self {
        Self {
            line_count: 0,
            sources: SmallVec::new(),
            budget: StepBudget::Extended,
            max_line_segments: config.extended_max_segments,
            positive_charge_sum: 0.0,
            net_charge: 0.0,
        }
    }

    /// Sources that actually receive lines.
    pub fn seeded_sources(&self) -> impl Iterator<Item = &SourceLines> {
        self.sources.iter().filter(|s| s.line_count > 0)
    }
}

/// Compute line counts and the step budget for `particles`.
pub fn recompute_layout(particles: &[Particle], config: &TraceConfig) -> LineLayout {
    let summary = ChargeSummary::of(particles);
    let budget = StepBudget::for_net_charge(summary.net);

    let mut layout = LineLayout {
        line_count: 0,
        sources: SmallVec::with_capacity(summary.source_count),
        budget,
        max_line_segments: budget.max_line_segments(config),
        positive_charge_sum: summary.positive_sum,
        net_charge: summary.net,
    };

    // No sources: the apportionment below would divide by zero.
    if !summary.has_sources() {
        return layout;
    }

    let preferred = f64::from(config.preferred_line_count);
    for (index, p) in particles.iter().enumerate() {
        if !p.is_source() {
            continue;
        }
        let share = (p.q * preferred / summary.positive_sum).floor();
        // Clamp so float rounding can never push the total past `preferred`.
        let remaining = config.preferred_line_count - layout.line_count;
        let line_count = (share as u32).min(remaining);
        layout.sources.push(SourceLines {
            particle: index,
            line_count,
        });
        layout.line_count += line_count;
    }

    layout
}

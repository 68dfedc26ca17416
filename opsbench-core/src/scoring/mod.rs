//! Scoring subsystem: compares an agent's structured diagnosis against
//! ground truth and reduces it to calibrated numeric scores.
//!
//! All scoring is pure and total: no state is kept between calls, identical
//! inputs always produce identical scores, and malformed or partial input
//! degrades the affected score instead of failing. Every returned score lies
//! in [0, 1].

pub mod component;
pub mod fields;
pub mod fuzzy;
pub mod graph;
pub mod text;

use crate::types::{CausalGraph, ComparisonScores, Diagnosis, Resolution, RootCause};

/// Compares agent output with ground truth and produces the per-scenario
/// score map.
///
/// Stateless; construct once and reuse freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultComparator;

impl ResultComparator {
    pub fn new() -> Self {
        Self
    }

    /// Score the three diagnosis sections independently. Missing sections
    /// are treated as empty records: an absent root cause or resolution
    /// scores 0 against non-empty ground truth, and two absent causal
    /// graphs count as a vacuous match. No aggregation across the three
    /// scores happens here; that is the caller's policy.
    pub fn compare(&self, agent: &Diagnosis, truth: &Diagnosis) -> ComparisonScores {
        let empty_rc = RootCause::default();
        let empty_res = Resolution::default();

        let agent_rc = agent.root_cause.as_ref().unwrap_or(&empty_rc);
        let truth_rc = truth.root_cause.as_ref().unwrap_or(&empty_rc);
        let agent_res = agent.resolution.as_ref().unwrap_or(&empty_res);
        let truth_res = truth.resolution.as_ref().unwrap_or(&empty_res);

        ComparisonScores {
            rca_root_cause_score: fields::score_root_cause(agent_rc, truth_rc),
            rca_causal_graph_score: graph::graph_score(
                agent.causal_graph.as_ref(),
                truth.causal_graph.as_ref(),
            ),
            resolution_correctness_score: fields::score_resolution(agent_res, truth_res),
        }
    }
}

pub use component::component_match;
pub use fuzzy::token_set_ratio;
pub use graph::graph_score;
pub use text::similarity;

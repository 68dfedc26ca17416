//! Causal-graph similarity via greedy fuzzy matching of node labels.
//!
//! Edges and node types are deliberately not scored; only the set of node
//! labels participates. The assignment is greedy first-fit, not an optimal
//! bipartite matching: agent labels are consumed in input order and ties
//! break toward the earliest remaining ground-truth label. Existing
//! benchmark baselines depend on these exact semantics.

use super::fuzzy::token_set_ratio;
use crate::types::CausalGraph;

/// Minimum `token_set_ratio` (0–100) for two labels to count as a match.
const MATCH_THRESHOLD: f64 = 80.0;

/// Similarity of two causal graphs in [0, 1].
///
/// Both graphs absent or label-free → 1.0 (nothing to disagree on).
/// Exactly one label-free → 0.0. Otherwise a Dice-style overlap
/// `2 * matches / (|agent| + |truth|)` over the greedy label assignment;
/// each ground-truth label can be consumed at most once.
pub fn graph_score(agent: Option<&CausalGraph>, truth: Option<&CausalGraph>) -> f64 {
    let agent_labels = agent.map(CausalGraph::labels).unwrap_or_default();
    let truth_labels = truth.map(CausalGraph::labels).unwrap_or_default();

    if agent_labels.is_empty() && truth_labels.is_empty() {
        return 1.0;
    }
    if agent_labels.is_empty() || truth_labels.is_empty() {
        return 0.0;
    }

    let mut remaining = truth_labels.clone();
    let mut match_count = 0usize;

    for agent_label in &agent_labels {
        let mut best_score = -1.0;
        let mut best_index = 0usize;
        for (i, truth_label) in remaining.iter().enumerate() {
            let score = token_set_ratio(agent_label, truth_label);
            // Strict `>` keeps the earliest index on ties.
            if score > best_score {
                best_score = score;
                best_index = i;
            }
        }
        if best_score >= MATCH_THRESHOLD {
            remaining.remove(best_index);
            match_count += 1;
        }
    }

    (2 * match_count) as f64 / (agent_labels.len() + truth_labels.len()) as f64
}

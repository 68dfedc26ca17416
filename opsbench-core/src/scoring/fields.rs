//! Weighted per-section scoring for root cause and resolution.

use super::component::component_match;
use super::text::similarity;
use crate::types::{Resolution, RootCause};

// Root cause weights. Must sum to 1.0.
const RC_TYPE_WEIGHT: f64 = 0.2;
const RC_RESOURCE_TYPE_WEIGHT: f64 = 0.2;
const RC_COMPONENT_WEIGHT: f64 = 0.3;
const RC_DETAILS_WEIGHT: f64 = 0.3;

// Resolution weights. Must sum to 1.0.
const RES_ACTION_TYPE_WEIGHT: f64 = 0.3;
const RES_TARGET_COMPONENT_WEIGHT: f64 = 0.4;
const RES_DETAILS_WEIGHT: f64 = 0.3;

/// Weighted score for the root-cause section in [0, 1].
///
/// Exact-match on type and resource type, binary component match, and
/// semantic similarity on the free-text details.
pub fn score_root_cause(agent: &RootCause, truth: &RootCause) -> f64 {
    let type_score = exact_match(agent.cause_type.as_deref(), truth.cause_type.as_deref());
    let resource_type_score =
        exact_match(agent.resource_type.as_deref(), truth.resource_type.as_deref());
    let component_score = component_match(agent.component.as_ref(), truth.component.as_ref());
    let details_score = similarity(
        agent.details.as_deref().unwrap_or(""),
        truth.details.as_deref().unwrap_or(""),
    );

    RC_TYPE_WEIGHT * type_score
        + RC_RESOURCE_TYPE_WEIGHT * resource_type_score
        + RC_COMPONENT_WEIGHT * component_score
        + RC_DETAILS_WEIGHT * details_score
}

/// Weighted score for the resolution section in [0, 1].
pub fn score_resolution(agent: &Resolution, truth: &Resolution) -> f64 {
    let action_type_score =
        exact_match(agent.action_type.as_deref(), truth.action_type.as_deref());
    let target_component_score = component_match(
        agent.target_component.as_ref(),
        truth.target_component.as_ref(),
    );
    let details_score = similarity(
        agent.details.as_deref().unwrap_or(""),
        truth.details.as_deref().unwrap_or(""),
    );

    RES_ACTION_TYPE_WEIGHT * action_type_score
        + RES_TARGET_COMPONENT_WEIGHT * target_component_score
        + RES_DETAILS_WEIGHT * details_score
}

/// 1.0 iff both values are present and byte-equal. No normalization and no
/// case folding; two absent values do not count as a match.
fn exact_match(agent: Option<&str>, truth: Option<&str>) -> f64 {
    match agent {
        Some(value) if truth == Some(value) => 1.0,
        _ => 0.0,
    }
}

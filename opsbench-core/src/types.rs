//! Structured records exchanged between the agent, the scenario ground
//! truth, and the scoring subsystem.
//!
//! Every field an agent could omit is an `Option`; absence is scored as a
//! non-match, never as an error. Coercion of arbitrary JSON into these
//! shapes happens here at the boundary ([`Diagnosis::from_value`] and the
//! lenient node-list deserializer) so the scorers can stay total.

use serde::{Deserialize, Deserializer, Serialize};

/// Reference to an infrastructure element (a deployment, a database, ...)
/// identified by kind and name, with an optional namespace qualifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Structured diagnosis of why an incident occurred.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootCause {
    /// Failure category, e.g. "Resource Exhaustion".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cause_type: Option<String>,
    /// The exhausted or failing resource, e.g. "Connection Pool".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// The implicated infrastructure element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,
    /// Free-text explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Structured remediation proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    /// Remediation category, e.g. "Configuration Change".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    /// The element the remediation applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_component: Option<ComponentRef>,
    /// Free-text explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// One node in a causal graph. Only `label` participates in scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
}

/// One edge in a causal graph. Edges are carried for reporting but are not
/// scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalEdge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
}

/// A causal graph: labeled nodes describing the chain of events from trigger
/// to impact, plus the edges connecting them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalGraph {
    #[serde(deserialize_with = "lenient_vec")]
    pub nodes: Vec<CausalNode>,
    #[serde(deserialize_with = "lenient_vec")]
    pub edges: Vec<CausalEdge>,
}

impl CausalGraph {
    /// Non-empty node labels, trimmed membership check only (the original
    /// label text is kept), in input order.
    pub fn labels(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|n| n.label.as_deref())
            .filter(|l| !l.trim().is_empty())
            .collect()
    }
}

/// The three-section record produced by agents and stored as ground truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnosis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<RootCause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causal_graph: Option<CausalGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
}

impl Diagnosis {
    /// Coerce arbitrary JSON into a diagnosis, salvaging every section that
    /// parses and dropping the rest. A non-object input yields an empty
    /// diagnosis.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let section = |key: &str| value.get(key).cloned();
        Self {
            root_cause: section("root_cause").and_then(|v| serde_json::from_value(v).ok()),
            causal_graph: section("causal_graph").and_then(|v| serde_json::from_value(v).ok()),
            resolution: section("resolution").and_then(|v| serde_json::from_value(v).ok()),
        }
    }
}

/// Flat score map returned by the comparator. Each score is in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScores {
    pub rca_root_cause_score: f64,
    pub rca_causal_graph_score: f64,
    pub resolution_correctness_score: f64,
}

/// Deserialize a list, skipping entries that do not fit the element shape.
/// A missing or non-list value yields an empty vec.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    match raw {
        serde_json::Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

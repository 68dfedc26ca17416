//! Agent adapter boundary.
//!
//! The evaluation pipeline talks to any AI SRE agent through the
//! [`SreAgent`] trait: it hands over the loaded scenario data and receives a
//! structured [`Diagnosis`] back. How the adapter prompts an LLM, calls a
//! remote service, or replays recorded output is its own business.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::scenario::ScenarioData;
use crate::types::Diagnosis;

/// An AI SRE agent under evaluation.
#[async_trait]
pub trait SreAgent: Send + Sync {
    /// Human-readable adapter name, recorded in the per-scenario report.
    fn name(&self) -> &str;

    /// Produce a structured diagnosis for the given scenario.
    async fn diagnose(&self, scenario: &ScenarioData) -> Result<Diagnosis, AgentError>;
}

/// Agent that returns a canned diagnosis, for tests and smoke runs.
pub struct ScriptedAgent {
    name: String,
    responses: std::sync::Mutex<Vec<Diagnosis>>,
    fallback: Diagnosis,
}

impl ScriptedAgent {
    /// Agent that always answers with the given diagnosis.
    pub fn with_diagnosis(diagnosis: Diagnosis) -> Self {
        Self {
            name: "scripted".to_string(),
            responses: std::sync::Mutex::new(Vec::new()),
            fallback: diagnosis,
        }
    }

    /// Queue a diagnosis to be returned by the next `diagnose` call; once
    /// the queue is drained the fallback diagnosis is used.
    pub fn queue(&self, diagnosis: Diagnosis) {
        self.responses.lock().unwrap().push(diagnosis);
    }
}

impl Default for ScriptedAgent {
    fn default() -> Self {
        Self::with_diagnosis(Diagnosis::default())
    }
}

#[async_trait]
impl SreAgent for ScriptedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn diagnose(&self, _scenario: &ScenarioData) -> Result<Diagnosis, AgentError> {
        let mut responses = self.responses.lock().unwrap();
        let queued = if responses.is_empty() {
            None
        } else {
            Some(responses.remove(0))
        };
        Ok(queued.unwrap_or_else(|| self.fallback.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_scripted_agent_returns_fallback() {
        let diagnosis = Diagnosis::from_value(&json!({
            "root_cause": {"type": "Resource Exhaustion"},
        }));
        let agent = ScriptedAgent::with_diagnosis(diagnosis.clone());
        let scenario = ScenarioData::default();
        let got = agent.diagnose(&scenario).await.unwrap();
        assert_eq!(got, diagnosis);
        // Fallback is reusable across calls.
        assert_eq!(agent.diagnose(&scenario).await.unwrap(), diagnosis);
    }

    #[tokio::test]
    async fn test_scripted_agent_queue_takes_priority() {
        let agent = ScriptedAgent::default();
        let queued = Diagnosis::from_value(&json!({
            "resolution": {"action_type": "Rollback"},
        }));
        agent.queue(queued.clone());
        let scenario = ScenarioData::default();
        assert_eq!(agent.diagnose(&scenario).await.unwrap(), queued);
        assert_eq!(agent.diagnose(&scenario).await.unwrap(), Diagnosis::default());
    }
}

//! Per-scenario evaluation pipeline.
//!
//! Ties the collaborators together for one scenario: load fixtures, time
//! the agent's diagnosis, score it against ground truth, and assemble the
//! report. Agent failures are captured in the report rather than aborting
//! the run; only loader and writer failures surface as errors.

use chrono::Utc;
use tracing::{info, warn};

use crate::agent::SreAgent;
use crate::efficiency::EfficiencyTimer;
use crate::error::Result;
use crate::report::{RunWriter, ScenarioReport};
use crate::scenario::ScenarioLoader;
use crate::scoring::ResultComparator;

/// Runs the evaluation pipeline for scenarios under one scenario directory.
#[derive(Debug, Clone)]
pub struct ScenarioEvaluator {
    loader: ScenarioLoader,
    comparator: ResultComparator,
}

impl ScenarioEvaluator {
    pub fn new(loader: ScenarioLoader) -> Self {
        Self {
            loader,
            comparator: ResultComparator::new(),
        }
    }

    /// Evaluate one scenario with the given agent.
    pub async fn evaluate(&self, scenario_id: &str, agent: &dyn SreAgent) -> Result<ScenarioReport> {
        info!(scenario = scenario_id, agent = agent.name(), "starting evaluation");
        let scenario = self.loader.load(scenario_id)?;

        let mut timer = EfficiencyTimer::new();
        timer.start();
        let outcome = agent.diagnose(&scenario).await;
        let latency_secs = timer.stop();

        let mut report = ScenarioReport {
            report_id: uuid::Uuid::new_v4(),
            scenario_id: scenario_id.to_string(),
            agent: agent.name().to_string(),
            evaluated_at: Utc::now(),
            scores: None,
            latency_secs,
            agent_output: None,
            error: None,
        };

        match outcome {
            Ok(diagnosis) => {
                match &scenario.ground_truth {
                    Some(truth) => {
                        report.scores =
                            Some(self.comparator.compare(&diagnosis, &truth.diagnosis));
                    }
                    None => {
                        warn!(scenario = scenario_id, "no ground truth, skipping comparison");
                    }
                }
                report.agent_output = Some(diagnosis);
            }
            Err(e) => {
                warn!(scenario = scenario_id, error = %e, "agent failed");
                report.error = Some(e.to_string());
            }
        }

        info!(
            scenario = scenario_id,
            scores = ?report.scores,
            latency_secs = report.latency_secs,
            "finished evaluation"
        );
        Ok(report)
    }

    /// Evaluate every scenario under the loader's base directory, optionally
    /// persisting each report as it completes.
    pub async fn evaluate_all(
        &self,
        agent: &dyn SreAgent,
        writer: Option<&RunWriter>,
    ) -> Result<Vec<ScenarioReport>> {
        let ids = self.loader.list()?;
        let mut reports = Vec::with_capacity(ids.len());
        for id in &ids {
            let report = self.evaluate(id, agent).await?;
            if let Some(writer) = writer {
                writer.write_report(&report)?;
            }
            reports.push(report);
        }
        Ok(reports)
    }
}

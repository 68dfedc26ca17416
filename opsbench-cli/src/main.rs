//! Opsbench CLI — run AI SRE agent evaluations from the terminal.
//!
//! `opsbench run` evaluates scenarios with the configured agent and writes
//! per-scenario reports; `opsbench list` enumerates available scenarios;
//! `opsbench score` compares a pair of JSON files offline.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use opsbench_core::scoring::ResultComparator;
use opsbench_core::{
    Diagnosis, RunWriter, ScenarioEvaluator, ScenarioLoader, ScenarioReport, ScriptedAgent,
    load_config,
};

/// Opsbench: benchmark harness for AI SRE agents
#[derive(Parser, Debug)]
#[command(name = "opsbench", version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./opsbench.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Evaluate scenarios with the configured agent
    Run {
        /// Scenario id to evaluate (all scenarios if omitted)
        scenario: Option<String>,

        /// Override the scenario base directory
        #[arg(long)]
        scenarios_dir: Option<PathBuf>,

        /// Override the results base directory
        #[arg(long)]
        results_dir: Option<PathBuf>,

        /// Print scores without persisting reports
        #[arg(long)]
        no_write: bool,
    },
    /// List available scenario ids
    List {
        /// Override the scenario base directory
        #[arg(long)]
        scenarios_dir: Option<PathBuf>,
    },
    /// Score an agent-output JSON file against a ground-truth JSON file
    Score {
        /// Path to the agent's diagnosis JSON
        agent_output: PathBuf,

        /// Path to the ground-truth diagnosis JSON
        ground_truth: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            scenario,
            scenarios_dir,
            results_dir,
            no_write,
        } => {
            let scenarios_dir = scenarios_dir.unwrap_or(config.scenarios.base_path);
            let results_dir = results_dir.unwrap_or(config.results.base_dir);
            run(scenario, scenarios_dir, results_dir, no_write).await
        }
        Commands::List { scenarios_dir } => {
            let scenarios_dir = scenarios_dir.unwrap_or(config.scenarios.base_path);
            let loader = ScenarioLoader::new(scenarios_dir);
            for id in loader.list()? {
                println!("{id}");
            }
            Ok(())
        }
        Commands::Score {
            agent_output,
            ground_truth,
        } => score(&agent_output, &ground_truth),
    }
}

async fn run(
    scenario: Option<String>,
    scenarios_dir: PathBuf,
    results_dir: PathBuf,
    no_write: bool,
) -> anyhow::Result<()> {
    let evaluator = ScenarioEvaluator::new(ScenarioLoader::new(scenarios_dir));
    let agent = ScriptedAgent::default();

    let writer = if no_write {
        None
    } else {
        Some(RunWriter::create(&results_dir)?)
    };

    let reports = match scenario {
        Some(id) => {
            let report = evaluator.evaluate(&id, &agent).await?;
            if let Some(writer) = &writer {
                writer.write_report(&report)?;
            }
            vec![report]
        }
        None => evaluator.evaluate_all(&agent, writer.as_ref()).await?,
    };

    for report in &reports {
        print_summary(report);
    }
    if let Some(writer) = &writer {
        println!("\nReports written to {}", writer.run_dir().display());
    }
    Ok(())
}

fn print_summary(report: &ScenarioReport) {
    println!("== {} ({})", report.scenario_id, report.agent);
    match &report.scores {
        Some(scores) => {
            println!("  root cause:  {:.3}", scores.rca_root_cause_score);
            println!("  causal graph: {:.3}", scores.rca_causal_graph_score);
            println!("  resolution:  {:.3}", scores.resolution_correctness_score);
        }
        None => match &report.error {
            Some(error) => println!("  agent failed: {error}"),
            None => println!("  no ground truth, comparison skipped"),
        },
    }
    if let Some(latency) = report.latency_secs {
        println!("  latency:     {latency:.2}s");
    }
}

fn score(agent_path: &PathBuf, truth_path: &PathBuf) -> anyhow::Result<()> {
    let agent = read_diagnosis(agent_path)?;
    let truth = read_diagnosis(truth_path)?;
    let scores = ResultComparator::new().compare(&agent, &truth);
    println!("{}", serde_json::to_string_pretty(&scores)?);
    Ok(())
}

fn read_diagnosis(path: &PathBuf) -> anyhow::Result<Diagnosis> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Diagnosis::from_value(&value))
}

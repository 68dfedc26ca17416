//! End-to-end tests for the comparison pipeline using a realistic
//! auth-database incident fixture, plus a full loader -> agent -> comparator
//! -> writer run over a temporary scenario tree.

use pretty_assertions::assert_eq;
use serde_json::json;

use opsbench_core::scoring::{ResultComparator, similarity};
use opsbench_core::{
    Diagnosis, RunWriter, ScenarioEvaluator, ScenarioLoader, ScriptedAgent,
};

fn agent_output() -> Diagnosis {
    Diagnosis::from_value(&json!({
        "root_cause": {
            "type": "Resource Exhaustion",
            "resource_type": "Connection Pool",
            "component": {"kind": "Database", "name": "auth-db", "namespace": "prod"},
            "details": "The connection pool for the authentication database was exhausted due to high login rates.",
        },
        "causal_graph": {
            "nodes": [
                {"id": "n1", "label": "High Login Rate", "type": "External Factor"},
                {"id": "n2", "label": "Auth Service High CPU", "type": "Symptom"},
                {"id": "n3", "label": "Auth DB Connection Exhaustion", "type": "Root Cause"},
            ],
            "edges": [
                {"source": "n1", "target": "n2", "relation": "CAUSES"},
                {"source": "n2", "target": "n3", "relation": "CAUSES"},
            ],
        },
        "resolution": {
            "action_type": "Configuration Change",
            "target_component": {"kind": "Database", "name": "auth-db", "namespace": "prod"},
            "details": "Increase the maximum connection limit for the 'auth-db' connection pool.",
        },
    }))
}

fn ground_truth() -> Diagnosis {
    Diagnosis::from_value(&json!({
        "root_cause": {
            "type": "Resource Exhaustion",
            "resource_type": "Database Connections",
            "component": {"kind": "Database", "name": "auth-db", "namespace": "prod"},
            "details": "Exhaustion of available connections in the authentication database pool.",
        },
        "causal_graph": {
            "nodes": [
                {"id": "gt_n1", "label": "Increased User Logins", "type": "Load Increase"},
                {"id": "gt_n2", "label": "Auth DB Connection Exhaustion", "type": "Resource Bottleneck"},
                {"id": "gt_n3", "label": "Login Latency High", "type": "Performance Impact"},
            ],
            "edges": [
                {"source": "gt_n1", "target": "gt_n2", "relation": "LEADS_TO"},
                {"source": "gt_n2", "target": "gt_n3", "relation": "RESULTS_IN"},
            ],
        },
        "resolution": {
            "action_type": "Scale Resource",
            "target_component": {"kind": "Database", "name": "auth-db", "namespace": "prod"},
            "details": "Adjust the max_connections parameter for the 'auth-db' pool.",
        },
    }))
}

#[test]
fn standard_comparison_matches_recomputed_formula() {
    let scores = ResultComparator::new().compare(&agent_output(), &ground_truth());

    // Root cause: type matches, resource_type differs, component matches,
    // details are a paraphrase. Recompute the weighted sum independently.
    let details = similarity(
        "The connection pool for the authentication database was exhausted due to high login rates.",
        "Exhaustion of available connections in the authentication database pool.",
    );
    let expected_rc = 0.2 * 1.0 + 0.2 * 0.0 + 0.3 * 1.0 + 0.3 * details;
    assert!((scores.rca_root_cause_score - expected_rc).abs() < 1e-12);
    assert!(details > 0.0 && details < 1.0);

    // Causal graph: the exhaustion labels match exactly and "High Login
    // Rate" pairs with "Login Latency High" at the threshold; the remaining
    // labels find no partner. Dice: 2 * 2 / (3 + 3).
    assert!((scores.rca_causal_graph_score - 2.0 / 3.0).abs() < 1e-9);

    // Resolution: action types differ, target components match, details are
    // a paraphrase.
    let res_details = similarity(
        "Increase the maximum connection limit for the 'auth-db' connection pool.",
        "Adjust the max_connections parameter for the 'auth-db' pool.",
    );
    let expected_res = 0.3 * 0.0 + 0.4 * 1.0 + 0.3 * res_details;
    assert!((scores.resolution_correctness_score - expected_res).abs() < 1e-12);

    for score in [
        scores.rca_root_cause_score,
        scores.rca_causal_graph_score,
        scores.resolution_correctness_score,
    ] {
        assert!((0.0..=1.0).contains(&score));
    }
}

#[test]
fn comparison_with_missing_parts_degrades_instead_of_failing() {
    let agent = Diagnosis::from_value(&json!({
        "root_cause": {
            "type": "Resource Exhaustion",
            "component": {"kind": "Database", "name": "auth-db"},
            "details": "The connection pool for the authentication database was exhausted.",
        },
        "causal_graph": {},
        "resolution": {
            "target_component": {"kind": "Database", "name": "auth-db"},
            "details": "Increase the maximum connection limit.",
        },
    }));
    let truth = Diagnosis::from_value(&json!({
        "root_cause": {
            "type": "Resource Exhaustion",
            "resource_type": "Database Connections",
            "component": {"kind": "Database", "name": "auth-db", "namespace": "prod"},
            "details": "Exhaustion of available connections.",
        },
        "causal_graph": {"nodes": [], "edges": []},
        "resolution": {
            "action_type": "Scale Resource",
            "details": "Adjust the max_connections parameter.",
        },
    }));

    let scores = ResultComparator::new().compare(&agent, &truth);

    // Component namespaces are asymmetric (absent vs "prod"), so only the
    // type and details fields contribute to the root-cause score.
    let rc_details = similarity(
        "The connection pool for the authentication database was exhausted.",
        "Exhaustion of available connections.",
    );
    assert!((scores.rca_root_cause_score - (0.2 + 0.3 * rc_details)).abs() < 1e-12);

    // Both causal graphs are empty: vacuous match.
    assert_eq!(scores.rca_causal_graph_score, 1.0);

    // Missing action type and missing ground-truth target component leave
    // only the details weight.
    let res_details = similarity(
        "Increase the maximum connection limit.",
        "Adjust the max_connections parameter.",
    );
    assert!((scores.resolution_correctness_score - 0.3 * res_details).abs() < 1e-12);
}

#[test]
fn empty_inputs_produce_defined_scores() {
    let scores = ResultComparator::new().compare(&Diagnosis::default(), &Diagnosis::default());
    assert_eq!(scores.rca_root_cause_score, 0.0);
    assert_eq!(scores.rca_causal_graph_score, 1.0);
    assert_eq!(scores.resolution_correctness_score, 0.0);
}

#[tokio::test]
async fn full_run_over_scenario_tree() {
    let scenarios = tempfile::tempdir().unwrap();
    let dir = scenarios.path().join("scenario_auth_001");
    std::fs::create_dir_all(dir.join("ground_truth")).unwrap();
    std::fs::write(dir.join("description.md"), "login latency spike").unwrap();
    std::fs::write(
        dir.join("ground_truth/root_cause.json"),
        serde_json::to_string(&ground_truth().root_cause).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("ground_truth/causal_graph.json"),
        serde_json::to_string(&ground_truth().causal_graph).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("ground_truth/resolution.json"),
        serde_json::to_string(&ground_truth().resolution).unwrap(),
    )
    .unwrap();

    let results = tempfile::tempdir().unwrap();
    let writer = RunWriter::create(results.path()).unwrap();
    let agent = ScriptedAgent::with_diagnosis(agent_output());
    let evaluator = ScenarioEvaluator::new(ScenarioLoader::new(scenarios.path()));

    let reports = evaluator.evaluate_all(&agent, Some(&writer)).await.unwrap();
    assert_eq!(reports.len(), 1);

    let report = &reports[0];
    assert_eq!(report.scenario_id, "scenario_auth_001");
    assert_eq!(report.agent, "scripted");
    let scores = report.scores.unwrap();
    assert!((scores.rca_causal_graph_score - 2.0 / 3.0).abs() < 1e-9);

    let written = writer.run_dir().join("scenario_auth_001/results.json");
    let raw = std::fs::read_to_string(written).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["scenario_id"], "scenario_auth_001");
    assert!(parsed["scores"]["rca_root_cause_score"].as_f64().unwrap() > 0.0);
}

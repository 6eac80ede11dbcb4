//! Unit tests for the compare command.

use super::helpers::{Workspace, collinear_request, greedy_trap_request, write_request};
use super::*;
use crate::compare::{CompareArgs, CompareConfig, run_compare_with};
use camino::Utf8PathBuf;
use clap::Parser;
use rstest::rstest;
use serde_json::Value;

fn run_and_parse(args: CompareArgs) -> Value {
    let mut stdout = Vec::new();
    run_compare_with(args, &mut stdout).expect("compare should succeed");
    serde_json::from_slice(&stdout).expect("output should be JSON")
}

#[rstest]
fn converting_compare_without_request_errors() {
    let err = CompareConfig::try_from(CompareArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_COMPARE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn compare_config_carries_exact_ceiling() {
    let args = CompareArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        exact_ceiling: Some(9),
        output: None,
    };
    let config = CompareConfig::try_from(args).expect("config should build");
    assert_eq!(config.optimizer.exact_ceiling, 9);
}

#[rstest]
fn compare_reports_exact_win_and_saving() {
    let workspace = Workspace::new();
    let request_path = workspace.request_path();
    write_request(&request_path, &greedy_trap_request());

    let output = run_and_parse(CompareArgs {
        request_path: Some(request_path),
        ..CompareArgs::default()
    });

    assert_eq!(output["best"], "held-karp");
    assert_eq!(output["bestLabel"], "Dynamic Programming (Held-Karp)");
    let saving = output["distanceSavingPct"].as_f64().expect("saving is a number");
    assert!((saving - 200.0 / 11.0).abs() < 1e-9);

    let results = output["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["algorithm"], "greedy");
    assert_eq!(results[0]["path"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(results[1]["algorithm"], "held-karp");
    assert_eq!(results[1]["path"], serde_json::json!([0, 2, 1, 3]));
    assert!(results[1].get("stepsChecked").is_some());
    assert!(results[1].get("selectedHouses").is_none());
}

#[rstest]
fn compare_ignores_capacity_settings() {
    let workspace = Workspace::new();
    let request_path = workspace.request_path();
    write_request(&request_path, &collinear_request().with_capacity(0));

    let output = run_and_parse(CompareArgs {
        request_path: Some(request_path),
        ..CompareArgs::default()
    });

    assert_eq!(output["best"], "greedy");
    assert_eq!(output["distanceSavingPct"], 0.0);
    let results = output["results"].as_array().expect("results array");
    assert!(
        results
            .iter()
            .all(|entry| entry["path"] == serde_json::json!([0, 1, 2]))
    );
}

#[rstest]
fn compare_subcommand_parses_flags() {
    let cli = Cli::try_parse_from([
        "courier",
        "compare",
        "request.json",
        "--exact-ceiling",
        "4",
        "--output",
        "out.json",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Compare(args) => {
            assert_eq!(args.request_path, Some(Utf8PathBuf::from("request.json")));
            assert_eq!(args.exact_ceiling, Some(4));
            assert_eq!(args.output, Some(Utf8PathBuf::from("out.json")));
        }
        Command::Solve(_) => panic!("expected compare command"),
    }
}

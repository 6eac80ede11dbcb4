//! Compare command implementation for the Courier CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use courier_core::{Algorithm, OptimizationResult};
use courier_solver::{Comparison, DEFAULT_EXACT_CEILING, OptimizerConfig, RouteOptimizer};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::output::emit;
use crate::request::{load_request, require_existing, validate_request};
use crate::{ARG_EXACT_CEILING, ARG_OUTPUT, ARG_REQUEST, CliError, ENV_COMPARE_REQUEST};

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "compare",
    long_about = "Run the greedy and exact tour algorithms on the stops of \
                 a JSON-encoded request and report both tours, the better \
                 algorithm, and the distance saved by the exact tour. The \
                 capacity settings of the request are ignored.",
    about = "Compare the tour algorithms on one request"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct CompareArgs {
    /// Path to a JSON file containing an optimisation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Largest stop count solved exactly before falling back to greedy.
    #[arg(long = ARG_EXACT_CEILING, value_name = "stops")]
    #[serde(default)]
    pub(crate) exact_ceiling: Option<usize>,
    /// Write the comparison to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl CompareArgs {
    pub(crate) fn into_config(self) -> Result<CompareConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CompareConfig::try_from(merged)
    }
}

/// Resolved `compare` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompareConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) optimizer: OptimizerConfig,
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_COMPARE_REQUEST,
        })?;
        Ok(Self {
            request_path,
            output: args.output,
            optimizer: OptimizerConfig {
                exact_ceiling: args.exact_ceiling.unwrap_or(DEFAULT_EXACT_CEILING),
            },
        })
    }
}

/// Wire shape of a [`Comparison`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComparisonPayload<'a> {
    best: Algorithm,
    best_label: &'static str,
    distance_saving_pct: f64,
    results: Vec<EntryPayload<'a>>,
}

#[derive(Debug, Serialize)]
struct EntryPayload<'a> {
    algorithm: Algorithm,
    label: &'static str,
    #[serde(flatten)]
    result: &'a OptimizationResult,
}

impl<'a> From<&'a Comparison> for ComparisonPayload<'a> {
    fn from(comparison: &'a Comparison) -> Self {
        Self {
            best: comparison.best,
            best_label: comparison.best.label(),
            distance_saving_pct: comparison.distance_saving_pct,
            results: comparison
                .entries
                .iter()
                .map(|entry| EntryPayload {
                    algorithm: entry.algorithm,
                    label: entry.algorithm.label(),
                    result: &entry.result,
                })
                .collect(),
        }
    }
}

pub(super) fn run_compare(args: CompareArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_compare_with(args, &mut stdout)
}

pub(super) fn run_compare_with(args: CompareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.request_path, ARG_REQUEST)?;

    let request = load_request(&config.request_path)?;
    validate_request(&request, &config.request_path)?;

    let comparison = RouteOptimizer::with_config(config.optimizer).compare(&request.stops);
    log::info!(
        "compared {} stops: {} wins, saving {:.2}%",
        request.stops.len(),
        comparison.best.label(),
        comparison.distance_saving_pct
    );
    emit(
        config.output.as_deref(),
        writer,
        &ComparisonPayload::from(&comparison),
    )
}

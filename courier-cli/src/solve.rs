//! Solve command implementation for the Courier CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use courier_core::{Algorithm, OptimizationRequest, OptimizationResult};
use courier_solver::{DEFAULT_EXACT_CEILING, OptimizerConfig, RouteOptimizer};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::output::emit;
use crate::request::{load_request, require_existing, validate_request};
use crate::{
    ARG_ALGORITHM, ARG_CAPACITY, ARG_EXACT_CEILING, ARG_OUTPUT, ARG_REQUEST, ARG_USE_CAPACITY,
    CliError, ENV_SOLVE_REQUEST,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Optimise a delivery route from a JSON-encoded request. \
                 The request names the stops (depot first), the algorithm, \
                 and an optional capacity budget; the flags below override \
                 the values found in the file.",
    about = "Optimise a delivery route"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing an optimisation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Override the tour algorithm (`greedy` or `held-karp`).
    #[arg(long = ARG_ALGORITHM, value_name = "name")]
    #[serde(default)]
    pub(crate) algorithm: Option<Algorithm>,
    /// Override the capacity budget.
    #[arg(long = ARG_CAPACITY, value_name = "weight")]
    #[serde(default)]
    pub(crate) capacity: Option<u32>,
    /// Enable or disable the capacity filter.
    #[arg(
        long = ARG_USE_CAPACITY,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) use_capacity: Option<bool>,
    /// Largest stop count solved exactly before falling back to greedy.
    #[arg(long = ARG_EXACT_CEILING, value_name = "stops")]
    #[serde(default)]
    pub(crate) exact_ceiling: Option<usize>,
    /// Write the result to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Where to write the result; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Values that replace the ones in the request file.
    pub(crate) overrides: RequestOverrides,
    /// Optimiser settings.
    pub(crate) optimizer: OptimizerConfig,
}

/// Request fields set from configuration rather than the request file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RequestOverrides {
    pub(crate) algorithm: Option<Algorithm>,
    pub(crate) capacity: Option<u32>,
    pub(crate) use_capacity: Option<bool>,
}

impl RequestOverrides {
    /// Replace every field of `request` that has an override.
    pub(crate) fn apply(self, mut request: OptimizationRequest) -> OptimizationRequest {
        if let Some(algorithm) = self.algorithm {
            request.algorithm = algorithm;
        }
        if let Some(capacity) = self.capacity {
            request.capacity = capacity;
        }
        if let Some(enabled) = self.use_capacity {
            request.use_capacity_constraint = enabled;
        }
        request
    }
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;
        let optimizer = OptimizerConfig {
            exact_ceiling: args.exact_ceiling.unwrap_or(DEFAULT_EXACT_CEILING),
        };

        Ok(Self {
            request_path,
            output: args.output,
            overrides: RequestOverrides {
                algorithm: args.algorithm,
                capacity: args.capacity,
                use_capacity: args.use_capacity,
            },
            optimizer,
        })
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &mut stdout)
}

pub(super) fn run_solve_with(args: SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let result = execute_solve(&config)?;
    emit(config.output.as_deref(), writer, &result)
}

fn execute_solve(config: &SolveConfig) -> Result<OptimizationResult, CliError> {
    let request = config.overrides.apply(load_request(&config.request_path)?);
    validate_request(&request, &config.request_path)?;

    let optimizer = RouteOptimizer::with_config(config.optimizer);
    let result = optimizer.optimize(&request);
    log::info!(
        "solved {} stops with {} in {:?} ({} steps)",
        request.stops.len(),
        request.algorithm.label(),
        result.computation_time,
        result.steps_checked
    );
    Ok(result)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}

//! Solve command implementation for the algorithms CLI.

use std::io::{BufReader, Write};

use algorithms_core::Solver;
use algorithms_knapsack::{KnapsackRequest, KnapsackResult, KnapsackSolver};
use algorithms_paths::{ShortestPathRequest, ShortestPathResult, ShortestPathSolver};
use algorithms_queens::{NQueensRequest, NQueensResult, NQueensSolver};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_FORMAT, ARG_MAX_BOARD_SIZE, ARG_MAX_CAPACITY, ARG_MAX_NODES, ARG_PROBLEM, ARG_REQUEST,
    CliError, ENV_PROBLEM, ENV_REQUEST,
};

/// Largest knapsack capacity accepted by default.
pub(crate) const DEFAULT_MAX_CAPACITY: usize = 1_000_000;
/// Largest N-Queens board accepted by default.
pub(crate) const DEFAULT_MAX_BOARD_SIZE: usize = 64;
/// Largest graph accepted by default.
pub(crate) const DEFAULT_MAX_NODES: usize = 100_000;

/// Problems the CLI can solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Problem {
    /// 0/1 and fractional knapsack.
    Knapsack,
    /// N-Queens with blocked cells.
    NQueens,
    /// Single-source shortest paths.
    ShortestPath,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// The human-readable rendering carried by each result.
    Text,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Solve a knapsack, N-Queens or shortest-path instance. The \
                 request is read from a JSON file; the problem kind, output \
                 format and size limits can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Solve a problem instance read from JSON"
)]
#[ortho_config(prefix = "ALGORITHMS")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing the request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Which problem the request describes.
    #[arg(long = ARG_PROBLEM, value_enum)]
    #[serde(default)]
    pub(crate) problem: Option<Problem>,
    /// Output format (defaults to JSON).
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Largest accepted knapsack capacity.
    #[arg(long = ARG_MAX_CAPACITY, value_name = "capacity")]
    #[serde(default)]
    pub(crate) max_capacity: Option<usize>,
    /// Largest accepted N-Queens board size.
    #[arg(long = ARG_MAX_BOARD_SIZE, value_name = "n")]
    #[serde(default)]
    pub(crate) max_board_size: Option<usize>,
    /// Largest accepted graph node count.
    #[arg(long = ARG_MAX_NODES, value_name = "n")]
    #[serde(default)]
    pub(crate) max_nodes: Option<usize>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Input-size limits applied before any engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Limits {
    pub(crate) max_capacity: usize,
    pub(crate) max_board_size: usize,
    pub(crate) max_nodes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            max_board_size: DEFAULT_MAX_BOARD_SIZE,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Problem the request describes.
    pub(crate) problem: Problem,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Size limits.
    pub(crate) limits: Limits,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::RequestPathNotFile { path: path.clone() }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingRequestFile { path: path.clone() })
            }
            Err(source) => Err(CliError::InspectRequestPath {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        let problem = args.problem.ok_or(CliError::MissingArgument {
            field: ARG_PROBLEM,
            env: ENV_PROBLEM,
        })?;
        let defaults = Limits::default();
        Ok(Self {
            request_path,
            problem,
            format: args.format.unwrap_or_default(),
            limits: Limits {
                max_capacity: args.max_capacity.unwrap_or(defaults.max_capacity),
                max_board_size: args.max_board_size.unwrap_or(defaults.max_board_size),
                max_nodes: args.max_nodes.unwrap_or(defaults.max_nodes),
            },
        })
    }
}

/// Rejects requests too large for the configured limits.
pub(crate) trait WithinLimits {
    fn check_limits(&self, limits: &Limits) -> Result<(), CliError>;
}

fn ensure_at_most(field: &'static str, value: usize, limit: usize) -> Result<(), CliError> {
    if value > limit {
        return Err(CliError::LimitExceeded {
            field,
            value,
            limit,
        });
    }
    Ok(())
}

impl WithinLimits for KnapsackRequest {
    fn check_limits(&self, limits: &Limits) -> Result<(), CliError> {
        ensure_at_most("capacity", self.capacity, limits.max_capacity)
    }
}

impl WithinLimits for NQueensRequest {
    fn check_limits(&self, limits: &Limits) -> Result<(), CliError> {
        ensure_at_most("n", self.n, limits.max_board_size)
    }
}

impl WithinLimits for ShortestPathRequest {
    fn check_limits(&self, limits: &Limits) -> Result<(), CliError> {
        ensure_at_most("n", self.n, limits.max_nodes)
    }
}

/// Text rendering shared by every result type.
pub(crate) trait TextOutput {
    fn message(&self) -> &str;
    fn formatted_output(&self) -> &str;
}

impl TextOutput for KnapsackResult {
    fn message(&self) -> &str {
        &self.message
    }

    fn formatted_output(&self) -> &str {
        &self.formatted_output
    }
}

impl TextOutput for NQueensResult {
    fn message(&self) -> &str {
        &self.message
    }

    fn formatted_output(&self) -> &str {
        &self.formatted_output
    }
}

impl TextOutput for ShortestPathResult {
    fn message(&self) -> &str {
        &self.message
    }

    fn formatted_output(&self) -> &str {
        &self.formatted_output
    }
}

pub(super) fn run_solve_with(args: SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    match config.problem {
        Problem::Knapsack => solve_and_write::<KnapsackSolver>(&config, writer),
        Problem::NQueens => solve_and_write::<NQueensSolver>(&config, writer),
        Problem::ShortestPath => solve_and_write::<ShortestPathSolver>(&config, writer),
    }
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn solve_and_write<S>(config: &SolveConfig, writer: &mut dyn Write) -> Result<(), CliError>
where
    S: Solver,
    S::Request: DeserializeOwned + WithinLimits,
    S::Solution: Serialize + TextOutput,
{
    let request: S::Request = load_request(&config.request_path)?;
    request.check_limits(&config.limits)?;
    log::info!(
        "solving {:?} request from {}",
        config.problem,
        config.request_path
    );
    let solution = algorithms_core::run::<S>(&request)?;
    write_solution(writer, &solution, config.format)
}

/// Loads a JSON-encoded request from disk.
pub(super) fn load_request<R: DeserializeOwned>(path: &Utf8Path) -> Result<R, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_solution<T: Serialize + TextOutput>(
    writer: &mut dyn Write,
    solution: &T,
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(solution).map_err(CliError::SerializeResult)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => format!("{}\n{}", solution.message(), solution.formatted_output()),
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}

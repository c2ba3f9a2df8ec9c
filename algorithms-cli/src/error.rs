//! Error types emitted by the algorithms CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use algorithms_core::ValidationError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Process exit code for failures caused by the caller's input.
pub const EXIT_CLIENT_ERROR: u8 = 2;
/// Process exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Errors emitted by the algorithms CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// The request path does not exist.
    #[error("request path {path:?} does not exist")]
    MissingRequestFile {
        /// Path that was given.
        path: Utf8PathBuf,
    },
    /// The request path exists but is not a file.
    #[error("request path {path:?} exists but is not a file")]
    RequestPathNotFile {
        /// Path that was given.
        path: Utf8PathBuf,
    },
    /// The request path could not be inspected.
    #[error("failed to inspect request path {path:?}: {source}")]
    InspectRequestPath {
        /// Path that was given.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        /// Path that was given.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The request JSON could not be decoded.
    #[error("could not parse request body at {path:?}: {source}")]
    ParseRequest {
        /// Path that was given.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The request exceeds a configured size limit.
    #[error("{field} {value} exceeds the configured limit of {limit}")]
    LimitExceeded {
        /// Request field that is too large.
        field: &'static str,
        /// Value found in the request.
        value: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// The engine rejected the request.
    #[error("{source}")]
    InvalidRequest {
        /// Validation failure raised by the engine.
        #[from]
        source: ValidationError,
    },
    /// Serializing the result failed.
    #[error("failed to serialize result: {0}")]
    SerializeResult(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl CliError {
    /// Whether the failure was caused by the caller's input rather than by
    /// the environment.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ArgumentParsing(_)
                | Self::MissingArgument { .. }
                | Self::MissingRequestFile { .. }
                | Self::RequestPathNotFile { .. }
                | Self::ParseRequest { .. }
                | Self::LimitExceeded { .. }
                | Self::InvalidRequest { .. }
        )
    }

    /// Exit code the process should terminate with.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_client_error() {
            EXIT_CLIENT_ERROR
        } else {
            EXIT_FAILURE
        }
    }
}

//! Error types emitted by the Wayfinder CLI.
//!
//! Keep this error type reasonably small, as most CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfinder_core::FacetParseError;

/// Errors emitted by the Wayfinder CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing flag.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The requested facet identifier is not recognised.
    #[error(transparent)]
    InvalidFacet(#[from] FacetParseError),
    /// The places file does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the argument holding the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// The places path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the argument holding the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// The places path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the argument holding the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the places file failed.
    #[error("failed to read places from {path:?}: {source}")]
    ReadPlaces {
        /// Path of the places file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The places file is not a JSON array of places.
    #[error("failed to parse places in {path:?}: {source}")]
    ParsePlaces {
        /// Path of the places file.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

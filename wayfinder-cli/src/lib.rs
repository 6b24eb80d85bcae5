//! Command-line interface for curating point-of-interest batches.
//!
//! Each subcommand reads a JSON array of places, runs one of the
//! `wayfinder-core` pipelines over it and writes pretty JSON to stdout.
//! Arguments layer over configuration files and `WAYFINDER_CMDS_*`
//! environment variables through `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use wayfinder_core::{Place, prompt_text};

mod error;
mod nearby;
mod search;

pub use error::CliError;

use nearby::NearbyArgs;
use search::SearchArgs;

pub(crate) const ARG_PLACES: &str = "places";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_FACET: &str = "facet";
pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ENV_SEARCH_PLACES: &str = "WAYFINDER_CMDS_SEARCH_PLACES";
pub(crate) const ENV_SEARCH_QUERY: &str = "WAYFINDER_CMDS_SEARCH_QUERY";
pub(crate) const ENV_NEARBY_PLACES: &str = "WAYFINDER_CMDS_NEARBY_PLACES";
pub(crate) const ENV_NEARBY_LATITUDE: &str = "WAYFINDER_CMDS_NEARBY_LATITUDE";
pub(crate) const ENV_NEARBY_LONGITUDE: &str = "WAYFINDER_CMDS_NEARBY_LONGITUDE";

/// Run the Wayfinder CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Search(args) => search::run_search(args, writer),
        Command::Nearby(args) => nearby::run_nearby(args, writer),
        Command::Ascii(args) => write_ascii(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfinder",
    about = "Rank, deduplicate and filter point-of-interest search results",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank verified places for a free-text query and filter them by facet.
    Search(SearchArgs),
    /// Suggest the closest distinct places around a centre.
    Nearby(NearbyArgs),
    /// Print the ASCII-safe form of some text.
    Ascii(AsciiArgs),
}

/// CLI arguments for the `ascii` subcommand.
#[derive(Debug, Clone, Args)]
struct AsciiArgs {
    /// Text to convert.
    #[arg(value_name = "text")]
    text: String,
}

/// Write the ASCII-safe form of the text, or nothing when none exists.
fn write_ascii(args: &AsciiArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let Some(safe) = prompt_text(&args.text) else {
        return Ok(());
    };
    writeln!(writer, "{safe}").map_err(CliError::WriteOutput)
}

/// Ensure `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match wayfinder_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON array of places from disk.
pub(crate) fn load_places(path: &Utf8Path) -> Result<Vec<Place>, CliError> {
    let contents = wayfinder_fs::read_utf8_file(path).map_err(|source| CliError::ReadPlaces {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParsePlaces {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

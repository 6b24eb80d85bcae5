//! Search command implementation for the Wayfinder CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfinder_core::{DEFAULT_SEARCH_LIMIT, Facet, FacetSelection, RankedPlace, search};

use crate::{
    ARG_FACET, ARG_LIMIT, ARG_PLACES, ARG_QUERY, CliError, ENV_SEARCH_PLACES, ENV_SEARCH_QUERY,
    load_places, require_existing, write_json,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "search",
    long_about = "Rank the verified places in a JSON batch for a free-text \
                 query. Category relevance dominates, then how well the name \
                 matches, then the name itself. The ranked results can be \
                 narrowed to one facet.",
    about = "Rank places for a free-text query"
)]
#[ortho_config(prefix = "WAYFINDER")]
pub(crate) struct SearchArgs {
    /// Path to a JSON array of places.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Text to search for.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Maximum number of results before facet filtering.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Facet to filter by: `all`, `uncategorized` or a category tag.
    #[arg(long = ARG_FACET, value_name = "id")]
    #[serde(default)]
    pub(crate) facet: Option<String>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) places: Utf8PathBuf,
    pub(crate) query: String,
    pub(crate) limit: usize,
    pub(crate) facet: Facet,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_SEARCH_PLACES,
        })?;
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_SEARCH_QUERY,
        })?;
        let facet = args
            .facet
            .as_deref()
            .map(str::parse::<Facet>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            places,
            query,
            limit: args.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            facet,
        })
    }
}

/// Output of the `search` command.
#[derive(Debug, Serialize)]
pub(crate) struct SearchReport {
    /// Facets offered for the ranked results.
    pub(crate) facets: Vec<Facet>,
    /// Facet actually applied.
    pub(crate) selected: Facet,
    /// Ranked results belonging to the selected facet.
    pub(crate) results: Vec<RankedPlace>,
}

pub(crate) fn run_search(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_search(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_search(config: &SearchConfig) -> Result<SearchReport, CliError> {
    require_existing(&config.places, ARG_PLACES)?;
    let places = load_places(&config.places)?;
    let results = search(places, &config.query, config.limit);
    Ok(select_facet(results, config.facet))
}

/// Derive facets for `results` and filter by `facet` when it is offered.
///
/// A facet absent from the results falls back to [`Facet::All`].
pub(crate) fn select_facet(results: Vec<RankedPlace>, facet: Facet) -> SearchReport {
    let mut selection = FacetSelection::new();
    selection.rebuild(&results);
    if !selection.select(facet) {
        warn!("facet '{facet}' matches no results; showing all");
    }
    SearchReport {
        facets: selection.facets().to_vec(),
        selected: selection.selected(),
        results: selection.apply(results),
    }
}

//! Nearby suggestions command for the Wayfinder CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfinder_core::{Coordinate, DEFAULT_SUGGESTION_LIMIT, nearby_suggestions};

use crate::{
    ARG_LATITUDE, ARG_LIMIT, ARG_LONGITUDE, ARG_PLACES, CliError, ENV_NEARBY_LATITUDE,
    ENV_NEARBY_LONGITUDE, ENV_NEARBY_PLACES, load_places, require_existing, write_json,
};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "nearby",
    long_about = "Suggest the places closest to a centre. Same-named places \
                 within 75 meters of each other collapse onto the closest, \
                 unnamed places are skipped and names are made ASCII-safe.",
    about = "Suggest the closest distinct places"
)]
#[ortho_config(prefix = "WAYFINDER")]
pub(crate) struct NearbyArgs {
    /// Path to a JSON array of places.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Latitude of the centre in degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the centre in degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Maximum number of suggestions.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    pub(crate) places: Utf8PathBuf,
    pub(crate) center: Coordinate,
    pub(crate) limit: usize,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_NEARBY_PLACES,
        })?;
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_NEARBY_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_NEARBY_LONGITUDE,
        })?;
        Ok(Self {
            places,
            center: Coordinate::new(latitude, longitude),
            limit: args.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        })
    }
}

pub(crate) fn run_nearby(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let names = execute_nearby(&config)?;
    write_json(writer, &names)
}

pub(crate) fn execute_nearby(config: &NearbyConfig) -> Result<Vec<String>, CliError> {
    require_existing(&config.places, ARG_PLACES)?;
    let places = load_places(&config.places)?;
    Ok(nearby_suggestions(places, config.center, config.limit))
}

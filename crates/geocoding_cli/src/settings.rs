//! Configuration loading
//!
//! Sources, lowest precedence first: built-in defaults, the config file
//! (`geocoding.toml` in the working directory unless a path is given),
//! `GEOCODING_*` environment variables, then command-line overrides.

use std::path::Path;

use geocoding::GeoConfig;
use tracing::debug;

/// Environment variable prefix, e.g. `GEOCODING_API_KEY`
pub const ENV_PREFIX: &str = "GEOCODING";

/// Values given on the command line, applied last
#[derive(Debug, Default)]
pub struct Overrides {
    /// Map API key
    pub api_key: Option<String>,
    /// Response language
    pub language: Option<String>,
}

/// Load the geocoding configuration
///
/// A missing default file is fine; a missing explicit file is an error.
pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<GeoConfig, config::ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("geocoding").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let mut geo: GeoConfig = builder.build()?.try_deserialize()?;

    if let Some(key) = overrides.api_key {
        geo.api_key = key.into();
    }
    if let Some(language) = overrides.language {
        geo.language = language;
    }

    debug!(config = ?geo, "Loaded geocoding configuration");
    Ok(geo)
}

//! Request URL construction

use url::Url;

use crate::config::{CHARSET, GeoConfig};
use crate::error::GeoError;

/// What a geocoding request looks up
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Free-text address (`q` parameter)
    Address(&'a str),
    /// Latitude/longitude pair (`ll` parameter)
    Reverse {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    },
}

impl Lookup<'_> {
    /// The text attached to every address derived from this lookup
    #[must_use]
    pub fn query(&self) -> String {
        match self {
            Self::Address(query) => (*query).to_string(),
            Self::Reverse {
                latitude,
                longitude,
            } => format!("{latitude},{longitude}"),
        }
    }

    const fn param_name(&self) -> &'static str {
        match self {
            Self::Address(_) => "q",
            Self::Reverse { .. } => "ll",
        }
    }
}

/// Build the geocoding request URL for a lookup
///
/// # Errors
///
/// Returns [`GeoError::ConfigurationError`] if the configured base URL does
/// not parse.
pub fn geocode_url(config: &GeoConfig, lookup: &Lookup<'_>) -> Result<Url, GeoError> {
    let mut url = parse_base(&config.base_url)?;
    url.query_pairs_mut()
        .append_pair(lookup.param_name(), &lookup.query())
        .append_pair("key", config.key())
        .append_pair("output", "xml")
        .append_pair("hl", &config.language)
        .append_pair("oe", CHARSET);
    Ok(url)
}

/// Build the street view panorama lookup URL for a location
///
/// # Errors
///
/// Returns [`GeoError::ConfigurationError`] if the configured street view
/// URL does not parse.
pub fn street_view_url(config: &GeoConfig, latitude: f64, longitude: f64) -> Result<Url, GeoError> {
    let mut url = parse_base(&config.street_view_url)?;
    url.query_pairs_mut()
        .append_pair("output", "xml")
        .append_pair("oe", CHARSET)
        .append_pair("cb_client", "api")
        .append_pair("ll", &format!("{latitude},{longitude}"));
    Ok(url)
}

/// Request URL with the key replaced, for logging
#[must_use]
pub fn redacted(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                "[REDACTED]".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut url = url.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}

fn parse_base(base: &str) -> Result<Url, GeoError> {
    Url::parse(base).map_err(|e| GeoError::ConfigurationError(format!("invalid URL {base:?}: {e}")))
}

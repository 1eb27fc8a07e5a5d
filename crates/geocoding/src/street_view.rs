//! Street view panoramas
//!
//! Looks up the panorama closest to a location and renders the legacy
//! flash embed tag for it. The map key is always taken from the caller's
//! [`GeoConfig`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};
use url::form_urlencoded;

use crate::address::Address;
use crate::client::validate_coordinates;
use crate::config::GeoConfig;
use crate::error::GeoError;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::request;

/// Flash panorama viewer
const VIEWER_URL: &str = "http://maps.google.com/mapfiles/cb/googlepano.066.swf";

const DIRECTION_MAP: &str = "N:N,W:W,S:S,E:E,NW:NW,NE:NE,SW:SW,SE:SE";

#[allow(clippy::expect_used)]
static PANO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bpano_id="([A-Za-z0-9_-]+)""#).expect("valid pano_id regex"));

#[allow(clippy::expect_used)]
static LAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\blat="([^"]+)""#).expect("valid lat regex"));

#[allow(clippy::expect_used)]
static LNG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\blng="([^"]+)""#).expect("valid lng regex"));

/// A street view panorama
#[derive(Debug, Clone, PartialEq)]
pub struct Panorama {
    /// Panorama identifier
    pub pano_id: String,
    /// Latitude of the camera
    pub latitude: f64,
    /// Longitude of the camera
    pub longitude: f64,
}

impl Panorama {
    /// Read a panorama from a `cbk` response body
    ///
    /// Returns `None` when the body names no panorama. The camera position
    /// falls back to the requested location when the body omits it.
    #[must_use]
    pub fn from_body(body: &str, latitude: f64, longitude: f64) -> Option<Self> {
        let pano_id = PANO_ID.captures(body)?.get(1)?.as_str().to_string();
        let attribute = |re: &Regex| {
            re.captures(body)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok())
        };

        Some(Self {
            pano_id,
            latitude: attribute(&LAT).unwrap_or(latitude),
            longitude: attribute(&LNG).unwrap_or(longitude),
        })
    }

    /// Render the `<embed>` tag showing this panorama
    #[must_use]
    pub fn embed_html(&self, key: &str, width: u32, height: u32) -> String {
        let vars: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("panoId", &self.pano_id)
            .append_pair("directionMap", DIRECTION_MAP)
            .append_pair("yaw", "0")
            .append_pair("pitch", "0")
            .append_pair("zoom", "0")
            .append_pair("lat", &self.latitude.to_string())
            .append_pair("lng", &self.longitude.to_string())
            .append_pair("key", key)
            .finish();

        format!(
            r##"<embed src="{VIEWER_URL}" type="application/x-shockwave-flash" quality="high" wmode="opaque" bgcolor="#000000" allowfullscreen="true" allowscriptaccess="always" width="{width}" height="{height}" flashvars="{}"></embed>"##,
            vars.replace('&', "&amp;")
        )
    }
}

/// Street view panorama lookups
#[derive(Debug)]
pub struct StreetView<F = HttpFetcher> {
    fetcher: F,
    config: GeoConfig,
}

impl StreetView<HttpFetcher> {
    /// Create a lookup that fetches over HTTP
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: GeoConfig) -> Result<Self, GeoError> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: Fetcher> StreetView<F> {
    /// Create a lookup with a custom fetcher
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_fetcher(config: GeoConfig, fetcher: F) -> Result<Self, GeoError> {
        config.validate()?;
        Ok(Self { fetcher, config })
    }

    /// Find the panorama closest to a location
    #[instrument(skip(self))]
    pub async fn locate(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Panorama>, GeoError> {
        validate_coordinates(latitude, longitude)?;

        let url = request::street_view_url(&self.config, latitude, longitude)?;
        debug!(%url, "Looking up street view panorama");

        let body = self.fetcher.fetch(url.as_str()).await?;
        let panorama = Panorama::from_body(&body, latitude, longitude);

        debug!(found = panorama.is_some(), "Street view lookup finished");
        Ok(panorama)
    }

    /// Find the panorama closest to a geocoded address
    pub async fn for_address(&self, address: &Address) -> Result<Option<Panorama>, GeoError> {
        self.locate(address.latitude(), address.longitude()).await
    }

    /// Embed tag for the panorama closest to a location, if there is one
    pub async fn embed(
        &self,
        latitude: f64,
        longitude: f64,
        width: u32,
        height: u32,
    ) -> Result<Option<String>, GeoError> {
        Ok(self
            .locate(latitude, longitude)
            .await?
            .map(|panorama| panorama.embed_html(self.config.key(), width, height)))
    }
}

//! Geocoding client
//!
//! Wires URL construction, the [`Fetcher`] and response parsing together.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::address::Address;
use crate::config::GeoConfig;
use crate::error::GeoError;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::request::{self, Lookup};
use crate::response::parse_addresses;

/// Trait for geocoding clients
#[async_trait]
pub trait GeoClient: Send + Sync {
    /// Resolve a free-form address into every matching location
    ///
    /// Always returns a list; vague queries may match several places.
    async fn locate(&self, query: &str) -> Result<Vec<Address>, GeoError>;

    /// Resolve a coordinate pair into the addresses found there
    async fn reverse_locate(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Address>, GeoError>;
}

/// Google Maps geocoding client
#[derive(Debug)]
pub struct GoogleGeoClient<F = HttpFetcher> {
    fetcher: F,
    config: GeoConfig,
}

impl GoogleGeoClient<HttpFetcher> {
    /// Create a client that fetches over HTTP
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

impl<F: Fetcher> GoogleGeoClient<F> {
    /// Create a client with a custom fetcher
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_fetcher(config: GeoConfig, fetcher: F) -> Result<Self, GeoError> {
        config.validate()?;
        Ok(Self { fetcher, config })
    }

    /// The client configuration
    #[must_use]
    pub const fn config(&self) -> &GeoConfig {
        &self.config
    }

    async fn lookup(&self, lookup: Lookup<'_>) -> Result<Vec<Address>, GeoError> {
        let url = request::geocode_url(&self.config, &lookup)?;
        debug!(url = %request::redacted(&url), "Sending geocoding request");

        let body = self.fetcher.fetch(url.as_str()).await?;
        let addresses = parse_addresses(&body, &lookup.query(), self.config.key())?;

        debug!(count = addresses.len(), "Geocoding request resolved");
        Ok(addresses)
    }
}

/// Check that a coordinate pair is on the globe
pub(crate) fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), GeoError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoError::InvalidCoordinates);
    }
    Ok(())
}

#[async_trait]
impl<F: Fetcher> GeoClient for GoogleGeoClient<F> {
    #[instrument(skip(self))]
    async fn locate(&self, query: &str) -> Result<Vec<Address>, GeoError> {
        self.lookup(Lookup::Address(query)).await
    }

    #[instrument(skip(self))]
    async fn reverse_locate(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Address>, GeoError> {
        validate_coordinates(latitude, longitude)?;
        self.lookup(Lookup::Reverse {
            latitude,
            longitude,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::fetch::MockFetcher;

    const SUCCESS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://earth.google.com/kml/2.0"><Response>
  <name>1600 Amphitheatre Parkway, Mountain View, CA</name>
  <Status><code>200</code><request>geocode</request></Status>
  <Placemark id="p1">
    <address>1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA</address>
    <AddressDetails Accuracy="8" xmlns="urn:oasis:names:tc:ciq:xsdschema:xAL:2.0"><Country><CountryNameCode>US</CountryNameCode><AdministrativeArea><AdministrativeAreaName>CA</AdministrativeAreaName><SubAdministrativeArea><SubAdministrativeAreaName>Santa Clara</SubAdministrativeAreaName><Locality><LocalityName>Mountain View</LocalityName><Thoroughfare><ThoroughfareName>1600 Amphitheatre Pkwy</ThoroughfareName></Thoroughfare><PostalCode><PostalCodeNumber>94043</PostalCodeNumber></PostalCode></Locality></SubAdministrativeArea></AdministrativeArea></Country></AddressDetails>
    <Point><coordinates>-122.083739,37.423021,0</coordinates></Point>
  </Placemark>
</Response></kml>"#;

    fn client_returning(body: &'static str) -> GoogleGeoClient<MockFetcher> {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(move |_| Ok(body.to_string()));
        GoogleGeoClient::with_fetcher(GeoConfig::for_testing(), fetcher).unwrap()
    }

    #[tokio::test]
    async fn test_locate_success() {
        let client = client_returning(SUCCESS);
        let query = "1600 Amphitheatre Parkway, Mountain View, CA";

        let addresses = client.locate(query).await.unwrap();
        assert_eq!(addresses.len(), 1);

        let address = &addresses[0];
        assert_eq!(address.street(), Some("1600 Amphitheatre Pkwy"));
        assert_eq!(address.accuracy(), 8);
        assert_eq!(address.query(), query);
    }

    #[tokio::test]
    async fn test_locate_sends_escaped_query() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .with(function(|url: &str| {
                url.starts_with("http://maps.google.com/maps/geo?q=1600+Amphitheatre+Parkway")
                    && url.contains("key=API_KEY")
                    && url.contains("output=xml")
                    && url.contains("hl=en")
                    && url.contains("oe=utf-8")
            }))
            .times(1)
            .returning(|_| Ok(SUCCESS.to_string()));
        let client = GoogleGeoClient::with_fetcher(GeoConfig::for_testing(), fetcher).unwrap();

        assert!(
            client
                .locate("1600 Amphitheatre Parkway, Mountain View, CA")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_locate_unknown_address() {
        let client = client_returning(
            "<kml><Response><name>foo</name><Status><code>602</code></Status></Response></kml>",
        );
        let err = client.locate("foo").await.unwrap_err();
        assert!(matches!(err, GeoError::UnknownAddress { .. }));
    }

    #[tokio::test]
    async fn test_invalid_map_key_carries_key() {
        let client = client_returning("<name>foo</name><code>610</code>");
        let err = client.locate("foo").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid map key: API_KEY");
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Err(GeoError::Timeout));
        let client = GoogleGeoClient::with_fetcher(GeoConfig::for_testing(), fetcher).unwrap();

        assert!(matches!(
            client.locate("foo").await,
            Err(GeoError::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_reverse_locate_uses_coordinate_query() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .with(function(|url: &str| url.contains("ll=33.998671%2C-118.075926")))
            .times(1)
            .returning(|_| {
                Ok("<name>33.998671,-118.075926</name><code>200</code>\
                    <Placemark id=\"p1\"><address>4952-4958 Tobias Ave, Pico Rivera, CA 90660, USA</address>\
                    <coordinates>-118.0760384,33.9986972,0</coordinates></Placemark>"
                    .to_string())
            });
        let client = GoogleGeoClient::with_fetcher(GeoConfig::for_testing(), fetcher).unwrap();

        let addresses = client.reverse_locate(33.998_671, -118.075_926).await.unwrap();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].query(), "33.998671,-118.075926");
        assert!((addresses[0].latitude() - 33.998_697_2).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_reverse_locate_rejects_invalid_coordinates() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().times(0);
        let client = GoogleGeoClient::with_fetcher(GeoConfig::for_testing(), fetcher).unwrap();

        assert!(matches!(
            client.reverse_locate(91.0, 0.0).await,
            Err(GeoError::InvalidCoordinates)
        ));
        assert!(matches!(
            client.reverse_locate(0.0, -180.5).await,
            Err(GeoError::InvalidCoordinates)
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeoConfig {
            timeout_secs: 0,
            ..GeoConfig::for_testing()
        };
        assert!(GoogleGeoClient::with_fetcher(config, MockFetcher::new()).is_err());
    }
}

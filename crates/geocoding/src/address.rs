//! Address records extracted from placemarks

use std::fmt;

use serde::Serialize;

use crate::error::GeoError;
use crate::xml::{self, Element};

/// A coordinate triple in the service's order: longitude, latitude, elevation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Elevation in meters
    pub elevation: f64,
}

impl Coordinates {
    /// Create a new coordinate triple
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, elevation: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation,
        }
    }

    /// Parse `longitude,latitude,elevation`
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MalformedResponse`] unless the text splits into
    /// exactly three finite floating-point numbers.
    pub fn parse(text: &str) -> Result<Self, GeoError> {
        let values = text
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| GeoError::MalformedResponse(format!("invalid coordinates {text:?}: {e}")))?;

        if values.iter().any(|value| !value.is_finite()) {
            return Err(GeoError::MalformedResponse(format!(
                "non-finite coordinates: {text:?}"
            )));
        }

        match values.as_slice() {
            &[longitude, latitude, elevation] => Ok(Self::new(longitude, latitude, elevation)),
            _ => Err(GeoError::MalformedResponse(format!(
                "expected 3 coordinate components, got {}: {text:?}",
                values.len()
            ))),
        }
    }

    /// The triple as a tuple
    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64, f64) {
        (self.longitude, self.latitude, self.elevation)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.longitude, self.latitude, self.elevation)
    }
}

/// A location returned in response to a geocoding query
///
/// One address is produced per placemark. Optional components are `None`
/// when the service omits them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    street: Option<String>,
    city: Option<String>,
    zip: Option<String>,
    county: Option<String>,
    state: Option<String>,
    country: Option<String>,
    coordinates: Coordinates,
    accuracy: u32,
    full_address: String,
    query: String,
}

impl Address {
    /// Extract an address from a single placemark fragment
    ///
    /// `query` is the user input that produced the response and is attached
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MalformedResponse`] if the `coordinates` element is
    /// missing or unparseable. Every other element is optional.
    pub fn extract(placemark: &str, query: &str) -> Result<Self, GeoError> {
        let field = |element| xml::fetch_non_empty(placemark, element).map(str::to_string);

        let coordinates = xml::fetch(placemark, Element::Coordinates).ok_or_else(|| {
            GeoError::MalformedResponse("placemark without <coordinates> element".to_string())
        })?;
        let coordinates = Coordinates::parse(coordinates)?;

        Ok(Self {
            street: field(Element::ThoroughfareName),
            city: field(Element::LocalityName),
            zip: field(Element::PostalCodeNumber),
            county: field(Element::SubAdministrativeAreaName),
            state: field(Element::AdministrativeAreaName),
            country: field(Element::CountryNameCode),
            coordinates,
            accuracy: xml::fetch_accuracy(placemark),
            full_address: field(Element::Address).unwrap_or_default(),
            query: query.to_string(),
        })
    }

    /// Street, e.g. "1600 Amphitheatre Pkwy"
    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    /// Alias for [`Address::street`]
    #[must_use]
    pub fn thoroughfare(&self) -> Option<&str> {
        self.street()
    }

    /// City
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Alias for [`Address::city`]
    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        self.city()
    }

    /// Zip code
    #[must_use]
    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    /// Alias for [`Address::zip`]
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.zip()
    }

    /// County
    #[must_use]
    pub fn county(&self) -> Option<&str> {
        self.county.as_deref()
    }

    /// Alias for [`Address::county`]
    #[must_use]
    pub fn subadministrative_area(&self) -> Option<&str> {
        self.county()
    }

    /// State, as a two-letter code for US addresses
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Alias for [`Address::state`]
    #[must_use]
    pub fn administrative_area(&self) -> Option<&str> {
        self.state()
    }

    /// Two-letter country code
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Alias for [`Address::country`]
    #[must_use]
    pub fn country_code(&self) -> Option<&str> {
        self.country()
    }

    /// Longitude, latitude and elevation
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// First element of the coordinate triple
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinates.longitude
    }

    /// Alias for [`Address::longitude`]
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.longitude()
    }

    /// Second element of the coordinate triple
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinates.latitude
    }

    /// Alias for [`Address::latitude`]
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.latitude()
    }

    /// Third element of the coordinate triple
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.coordinates.elevation
    }

    /// The service's rating of how precisely this placemark matches the query
    #[must_use]
    pub const fn accuracy(&self) -> u32 {
        self.accuracy
    }

    /// All components as one string, formatted by the service
    ///
    /// Empty if the placemark carried no `address` element.
    #[must_use]
    pub fn full_address(&self) -> &str {
        &self.full_address
    }

    /// The user input the request was made with
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_address)
    }
}

//! Geocoding response parsing
//!
//! Validates the service status of a raw response body and splits it into
//! one fragment per placemark.

use tracing::{debug, warn};

use crate::address::Address;
use crate::error::GeoError;
use crate::status::ServiceStatus;
use crate::xml::{self, Element};

/// A successfully classified geocoding response
///
/// Borrows from the raw body. Only ever constructed for status 200; every
/// other status is turned into a [`GeoError`] by [`Response::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<'a> {
    query: &'a str,
    status: ServiceStatus,
    placemarks: Vec<&'a str>,
}

impl<'a> Response<'a> {
    /// Parse a raw response body
    ///
    /// `key` is the map key the request was sent with; it is only used in
    /// the message of credential-related errors.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MalformedResponse`] if the `name` or `code`
    /// element is missing or the code is not an integer, and the mapped
    /// service error for any status other than 200.
    pub fn parse(body: &'a str, key: &str) -> Result<Self, GeoError> {
        let query = xml::fetch(body, Element::Name).ok_or_else(|| {
            GeoError::MalformedResponse("missing <name> element".to_string())
        })?;

        let code = xml::fetch(body, Element::Code).ok_or_else(|| {
            GeoError::MalformedResponse("missing <code> element".to_string())
        })?;
        let code: i64 = code.trim().parse().map_err(|_| {
            GeoError::MalformedResponse(format!("invalid status code: {code}"))
        })?;

        let status = ServiceStatus::from_code(code);
        if let Err(e) = status.check(query, key) {
            warn!(%status, %query, "Geocoding service rejected request");
            return Err(e);
        }

        let placemarks = xml::placemarks(body);
        debug!(%query, count = placemarks.len(), "Parsed geocoding response");

        Ok(Self {
            query,
            status,
            placemarks,
        })
    }

    /// Query echoed by the service
    #[must_use]
    pub const fn query(&self) -> &'a str {
        self.query
    }

    /// Service status (always success for a constructed response)
    #[must_use]
    pub const fn status(&self) -> ServiceStatus {
        self.status
    }

    /// Raw placemark fragments in document order
    #[must_use]
    pub fn placemarks(&self) -> &[&'a str] {
        &self.placemarks
    }

    /// Number of placemarks
    #[must_use]
    pub fn len(&self) -> usize {
        self.placemarks.len()
    }

    /// Check if the service returned no placemarks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placemarks.is_empty()
    }

    /// Extract one [`Address`] per placemark, in order
    ///
    /// # Errors
    ///
    /// Fails on the first placemark without usable coordinates.
    pub fn addresses(&self, query: &str) -> Result<Vec<Address>, GeoError> {
        self.placemarks
            .iter()
            .map(|placemark| Address::extract(placemark, query))
            .collect()
    }
}

/// Parse a raw response body straight into addresses
///
/// # Errors
///
/// See [`Response::parse`] and [`Address::extract`].
pub fn parse_addresses(body: &str, query: &str, key: &str) -> Result<Vec<Address>, GeoError> {
    Response::parse(body, key)?.addresses(query)
}

//! Geocoding error types

use thiserror::Error;

/// Broad grouping of [`GeoError`] variants
///
/// Lets callers handle a whole family of failures at once, e.g. every
/// address-related rejection, without matching each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The service could not resolve the requested address
    Address,
    /// The map key was rejected or exhausted
    MapKey,
    /// The service failed or returned an unrecognized status
    Service,
    /// The response body did not have the expected shape
    Response,
    /// The request never produced a response body
    Transport,
    /// Invalid input or configuration on the caller's side
    Client,
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeoError {
    /// Response body is missing a mandatory element or holds unparseable data
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Status 500
    #[error("Unknown error from the geocoding server")]
    ServerError,

    /// Status 601: the query was empty
    #[error("Missing address")]
    MissingAddress,

    /// Status 602: no location matched the query
    #[error("Unknown address: {query}")]
    UnknownAddress {
        /// Query echoed by the service
        query: String,
    },

    /// Status 603: a match exists but cannot be returned
    #[error("Unavailable address: {query}")]
    UnavailableAddress {
        /// Query echoed by the service
        query: String,
    },

    /// Status 610
    #[error("Invalid map key: {key}")]
    InvalidMapKey {
        /// Key the request was sent with
        key: String,
    },

    /// Status 620
    #[error("Too many queries for map key: {key}")]
    TooManyQueries {
        /// Key the request was sent with
        key: String,
    },

    /// Any status code without a dedicated variant
    #[error("Unknown error: {code}")]
    Unknown {
        /// Raw status code from the response
        code: i64,
    },

    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport answered with a non-success HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GeoError {
    /// Category this error belongs to
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingAddress | Self::UnknownAddress { .. } | Self::UnavailableAddress { .. } => {
                ErrorCategory::Address
            },
            Self::InvalidMapKey { .. } | Self::TooManyQueries { .. } => ErrorCategory::MapKey,
            Self::ServerError | Self::Unknown { .. } => ErrorCategory::Service,
            Self::MalformedResponse(_) => ErrorCategory::Response,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout => {
                ErrorCategory::Transport
            },
            Self::InvalidCoordinates | Self::ConfigurationError(_) => ErrorCategory::Client,
        }
    }

    /// Returns true for statuses 601, 602 and 603
    #[must_use]
    pub const fn is_address_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Address)
    }

    /// Returns true for statuses 610 and 620
    #[must_use]
    pub const fn is_map_key_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::MapKey)
    }

    /// Service status code that produced this error, if it was status-classified
    #[must_use]
    pub const fn status_code(&self) -> Option<i64> {
        match self {
            Self::ServerError => Some(500),
            Self::MissingAddress => Some(601),
            Self::UnknownAddress { .. } => Some(602),
            Self::UnavailableAddress { .. } => Some(603),
            Self::InvalidMapKey { .. } => Some(610),
            Self::TooManyQueries { .. } => Some(620),
            Self::Unknown { code } => Some(*code),
            _ => None,
        }
    }
}

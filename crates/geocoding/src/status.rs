//! Service status classification
//!
//! Maps the `code` element of a geocoding response to either success or a
//! typed [`GeoError`].

use std::fmt;

use crate::error::GeoError;

/// Status reported by the geocoding service in the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceStatus {
    /// 200
    Success,
    /// 500
    ServerError,
    /// 601
    MissingAddress,
    /// 602
    UnknownAddress,
    /// 603
    UnavailableAddress,
    /// 610
    BadKey,
    /// 620
    TooManyQueries,
    /// Anything else
    Other(i64),
}

impl ServiceStatus {
    /// Classify a raw status code
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            200 => Self::Success,
            500 => Self::ServerError,
            601 => Self::MissingAddress,
            602 => Self::UnknownAddress,
            603 => Self::UnavailableAddress,
            610 => Self::BadKey,
            620 => Self::TooManyQueries,
            other => Self::Other(other),
        }
    }

    /// The raw status code
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Success => 200,
            Self::ServerError => 500,
            Self::MissingAddress => 601,
            Self::UnknownAddress => 602,
            Self::UnavailableAddress => 603,
            Self::BadKey => 610,
            Self::TooManyQueries => 620,
            Self::Other(code) => code,
        }
    }

    /// Check if this is the success status
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Turn a non-success status into its error
    ///
    /// `query` and `key` only feed the error message.
    pub fn check(self, query: &str, key: &str) -> Result<(), GeoError> {
        match self {
            Self::Success => Ok(()),
            Self::ServerError => Err(GeoError::ServerError),
            Self::MissingAddress => Err(GeoError::MissingAddress),
            Self::UnknownAddress => Err(GeoError::UnknownAddress {
                query: query.to_string(),
            }),
            Self::UnavailableAddress => Err(GeoError::UnavailableAddress {
                query: query.to_string(),
            }),
            Self::BadKey => Err(GeoError::InvalidMapKey {
                key: key.to_string(),
            }),
            Self::TooManyQueries => Err(GeoError::TooManyQueries {
                key: key.to_string(),
            }),
            Self::Other(code) => Err(GeoError::Unknown { code }),
        }
    }
}

impl From<i64> for ServiceStatus {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

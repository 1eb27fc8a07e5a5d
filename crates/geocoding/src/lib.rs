//! Google Maps geocoding client
//!
//! Translates address and coordinate lookups into requests against the
//! Google Maps geocoding service and parses its XML answers into structured
//! [`Address`] records.
//!
//! # Architecture
//!
//! The parsing core is synchronous and pure: [`Response::parse`] validates
//! the service status and splits the body into placemarks, and
//! [`Address::extract`] turns one placemark into an address. Networking is
//! confined to the [`Fetcher`] trait, implemented over reqwest by
//! [`HttpFetcher`]. [`GoogleGeoClient`] wires the two together behind the
//! [`GeoClient`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use geocoding::{GeoClient, GeoConfig, GoogleGeoClient};
//!
//! let client = GoogleGeoClient::new(GeoConfig::with_key(API_KEY))?;
//!
//! let addresses = client.locate("1600 Amphitheatre Parkway, Mountain View, CA").await?;
//! let address = &addresses[0];
//!
//! assert_eq!(address.country(), Some("US"));
//! assert_eq!(address.city(), Some("Mountain View"));
//! assert_eq!(address.accuracy(), 8);
//! ```

mod address;
mod client;
mod config;
mod error;
mod fetch;
pub mod request;
mod response;
mod status;
mod street_view;
pub mod xml;

pub use address::{Address, Coordinates};
pub use client::{GeoClient, GoogleGeoClient};
pub use config::{CHARSET, GeoConfig};
pub use error::{ErrorCategory, GeoError};
pub use fetch::{Fetcher, HttpFetcher};
pub use response::{Response, parse_addresses};
pub use status::ServiceStatus;
pub use street_view::{Panorama, StreetView};

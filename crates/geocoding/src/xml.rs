//! Field extraction over geocoding response bodies
//!
//! The service answers in a loosely structured XML dialect of which only a
//! fixed set of leaf elements is ever read. Rather than building a document
//! tree, each known element is located with a pre-compiled pattern matching
//! the first `<tag>...</tag>` pair (non-greedy, across newlines). Unknown
//! elements are simply never looked at.

use std::sync::LazyLock;

use regex::Regex;

/// Leaf elements read from a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Query echoed by the service
    Name,
    /// Service status code
    Code,
    /// Street
    ThoroughfareName,
    /// City
    LocalityName,
    /// Zip code
    PostalCodeNumber,
    /// County
    SubAdministrativeAreaName,
    /// State
    AdministrativeAreaName,
    /// Two-letter country code
    CountryNameCode,
    /// Formatted full address
    Address,
    /// `longitude,latitude,elevation`
    Coordinates,
}

impl Element {
    /// Every element, in pattern-table order
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Code,
        Self::ThoroughfareName,
        Self::LocalityName,
        Self::PostalCodeNumber,
        Self::SubAdministrativeAreaName,
        Self::AdministrativeAreaName,
        Self::CountryNameCode,
        Self::Address,
        Self::Coordinates,
    ];

    /// Tag name as it appears in the response
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Code => "code",
            Self::ThoroughfareName => "ThoroughfareName",
            Self::LocalityName => "LocalityName",
            Self::PostalCodeNumber => "PostalCodeNumber",
            Self::SubAdministrativeAreaName => "SubAdministrativeAreaName",
            Self::AdministrativeAreaName => "AdministrativeAreaName",
            Self::CountryNameCode => "CountryNameCode",
            Self::Address => "address",
            Self::Coordinates => "coordinates",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// Indexed by `Element::index`, built in `Element::ALL` order.
#[allow(clippy::expect_used)]
static ELEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Element::ALL
        .iter()
        .map(|element| {
            let tag = regex::escape(element.tag());
            Regex::new(&format!(r"(?s)<{tag}>(.*?)</{tag}>")).expect("valid element regex")
        })
        .collect()
});

#[allow(clippy::expect_used)]
static ACCURACY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bAccuracy="([^"]*)"[^<>]*>"#).expect("valid accuracy regex")
});

#[allow(clippy::expect_used)]
static PLACEMARK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<Placemark(?: id="p\d+")?>.+?</Placemark>"#).expect("valid placemark regex")
});

/// Text content of the first `<element>...</element>` pair in `xml`
///
/// Returns `None` when the element does not occur. An element that is
/// present but empty yields `Some("")`.
#[must_use]
pub fn fetch(xml: &str, element: Element) -> Option<&str> {
    ELEMENT_PATTERNS
        .get(element.index())?
        .captures(xml)?
        .get(1)
        .map(|m| m.as_str())
}

/// Like [`fetch`], but treats an empty or whitespace-only element as absent
#[must_use]
pub fn fetch_non_empty(xml: &str, element: Element) -> Option<&str> {
    fetch(xml, element).filter(|text| !text.trim().is_empty())
}

/// Value of the first `Accuracy="N"` attribute of a start tag
///
/// The attribute may sit anywhere among the tag's attributes. Absent or
/// non-numeric values yield 0.
#[must_use]
pub fn fetch_accuracy(xml: &str) -> u32 {
    ACCURACY
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().trim().parse().ok())
        .unwrap_or(0)
}

/// All `<Placemark>` blocks in document order
#[must_use]
pub fn placemarks(xml: &str) -> Vec<&str> {
    PLACEMARK.find_iter(xml).map(|m| m.as_str()).collect()
}

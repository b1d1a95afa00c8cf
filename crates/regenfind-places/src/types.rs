use serde::{Deserialize, Serialize};

/// One place autocomplete candidate.
///
/// `active` marks the entry the user has keyboard-highlighted; selection
/// commits the full `description` string as the location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub description: String,
    pub active: bool,
}

impl PlaceSuggestion {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            active: false,
        }
    }
}

/// Geographic coordinates from a geocode lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A committed location: the chosen description, with coordinates only if
/// a geocode step has run. Free text may stay unresolved all the way to
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    pub description: String,
    pub coordinates: Option<Coordinates>,
}

/// Wire shape of an autocomplete response.
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// One prediction entry in an autocomplete response.
#[derive(Debug, Deserialize)]
pub struct Prediction {
    pub description: String,
}

/// Wire shape of a forward-geocode response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

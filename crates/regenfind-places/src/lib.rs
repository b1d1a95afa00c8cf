//! Address autocomplete and geocoding for the location input.
//!
//! [`client::PlacesClient`] talks to the place service: city-restricted
//! autocomplete plus an optional forward-geocode of a chosen description.
//! [`field::AddressField`] is the input-side state machine — raw text,
//! loading flag, highlighted suggestions, and the committed selection.

pub mod client;
pub mod error;
pub mod field;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use field::AddressField;
pub use types::{Coordinates, PlaceSuggestion, ResolvedAddress};

//! Submission validation and search-request assembly.
//!
//! `validate` gates `SearchRequest::build`: a request can only be
//! constructed from a non-empty term and a non-empty location. The
//! term-before-location check order is a contract — when both are empty,
//! the user is told about the search term, never the location.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filters::FilterSet;

/// User-input errors that block submission. Recoverable; the display
/// strings are shown inline on the search page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter a search term")]
    MissingSearchTerm,

    #[error("Please enter a location")]
    MissingLocation,
}

/// Checks that both a search term and a location are present.
///
/// Whitespace-only input counts as missing. Checks short-circuit in order:
/// term first, then location.
///
/// # Errors
///
/// Returns [`QueryError::MissingSearchTerm`] or
/// [`QueryError::MissingLocation`] for the first empty field.
pub fn validate(search_term: &str, location: &str) -> Result<(), QueryError> {
    if search_term.trim().is_empty() {
        return Err(QueryError::MissingSearchTerm);
    }
    if location.trim().is_empty() {
        return Err(QueryError::MissingLocation);
    }
    Ok(())
}

/// The finalized payload handed to the results view.
///
/// Serialized field names are the navigation-handoff contract; the results
/// view receives this as opaque state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: String,
    pub location: String,
    pub checked_options: Vec<String>,
}

impl SearchRequest {
    /// Validates the inputs and assembles the request payload.
    ///
    /// The committed term is a single scalar value; the checked options are
    /// snapshotted from the filter set in option-list order. Construction
    /// through `build` is the only path, so an unvalidated request cannot
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`QueryError`], term checked before
    /// location.
    pub fn build(
        search_term: &str,
        location: &str,
        filters: &FilterSet,
    ) -> Result<Self, QueryError> {
        validate(search_term, location)?;
        Ok(Self {
            search_term: search_term.to_string(),
            location: location.to_string(),
            checked_options: filters.selected(),
        })
    }
}

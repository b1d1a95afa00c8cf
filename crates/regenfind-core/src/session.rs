//! Per-visit state for the search page.
//!
//! A [`SearchSession`] holds everything one search-page visit accumulates:
//! the condition term (raw text or a committed selection), the location
//! text, the treatment filter set, the currently displayed condition
//! suggestions, and the held validation message. The session is discarded
//! once the built [`SearchRequest`] is handed off; only the request
//! crosses to the results view.

use crate::filters::FilterSet;
use crate::query::{QueryError, SearchRequest};

/// Mutable state for one search-page visit.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    term: String,
    location: String,
    filters: FilterSet,
    suggestions: Vec<String>,
    error_message: Option<String>,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: FilterSet::default(),
            ..Self::default()
        }
    }

    /// Keystroke in the condition input: the raw text is the term until a
    /// suggestion is selected.
    pub fn set_term_text(&mut self, text: &str) {
        self.term = text.to_string();
    }

    /// Commit a suggestion as the search term.
    ///
    /// The committed term is a single scalar value, lower-cased at
    /// selection time. Submission does not normalize again.
    pub fn select_term(&mut self, suggestion: &str) {
        self.term = suggestion.to_lowercase();
    }

    /// Replace the displayed condition suggestions wholesale.
    ///
    /// Lists are never merged; each fetch result displaces the previous
    /// one entirely.
    pub fn apply_term_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
    }

    /// Keystroke in the location input.
    pub fn set_address_text(&mut self, text: &str) {
        self.location = text.to_string();
    }

    /// Commit a place suggestion's full description as the location.
    pub fn select_address(&mut self, description: &str) {
        self.location = description.to_string();
    }

    /// Flip one treatment toggle; the others are unaffected.
    pub fn toggle_treatment(&mut self, value: &str) {
        self.filters = self.filters.toggle(value);
    }

    /// Validate and assemble the search request.
    ///
    /// On failure the inline error message is held for display; on success
    /// any previously held message is cleared.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`QueryError`], term before location.
    pub fn submit(&mut self) -> Result<SearchRequest, QueryError> {
        match SearchRequest::build(&self.term, &self.location, &self.filters) {
            Ok(request) => {
                self.error_message = None;
                Ok(request)
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The held validation message, if the last submit failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

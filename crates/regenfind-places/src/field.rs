//! State machine for the location input.
//!
//! Mirrors the binding a location-suggestion widget needs: raw text,
//! a loading flag while a fetch is in flight, the suggestion list with one
//! optionally highlighted entry, and the committed selection. The field
//! never blocks typing: a failed fetch clears the loading flag and leaves
//! the last suggestion list alone.

use crate::types::{Coordinates, PlaceSuggestion, ResolvedAddress};

/// Input-side state for the address autocomplete widget.
#[derive(Debug, Clone, Default)]
pub struct AddressField {
    text: String,
    suggestions: Vec<PlaceSuggestion>,
    loading: bool,
    resolved: Option<ResolvedAddress>,
}

impl AddressField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke: update the raw text and mark a fetch pending.
    ///
    /// Any prior committed selection is dropped — the text no longer
    /// matches it.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.resolved = None;
        self.loading = true;
    }

    /// Replace the suggestion list with a fetch result.
    pub fn apply_suggestions(&mut self, suggestions: Vec<PlaceSuggestion>) {
        self.suggestions = suggestions;
        self.loading = false;
    }

    /// A fetch failed: stop indicating loading, keep whatever list was
    /// displayed. The failure is the caller's to log.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    /// Highlight the entry at `index`; all others lose their highlight.
    /// Out-of-range indexes clear every highlight.
    pub fn set_active(&mut self, index: usize) {
        for (i, suggestion) in self.suggestions.iter_mut().enumerate() {
            suggestion.active = i == index;
        }
    }

    /// Commit a suggestion's full description as the location.
    ///
    /// Selection sets the text to the description; coordinates stay
    /// unresolved until a geocode step runs.
    pub fn select(&mut self, description: &str) {
        self.text = description.to_string();
        self.resolved = Some(ResolvedAddress {
            description: description.to_string(),
            coordinates: None,
        });
        self.suggestions.clear();
        self.loading = false;
    }

    /// Commit the currently highlighted suggestion, if any.
    pub fn select_active(&mut self) {
        if let Some(description) = self
            .suggestions
            .iter()
            .find(|s| s.active)
            .map(|s| s.description.clone())
        {
            self.select(&description);
        }
    }

    /// Attach geocoded coordinates to the committed selection.
    pub fn attach_coordinates(&mut self, coordinates: Coordinates) {
        if let Some(resolved) = self.resolved.as_mut() {
            resolved.coordinates = Some(coordinates);
        }
    }

    /// The raw text, committed or not — this is what validation sees.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn suggestions(&self) -> &[PlaceSuggestion] {
        &self.suggestions
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The committed selection, if a suggestion was chosen.
    #[must_use]
    pub fn resolved(&self) -> Option<&ResolvedAddress> {
        self.resolved.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boston_suggestions() -> Vec<PlaceSuggestion> {
        vec![
            PlaceSuggestion::new("Boston, MA, USA"),
            PlaceSuggestion::new("Bossier City, LA, USA"),
        ]
    }

    #[test]
    fn typing_marks_loading_and_drops_the_selection() {
        let mut field = AddressField::new();
        field.select("Boston, MA, USA");
        field.set_text("Bos");
        assert!(field.is_loading());
        assert!(field.resolved().is_none());
        assert_eq!(field.text(), "Bos");
    }

    #[test]
    fn applying_suggestions_clears_loading() {
        let mut field = AddressField::new();
        field.set_text("Bos");
        field.apply_suggestions(boston_suggestions());
        assert!(!field.is_loading());
        assert_eq!(field.suggestions().len(), 2);
    }

    #[test]
    fn failed_fetch_keeps_the_displayed_list() {
        let mut field = AddressField::new();
        field.set_text("Bos");
        field.apply_suggestions(boston_suggestions());
        field.set_text("Bost");
        field.fetch_failed();
        assert!(!field.is_loading());
        assert_eq!(field.suggestions().len(), 2);
    }

    #[test]
    fn selecting_commits_the_full_description() {
        let mut field = AddressField::new();
        field.set_text("Bos");
        field.apply_suggestions(boston_suggestions());
        field.select("Boston, MA, USA");
        assert_eq!(field.text(), "Boston, MA, USA");
        let resolved = field.resolved().expect("selection should commit");
        assert_eq!(resolved.description, "Boston, MA, USA");
        assert!(resolved.coordinates.is_none());
        assert!(field.suggestions().is_empty());
    }

    #[test]
    fn highlight_is_exclusive() {
        let mut field = AddressField::new();
        field.apply_suggestions(boston_suggestions());
        field.set_active(0);
        field.set_active(1);
        let active: Vec<bool> = field.suggestions().iter().map(|s| s.active).collect();
        assert_eq!(active, [false, true]);
    }

    #[test]
    fn select_active_commits_the_highlighted_entry() {
        let mut field = AddressField::new();
        field.apply_suggestions(boston_suggestions());
        field.set_active(1);
        field.select_active();
        assert_eq!(field.text(), "Bossier City, LA, USA");
    }

    #[test]
    fn select_active_without_highlight_is_a_no_op() {
        let mut field = AddressField::new();
        field.apply_suggestions(boston_suggestions());
        field.select_active();
        assert_eq!(field.text(), "");
        assert!(field.resolved().is_none());
    }

    #[test]
    fn coordinates_attach_to_a_committed_selection() {
        let mut field = AddressField::new();
        field.select("Boston, MA, USA");
        field.attach_coordinates(Coordinates {
            lat: 42.3601,
            lng: -71.0589,
        });
        let resolved = field.resolved().unwrap();
        assert_eq!(
            resolved.coordinates,
            Some(Coordinates {
                lat: 42.3601,
                lng: -71.0589
            })
        );
    }
}

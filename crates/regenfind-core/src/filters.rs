//! Treatment-type filter toggles.
//!
//! The option set is fixed; each option is an independent boolean, not an
//! exclusive choice. `toggle` is pure and returns a new [`FilterSet`] so
//! callers never mutate shared toggle state in place.

use serde::{Deserialize, Serialize};

/// One selectable treatment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentOption {
    /// Display label, e.g. "Stem Cell".
    pub label: String,
    /// Stable value carried into the search request, e.g. "Stem".
    pub value: String,
    pub checked: bool,
}

impl TreatmentOption {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            checked: false,
        }
    }
}

/// The set of treatment-type toggles offered on the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    options: Vec<TreatmentOption>,
}

impl Default for FilterSet {
    /// The fixed offering: PRP, Stem Cell, Prolotherapy — all unchecked.
    fn default() -> Self {
        Self {
            options: vec![
                TreatmentOption::new("PRP", "PRP"),
                TreatmentOption::new("Stem Cell", "Stem"),
                TreatmentOption::new("Prolotherapy", "Prolotherapy"),
            ],
        }
    }
}

impl FilterSet {
    /// Returns a new set with exactly the matching option's `checked` flag
    /// flipped. All other options are untouched; an unknown `value` returns
    /// an unchanged copy.
    #[must_use]
    pub fn toggle(&self, value: &str) -> Self {
        Self {
            options: self
                .options
                .iter()
                .map(|option| {
                    if option.value == value {
                        TreatmentOption {
                            checked: !option.checked,
                            ..option.clone()
                        }
                    } else {
                        option.clone()
                    }
                })
                .collect(),
        }
    }

    /// Whether the option with `value` is currently checked.
    ///
    /// Presentation derives its active styling from this; unknown values
    /// are simply inactive.
    #[must_use]
    pub fn is_active(&self, value: &str) -> bool {
        self.options
            .iter()
            .any(|option| option.value == value && option.checked)
    }

    /// Values of every checked option, in fixed option-list order.
    #[must_use]
    pub fn selected(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| option.checked)
            .map(|option| option.value.clone())
            .collect()
    }

    /// All options, checked or not, in display order.
    #[must_use]
    pub fn options(&self) -> &[TreatmentOption] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_three_unchecked_options() {
        let filters = FilterSet::default();
        let values: Vec<&str> = filters.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["PRP", "Stem", "Prolotherapy"]);
        assert!(filters.options().iter().all(|o| !o.checked));
    }

    #[test]
    fn toggle_flips_only_the_named_option() {
        let filters = FilterSet::default().toggle("Stem");
        assert!(filters.is_active("Stem"));
        assert!(!filters.is_active("PRP"));
        assert!(!filters.is_active("Prolotherapy"));
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let original = FilterSet::default().toggle("PRP");
        let round_tripped = original.toggle("Stem").toggle("Stem");
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn toggle_unknown_value_changes_nothing() {
        let filters = FilterSet::default().toggle("Acupuncture");
        assert_eq!(filters, FilterSet::default());
    }

    #[test]
    fn selected_preserves_option_list_order() {
        let filters = FilterSet::default().toggle("Prolotherapy").toggle("PRP");
        assert_eq!(filters.selected(), ["PRP", "Prolotherapy"]);
    }

    #[test]
    fn selected_is_empty_by_default() {
        assert!(FilterSet::default().selected().is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// One autocomplete candidate from the terms service.
///
/// Lists of these are replaced wholesale on each fetch; order within a
/// list is the service's response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub value: String,
}

impl Suggestion {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

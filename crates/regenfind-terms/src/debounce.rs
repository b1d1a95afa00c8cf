//! Debounced suggestion fetching with stale-response detection.
//!
//! Every keystroke calls [`SuggestionDebouncer::debounced_suggestions`].
//! Each call takes a ticket from a generation counter; a call whose ticket
//! is no longer current after the quiet period — or after the fetch
//! returns — yields `None`, so a slow early response can never displace
//! the list a newer keystroke produced. Fetch failures are logged and
//! degrade to an empty list; they never reach the caller as errors.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::client::TermsClient;
use crate::types::Suggestion;

/// Serializes suggestion fetches for one input field.
///
/// Shared by reference across keystroke handlers; the generation counter
/// is atomic so no lock is needed.
#[derive(Debug)]
pub struct SuggestionDebouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl SuggestionDebouncer {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            generation: AtomicU64::new(0),
        }
    }

    /// Waits out the quiet period, then fetches suggestions for `partial`.
    ///
    /// Returns `None` when this call was superseded by a newer one — either
    /// during the quiet period or while the fetch was in flight — meaning
    /// the caller must leave its display list alone. Returns
    /// `Some(Vec::new())` when the fetch failed: the failure is logged and
    /// the field simply offers no suggestions.
    pub async fn debounced_suggestions(
        &self,
        client: &TermsClient,
        partial: &str,
        max_list: u32,
    ) -> Option<Vec<Suggestion>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay).await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(terms = partial, "suggestion fetch superseded before send");
            return None;
        }

        let fetched = client.suggestions(partial, max_list).await;

        // A newer keystroke may have arrived while the request was in
        // flight; its response owns the display list now.
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(terms = partial, "dropping stale suggestion response");
            return None;
        }

        match fetched {
            Ok(suggestions) => Some(suggestions),
            Err(err) => {
                tracing::warn!(terms = partial, error = %err, "suggestion fetch failed");
                Some(Vec::new())
            }
        }
    }
}

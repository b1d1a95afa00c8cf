//! Condition-suggestion command handler.

use regenfind_core::AppConfig;
use regenfind_terms::{SuggestionDebouncer, TermsClient};

/// Fetch and print condition suggestions for `text`.
///
/// Goes through the debounce layer, as the search page would, so a remote
/// failure degrades to "no suggestions" instead of an error.
pub(crate) async fn run_suggest(config: &AppConfig, text: &str) -> anyhow::Result<()> {
    let client = TermsClient::with_base_url(
        config.request_timeout_secs,
        &config.terms_api_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build terms client: {e}"))?;

    let debouncer = SuggestionDebouncer::new(config.suggest_debounce_ms);
    let suggestions = debouncer
        .debounced_suggestions(&client, text, config.terms_max_suggestions)
        .await
        .unwrap_or_default();

    if suggestions.is_empty() {
        println!("no suggestions for '{text}'");
        return Ok(());
    }

    for suggestion in suggestions {
        println!("{}", suggestion.value);
    }
    Ok(())
}

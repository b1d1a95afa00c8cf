//! Place-suggestion command handler.

use regenfind_core::AppConfig;
use regenfind_places::{AddressField, PlacesClient};

/// Fetch and print city suggestions for `text`; optionally geocode the
/// first one.
///
/// Drives an [`AddressField`] the way the search page would: a fetch
/// failure clears the loading flag, logs, and prints nothing — it never
/// becomes a hard error.
pub(crate) async fn run_places(config: &AppConfig, text: &str, geocode: bool) -> anyhow::Result<()> {
    let api_key = config.places_api_key.as_deref().unwrap_or_default();
    let client = PlacesClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.places_api_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))?;

    let mut field = AddressField::new();
    field.set_text(text);

    match client.autocomplete(text).await {
        Ok(suggestions) => field.apply_suggestions(suggestions),
        Err(err) => {
            tracing::warn!(input = text, error = %err, "place suggestion fetch failed");
            field.fetch_failed();
        }
    }

    if field.suggestions().is_empty() {
        println!("no place suggestions for '{text}'");
        return Ok(());
    }

    for suggestion in field.suggestions() {
        println!("{}", suggestion.description);
    }

    if geocode {
        let first = field.suggestions()[0].description.clone();
        field.select(&first);
        match client.geocode(&first).await {
            Ok(Some(coords)) => {
                field.attach_coordinates(coords);
                println!("{first} -> lat {}, lng {}", coords.lat, coords.lng);
            }
            Ok(None) => println!("{first} -> no geocode match"),
            Err(err) => {
                tracing::warn!(address = %first, error = %err, "geocode failed");
                println!("{first} -> geocode unavailable");
            }
        }
    }

    Ok(())
}

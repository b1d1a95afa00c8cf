//! Search-submission and result-sorting command handlers.

use std::io::Read;

use regenfind_core::{sort_hits, ProviderHit, SearchSession, SortOrder};

/// Drive a search session end to end and print the navigation payload.
///
/// Validation failures print the inline message and exit nonzero, exactly
/// the error the search page would display.
pub(crate) fn run_search(
    condition: &str,
    location: &str,
    treatments: &[String],
) -> anyhow::Result<()> {
    let mut session = SearchSession::new();
    session.set_term_text(condition);
    session.set_address_text(location);

    for value in treatments {
        if session.filters().options().iter().any(|o| &o.value == value) {
            session.toggle_treatment(value);
        } else {
            tracing::warn!(treatment = %value, "ignoring unknown treatment filter");
        }
    }

    match session.submit() {
        Ok(request) => {
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!("{err}")),
    }
}

/// Read a JSON array of result rows from stdin and print them sorted.
pub(crate) fn run_sort(order: &str) -> anyhow::Result<()> {
    let order: SortOrder = order
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let hits: Vec<ProviderHit> = serde_json::from_str(&input)?;

    let sorted = sort_hits(&hits, order);
    println!("{}", serde_json::to_string_pretty(&sorted)?);
    Ok(())
}

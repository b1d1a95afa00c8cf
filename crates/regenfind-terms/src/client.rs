//! HTTP client for the conditions suggestion endpoint.
//!
//! The service answers `GET ?terms=<text>&maxList=<n>` with a positional
//! JSON array whose index 3 holds the display labels. Anything odd about
//! index 3 (missing, null, not an array) means zero suggestions, not an
//! error — only transport and JSON-syntax failures surface as
//! [`TermsError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::TermsError;
use crate::types::Suggestion;

const DEFAULT_BASE_URL: &str = "https://clinicaltables.nlm.nih.gov/api/conditions/v3/search";

/// Client for the clinical-terms suggestion API.
///
/// Use [`TermsClient::new`] for production or
/// [`TermsClient::with_base_url`] to point at a mock server in tests.
pub struct TermsClient {
    client: Client,
    base_url: Url,
}

impl TermsClient {
    /// Creates a new client pointed at the production conditions endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TermsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, TermsError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TermsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TermsError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, TermsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("regenfind/0.1 (condition-search)")
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| TermsError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches condition suggestions for a partial search term.
    ///
    /// Issues one GET per call; `partial` may be empty. Labels are mapped
    /// 1:1 into [`Suggestion`] values with the service's order preserved.
    /// A response without a label array yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`TermsError::Http`] on network failure or a non-2xx status.
    /// - [`TermsError::Deserialize`] if the body is not valid JSON.
    pub async fn suggestions(
        &self,
        partial: &str,
        max_list: u32,
    ) -> Result<Vec<Suggestion>, TermsError> {
        let url = self.build_url(partial, max_list);
        tracing::debug!(terms = partial, max_list, "fetching condition suggestions");

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| TermsError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        Ok(Self::parse_labels(&body))
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, partial: &str, max_list: u32) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("terms", partial);
            pairs.append_pair("maxList", &max_list.to_string());
        }
        url
    }

    /// Pulls the label strings out of the positional response array.
    ///
    /// The contract tolerates a missing or malformed index 3: that is zero
    /// suggestions, never an error. Non-string entries are skipped.
    fn parse_labels(body: &serde_json::Value) -> Vec<Suggestion> {
        body.get(3)
            .and_then(serde_json::Value::as_array)
            .map(|labels| {
                labels
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .map(Suggestion::new)
                    .collect()
            })
            .unwrap_or_default()
    }
}

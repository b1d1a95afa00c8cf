//! HTTP client for the place autocomplete and geocoding endpoints.
//!
//! Both endpoints answer with a JSON envelope carrying a `status` string.
//! `OK` and `ZERO_RESULTS` are the two healthy outcomes; anything else
//! (`REQUEST_DENIED`, `OVER_QUERY_LIMIT`, ...) surfaces as
//! [`PlacesError::ApiStatus`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{AutocompleteResponse, Coordinates, GeocodeResponse, PlaceSuggestion};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

const AUTOCOMPLETE_PATH: &str = "maps/api/place/autocomplete/json";
const GEOCODE_PATH: &str = "maps/api/geocode/json";

/// Client for the place autocomplete / geocoding service.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl PlacesClient {
    /// Creates a new client pointed at the production service.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("regenfind/0.1 (condition-search)")
            .build()?;

        // Ensure the base ends with exactly one slash so join() appends the
        // endpoint path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_owned(),
        })
    }

    /// Fetches city-level place suggestions for partial address text.
    ///
    /// Results are restricted to city-type places; predictions map 1:1
    /// into [`PlaceSuggestion`] entries with `active` unset. `ZERO_RESULTS`
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if the service reports a failure status.
    /// - [`PlacesError::Http`] on network failure or a non-2xx status.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn autocomplete(&self, input: &str) -> Result<Vec<PlaceSuggestion>, PlacesError> {
        let url = self.build_url(
            AUTOCOMPLETE_PATH,
            &[("input", input), ("types", "(cities)")],
        )?;
        tracing::debug!(input, "fetching place suggestions");

        let body: AutocompleteResponse = self.request_json(&url).await?;
        Self::check_status(&body.status)?;

        Ok(body
            .predictions
            .into_iter()
            .map(|prediction| PlaceSuggestion::new(prediction.description))
            .collect())
    }

    /// Forward-geocodes a chosen description to coordinates.
    ///
    /// Returns `Ok(None)` when the service knows no match
    /// (`ZERO_RESULTS`); the committed location stays unresolved in that
    /// case.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if the service reports a failure status.
    /// - [`PlacesError::Http`] on network failure or a non-2xx status.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, PlacesError> {
        let url = self.build_url(GEOCODE_PATH, &[("address", address)])?;
        tracing::debug!(address, "geocoding address");

        let body: GeocodeResponse = self.request_json(&url).await?;
        Self::check_status(&body.status)?;

        Ok(body.results.into_iter().next().map(|r| r.geometry.location))
    }

    /// Builds an endpoint URL with the API key and percent-encoded
    /// parameters.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body.
    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &Url,
    ) -> Result<T, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// `OK` and `ZERO_RESULTS` pass; every other status is an error.
    fn check_status(status: &str) -> Result<(), PlacesError> {
        match status {
            "OK" | "ZERO_RESULTS" => Ok(()),
            other => Err(PlacesError::ApiStatus(other.to_string())),
        }
    }
}

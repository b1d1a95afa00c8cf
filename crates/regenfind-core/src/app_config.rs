#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the search pipeline, loaded from the
/// environment (see [`crate::config::load_app_config`]).
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the clinical-terms suggestion endpoint.
    pub terms_api_base_url: String,
    /// `maxList` sent with every suggestion request.
    pub terms_max_suggestions: u32,
    /// Base URL of the place autocomplete / geocoding service.
    pub places_api_base_url: String,
    /// API key for the places service; optional so suggestion-only flows
    /// work without one.
    pub places_api_key: Option<String>,
    pub request_timeout_secs: u64,
    /// Quiet period after a keystroke before a suggestion fetch fires.
    pub suggest_debounce_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("terms_api_base_url", &self.terms_api_base_url)
            .field("terms_max_suggestions", &self.terms_max_suggestions)
            .field("places_api_base_url", &self.places_api_base_url)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("suggest_debounce_ms", &self.suggest_debounce_ms)
            .finish()
    }
}

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default endpoint of the NLM Clinical Tables conditions API.
const DEFAULT_TERMS_API_BASE_URL: &str =
    "https://clinicaltables.nlm.nih.gov/api/conditions/v3/search";

/// Default base of the place autocomplete / geocoding service.
const DEFAULT_PLACES_API_BASE_URL: &str = "https://maps.googleapis.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("REGENFIND_ENV", "development"));
    let log_level = or_default("REGENFIND_LOG_LEVEL", "info");

    let terms_api_base_url = or_default("TERMS_API_BASE_URL", DEFAULT_TERMS_API_BASE_URL);
    let terms_max_suggestions = parse_u32("TERMS_MAX_SUGGESTIONS", "7")?;

    let places_api_base_url = or_default("PLACES_API_BASE_URL", DEFAULT_PLACES_API_BASE_URL);
    let places_api_key = lookup("PLACES_API_KEY").ok();

    let request_timeout_secs = parse_u64("REGENFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let suggest_debounce_ms = parse_u64("SUGGEST_DEBOUNCE_MS", "300")?;

    Ok(AppConfig {
        env,
        log_level,
        terms_api_base_url,
        terms_max_suggestions,
        places_api_base_url,
        places_api_key,
        request_timeout_secs,
        suggest_debounce_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("all vars have defaults");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.terms_api_base_url, DEFAULT_TERMS_API_BASE_URL);
        assert_eq!(cfg.terms_max_suggestions, 7);
        assert_eq!(cfg.places_api_base_url, DEFAULT_PLACES_API_BASE_URL);
        assert!(cfg.places_api_key.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.suggest_debounce_ms, 300);
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = HashMap::new();
        map.insert("REGENFIND_ENV", "test");
        map.insert("TERMS_API_BASE_URL", "http://localhost:9000/terms");
        map.insert("TERMS_MAX_SUGGESTIONS", "3");
        map.insert("PLACES_API_KEY", "k-123");
        map.insert("SUGGEST_DEBOUNCE_MS", "50");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Test);
        assert_eq!(cfg.terms_api_base_url, "http://localhost:9000/terms");
        assert_eq!(cfg.terms_max_suggestions, 3);
        assert_eq!(cfg.places_api_key.as_deref(), Some("k-123"));
        assert_eq!(cfg.suggest_debounce_ms, 50);
    }

    #[test]
    fn build_app_config_fails_with_invalid_max_suggestions() {
        let mut map = HashMap::new();
        map.insert("TERMS_MAX_SUGGESTIONS", "many");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TERMS_MAX_SUGGESTIONS"),
            "expected InvalidEnvVar(TERMS_MAX_SUGGESTIONS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_debounce() {
        let mut map = HashMap::new();
        map.insert("SUGGEST_DEBOUNCE_MS", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SUGGEST_DEBOUNCE_MS"),
            "expected InvalidEnvVar(SUGGEST_DEBOUNCE_MS), got: {result:?}"
        );
    }
}

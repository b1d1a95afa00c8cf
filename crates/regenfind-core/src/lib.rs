//! Domain types and pure logic for the condition-and-location search
//! pipeline: treatment filters, query validation, request building, the
//! per-visit search session, result ordering, and application config.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod filters;
pub mod query;
pub mod session;
pub mod sort;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::{FilterSet, TreatmentOption};
pub use query::{validate, QueryError, SearchRequest};
pub use session::SearchSession;
pub use sort::{sort_hits, ProviderHit, SortOrder};

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value does not parse.
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

//! Client for the clinical-terms suggestion API.
//!
//! Wraps `reqwest` with the conditions-endpoint wire contract and a
//! debounce layer that detects and drops stale responses. Fetch failures
//! never escape the debounce boundary; they degrade to an empty
//! suggestion list and a warning in the logs.

pub mod client;
pub mod debounce;
pub mod error;
pub mod types;

pub use client::TermsClient;
pub use debounce::SuggestionDebouncer;
pub use error::TermsError;
pub use types::Suggestion;

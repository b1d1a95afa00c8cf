//! Result ordering for the results view.
//!
//! One sort contract shared by the selector widget and the sorter: distance
//! ascending, or provider name ascending/descending case-insensitively.
//! Every order is stable — equal keys keep their input order.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sort key for a result set. String forms match the selector widget's
/// values: `distance`, `asc`, `desc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "distance")]
    Distance,
    #[serde(rename = "asc")]
    NameAsc,
    #[serde(rename = "desc")]
    NameDesc,
}

#[derive(Debug, Error)]
#[error("unknown sort order: {0} (expected distance, asc, or desc)")]
pub struct UnknownSortOrder(String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Self::Distance),
            "asc" => Ok(Self::NameAsc),
            "desc" => Ok(Self::NameDesc),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

/// One row of the results view.
///
/// `distance` is precomputed upstream relative to the searched location;
/// how it is computed is outside this contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderHit {
    pub name: String,
    pub distance: f64,
}

/// Returns a new, ordered copy of `hits`; the input is untouched.
///
/// `Vec::sort_by` is a stable sort, which carries the tie-breaking
/// contract: two hits with equal keys never swap.
#[must_use]
pub fn sort_hits(hits: &[ProviderHit], order: SortOrder) -> Vec<ProviderHit> {
    let mut sorted = hits.to_vec();
    match order {
        SortOrder::Distance => sorted.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        }),
        SortOrder::NameAsc => sorted.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortOrder::NameDesc => sorted.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
    }
    sorted
}

fn name_key(hit: &ProviderHit) -> String {
    hit.name.to_lowercase()
}

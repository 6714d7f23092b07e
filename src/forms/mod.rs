//! JSON request payloads and their conversion into domain inserts and patches.

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod banners;
pub mod categories;
pub mod products;

/// Result type returned by the payload helpers.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while turning a request body into domain data.
#[derive(Debug, Error)]
pub enum FormError {
    /// One of the required fields is absent, blank, or zero where zero is not allowed.
    #[error("{0}")]
    MissingFields(&'static str),
    /// Validation failures from the `validator` crate.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
}

/// Trim `value` and drop it when nothing is left.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Deserialize a present key as `Some(value)`, keeping `Some(None)` for an explicit `null`.
///
/// Combined with `#[serde(default)]` an absent key stays `None`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

//! Error types for dataset and configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
/// Failures raised while loading the static dataset or the catalog configuration.
pub enum CatalogError {
    /// The dataset payload was not a JSON array of icon records.
    #[error("catalog dataset parse failed: {0}")]
    Dataset(#[source] serde_json::Error),
    /// The embedded configuration payload could not be decoded.
    #[error("catalog config parse failed: {0}")]
    ConfigParse(#[source] serde_json::Error),
    /// The configuration decoded but violates a structural rule.
    #[error("catalog config invalid: {0}")]
    ConfigInvalid(String),
}

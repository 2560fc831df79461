//! Build-time configuration and the embedded metadata file.

use catalog_core::{Catalog, CatalogConfig, CatalogError};
use leptos::logging;

include!(concat!(env!("OUT_DIR"), "/catalog_config_generated.rs"));

/// Static icon metadata shipped with the site.
pub const CATALOG_METADATA_JSON: &str = include_str!("../data/catalog_metadata.json");

/// Decodes the configuration compiled from `catalog.config.toml`.
///
/// # Errors
///
/// Returns [`CatalogError`] when the embedded payload does not decode or validate.
pub fn load_catalog_config() -> Result<CatalogConfig, CatalogError> {
    CatalogConfig::from_json_str(CATALOG_CONFIG_JSON)
}

/// Embedded configuration, or the built-in defaults when it is rejected.
pub fn catalog_config_or_default() -> CatalogConfig {
    load_catalog_config().unwrap_or_else(|err| {
        logging::warn!("{err}; falling back to default catalog config");
        CatalogConfig::default()
    })
}

/// Indexes `raw` metadata against the configured sections.
///
/// A malformed payload is logged and yields an empty catalog so the page still renders.
pub fn load_catalog(raw: &str, config: &CatalogConfig) -> Catalog {
    match Catalog::from_json_str(raw, &config.sections) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("{err}; starting with an empty catalog");
            Catalog::new(Vec::new(), &config.sections)
        }
    }
}

#[cfg(test)]
#[path = "../build/manifest.rs"]
#[allow(dead_code)]
mod build_manifest;

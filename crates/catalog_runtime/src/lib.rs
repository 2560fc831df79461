//! Leptos runtime for the icon catalog.
//!
//! [`CatalogProvider`] owns the reducer container and the effect queue; the components in
//! [`components`] render the grid, the category browser, and the detail page on top of it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
mod effect_executor;
pub mod host;
pub mod runtime_context;
pub mod startup;

pub use components::{CatalogGrid, CategoryModal, IconDetail};
pub use host::CatalogHostContext;
pub use runtime_context::{use_catalog_runtime, CatalogProvider, CatalogRuntimeContext};
pub use startup::{
    catalog_config_or_default, load_catalog, load_catalog_config, CATALOG_METADATA_JSON,
};

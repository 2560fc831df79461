//! Pure catalog engine shared by the browser runtime and tooling.
//!
//! The crate owns the icon record model, the category taxonomy indexer, the search/filter
//! evaluator, the pagination cursor, quick-filter resolution, and the reducer that ties them
//! into one explicit state container. Nothing here touches the DOM or performs I/O; the
//! presentation layer in `catalog_runtime` drives it through [`reduce_catalog`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod quick_filter;
pub mod reducer;
pub mod taxonomy;

pub use config::{
    default_quick_filters, default_sections, CatalogConfig, CategorySection, DetailLayout,
    GridDensity, QuickFilter, Theme, CATALOG_CONFIG_SCHEMA_VERSION,
};
pub use dataset::{Catalog, Lookup};
pub use error::CatalogError;
pub use filter::{count_matches, filter_records, FilterState};
pub use model::{DownloadRequest, IconRecord};
pub use pagination::{PaginationState, DEFAULT_PAGE_SIZE};
pub use quick_filter::{
    is_quick_filter_active, resolve_quick_filter, QuickFilterSelection, ALL_QUICK_FILTER,
};
pub use reducer::{reduce_catalog, CatalogAction, CatalogEffect, CatalogState, ReducerError};
pub use taxonomy::{count_categories, index_categories, CategoryCount, Taxonomy, TaxonomySection};

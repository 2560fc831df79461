//! Reducer actions, side-effect intents, and transition logic for the catalog session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::CatalogConfig,
    dataset::{Catalog, Lookup},
    filter::FilterState,
    model::{DownloadRequest, IconRecord},
    pagination::PaginationState,
    quick_filter::{resolve_quick_filter, QuickFilterSelection},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Mutable UI session state owned by one catalog view.
pub struct CatalogState {
    /// Query text and selected categories.
    pub filter: FilterState,
    /// Reveal cursor into the filtered result.
    pub pagination: PaginationState,
    /// Whether the category browser is open.
    pub categories_open: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

impl CatalogState {
    /// Creates an unfiltered session using the configured page size.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            filter: FilterState::default(),
            pagination: PaginationState::new(config.page_size),
            categories_open: false,
        }
    }

    /// Records currently revealed, in source order.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a IconRecord> {
        let mut records = catalog.filtered(&self.filter);
        let revealed = self.pagination.revealed(records.len());
        records.truncate(revealed);
        records
    }

    /// Returns whether a reveal-more trigger would be honored.
    pub fn has_more(&self, catalog: &Catalog) -> bool {
        self.pagination
            .has_more(catalog.filtered_len(&self.filter))
    }

    /// Result count line, e.g. `12 icons found for "cat"`.
    ///
    /// The query suffix is only shown when no category is selected.
    pub fn result_summary(&self, filtered_len: usize) -> String {
        let query = self.filter.query();
        if !query.is_empty() && self.filter.selected_categories().is_empty() {
            format!("{filtered_len} icons found for \"{query}\"")
        } else {
            format!("{filtered_len} icons")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_catalog`] to mutate [`CatalogState`].
pub enum CatalogAction {
    /// Replace the search text.
    SetQuery {
        /// New query text.
        query: String,
    },
    /// Select or deselect one category label and close the category browser.
    ToggleCategory {
        /// Raw category label.
        label: String,
    },
    /// Apply a quick-filter pill.
    ApplyQuickFilter {
        /// Configured quick-filter key.
        key: String,
    },
    /// Clear query and selection.
    ClearFilters,
    /// Reveal the next page of the filtered result.
    RevealMore,
    /// Open the category browser.
    OpenCategories,
    /// Close the category browser.
    CloseCategories,
    /// Save a record's image.
    RequestDownload {
        /// Record identifier.
        id: String,
    },
    /// Return the viewport to the top of the grid.
    ScrollToTop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_catalog`] for the host runtime to execute.
pub enum CatalogEffect {
    /// Fetch the asset and trigger a file save.
    DownloadAsset(DownloadRequest),
    /// Scroll the document to the top.
    ScrollToTop,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference missing data.
pub enum ReducerError {
    /// No record carries the identifier.
    #[error("icon not found: {0}")]
    IconNotFound(String),
    /// No quick filter is configured under the key.
    #[error("unknown quick filter: {0}")]
    UnknownQuickFilter(String),
}

/// Applies a [`CatalogAction`] to the session state and collects resulting side effects.
///
/// Any action that touches filter inputs resets the reveal cursor, even when the inputs end up
/// equal to their previous values.
///
/// # Errors
///
/// Returns [`ReducerError::IconNotFound`] for downloads of unknown records and
/// [`ReducerError::UnknownQuickFilter`] for unconfigured shortcut keys. The state is left
/// untouched in both cases.
pub fn reduce_catalog(
    state: &mut CatalogState,
    catalog: &Catalog,
    config: &CatalogConfig,
    action: CatalogAction,
) -> Result<Vec<CatalogEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        CatalogAction::SetQuery { query } => {
            state.filter.set_query(query);
            state.pagination.reset();
        }
        CatalogAction::ToggleCategory { label } => {
            state.filter.toggle_category(&label);
            state.pagination.reset();
            state.categories_open = false;
        }
        CatalogAction::ApplyQuickFilter { key } => {
            let selection = resolve_quick_filter(
                &key,
                &config.quick_filters,
                catalog.taxonomy(),
                catalog.records(),
                config.quick_filter_cap,
            )
            .ok_or(ReducerError::UnknownQuickFilter(key))?;
            match selection {
                QuickFilterSelection::ClearAll => state.filter.clear(),
                QuickFilterSelection::Select(labels) => {
                    state.filter.set_query(String::new());
                    state.filter.select_categories(labels);
                }
            }
            state.pagination.reset();
        }
        CatalogAction::ClearFilters => {
            state.filter.clear();
            state.pagination.reset();
        }
        CatalogAction::RevealMore => {
            let filtered_len = catalog.filtered_len(&state.filter);
            state.pagination.reveal_more(filtered_len);
        }
        CatalogAction::OpenCategories => {
            state.categories_open = true;
        }
        CatalogAction::CloseCategories => {
            state.categories_open = false;
        }
        CatalogAction::RequestDownload { id } => match catalog.lookup(&id) {
            Lookup::Found(record) => effects.push(CatalogEffect::DownloadAsset(
                record.download_request(&config.download_extension),
            )),
            Lookup::NotFound { id } => return Err(ReducerError::IconNotFound(id)),
        },
        CatalogAction::ScrollToTop => effects.push(CatalogEffect::ScrollToTop),
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::default_sections;

    fn icon(id: &str, name: &str, categories: &[&str]) -> IconRecord {
        IconRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            image_url: format!("https://cdn.example/{id}.png"),
            image_url_grid: None,
            image_url_preview: None,
        }
    }

    fn catalog(len: usize) -> Catalog {
        let records = (0..len)
            .map(|i| {
                let label = if i % 2 == 0 { "Pets" } else { "Cars" };
                icon(&format!("icon-{i}"), &format!("Icon {i}"), &[label])
            })
            .collect();
        Catalog::new(records, &default_sections())
    }

    fn apply(
        state: &mut CatalogState,
        catalog: &Catalog,
        action: CatalogAction,
    ) -> Vec<CatalogEffect> {
        reduce_catalog(state, catalog, &CatalogConfig::default(), action).expect("reduce")
    }

    #[test]
    fn reveal_more_then_filter_change_resets_cursor() {
        let catalog = catalog(200);
        let mut state = CatalogState::default();

        apply(&mut state, &catalog, CatalogAction::RevealMore);
        assert_eq!(state.visible(&catalog).len(), 100);

        apply(
            &mut state,
            &catalog,
            CatalogAction::SetQuery {
                query: String::new(),
            },
        );
        assert_eq!(state.pagination.cursor(), 50);
        assert_eq!(state.visible(&catalog).len(), 50);
    }

    #[test]
    fn toggle_category_filters_and_closes_browser() {
        let catalog = catalog(10);
        let mut state = CatalogState::default();
        apply(&mut state, &catalog, CatalogAction::OpenCategories);
        assert!(state.categories_open);

        apply(
            &mut state,
            &catalog,
            CatalogAction::ToggleCategory {
                label: "pets".to_string(),
            },
        );
        assert!(!state.categories_open);
        assert_eq!(state.visible(&catalog).len(), 5);
        assert!(!state.has_more(&catalog));
    }

    #[test]
    fn quick_filter_replaces_query_with_selection() {
        let catalog = catalog(10);
        let mut state = CatalogState::default();
        apply(
            &mut state,
            &catalog,
            CatalogAction::SetQuery {
                query: "icon".to_string(),
            },
        );
        apply(
            &mut state,
            &catalog,
            CatalogAction::ApplyQuickFilter {
                key: "animals".to_string(),
            },
        );
        assert_eq!(state.filter.query(), "");
        assert_eq!(state.filter.active_filters_display(), "Pets");
        assert_eq!(state.result_summary(5), "5 icons");

        apply(
            &mut state,
            &catalog,
            CatalogAction::ApplyQuickFilter {
                key: "all".to_string(),
            },
        );
        assert!(state.filter.is_unconstrained());
    }

    #[test]
    fn quick_filters_reset_cursor() {
        let catalog = catalog(200);
        let mut state = CatalogState::default();

        apply(&mut state, &catalog, CatalogAction::RevealMore);
        assert_eq!(state.pagination.cursor(), 100);
        apply(
            &mut state,
            &catalog,
            CatalogAction::ApplyQuickFilter {
                key: "animals".to_string(),
            },
        );
        assert_eq!(state.pagination.cursor(), 50);

        apply(&mut state, &catalog, CatalogAction::RevealMore);
        assert_eq!(state.pagination.cursor(), 100);
        apply(
            &mut state,
            &catalog,
            CatalogAction::ApplyQuickFilter {
                key: "all".to_string(),
            },
        );
        assert_eq!(state.pagination.cursor(), 50);
    }

    #[test]
    fn unknown_quick_filter_is_an_error_and_leaves_state() {
        let catalog = catalog(3);
        let mut state = CatalogState::default();
        let before = state.clone();
        let err = reduce_catalog(
            &mut state,
            &catalog,
            &CatalogConfig::default(),
            CatalogAction::ApplyQuickFilter {
                key: "planets".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::UnknownQuickFilter("planets".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn download_emits_effect_or_reports_missing_icon() {
        let catalog = catalog(2);
        let mut state = CatalogState::default();
        let effects = apply(
            &mut state,
            &catalog,
            CatalogAction::RequestDownload {
                id: "icon-1".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![CatalogEffect::DownloadAsset(DownloadRequest {
                url: "https://cdn.example/icon-1.png".to_string(),
                file_name: "Icon 1.png".to_string(),
            })]
        );

        let err = reduce_catalog(
            &mut state,
            &catalog,
            &CatalogConfig::default(),
            CatalogAction::RequestDownload {
                id: "missing".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "icon not found: missing");
    }

    #[test]
    fn summary_mentions_query_only_without_selection() {
        let mut state = CatalogState::default();
        state.filter.set_query("cat");
        assert_eq!(state.result_summary(3), "3 icons found for \"cat\"");
        state.filter.toggle_category("Pets");
        assert_eq!(state.result_summary(1), "1 icons");
    }

    #[test]
    fn scroll_to_top_is_forwarded_as_effect() {
        let catalog = catalog(1);
        let mut state = CatalogState::default();
        assert_eq!(
            apply(&mut state, &catalog, CatalogAction::ScrollToTop),
            vec![CatalogEffect::ScrollToTop]
        );
    }
}

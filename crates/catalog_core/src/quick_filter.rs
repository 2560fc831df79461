//! Shortcut pills that expand into a concrete category selection.

use crate::{config::QuickFilter, filter::FilterState, model::IconRecord, taxonomy::Taxonomy};

/// Key of the shortcut that clears every filter.
pub const ALL_QUICK_FILTER: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Filter change produced by resolving a shortcut.
pub enum QuickFilterSelection {
    /// Clear query and selection.
    ClearAll,
    /// Replace the selection with these labels.
    Select(Vec<String>),
}

/// Resolves a shortcut key into a selection.
///
/// Collects the taxonomy labels of every section whose name contains the key (or of every
/// section for an `all_sections` shortcut), then the dataset labels containing one of the
/// shortcut's label keywords, and keeps the first `cap` distinct labels ignoring case.
/// Returns `None` for an unknown key.
pub fn resolve_quick_filter(
    key: &str,
    quick_filters: &[QuickFilter],
    taxonomy: &Taxonomy,
    records: &[IconRecord],
    cap: usize,
) -> Option<QuickFilterSelection> {
    let key = key.to_lowercase();
    if key == ALL_QUICK_FILTER {
        return Some(QuickFilterSelection::ClearAll);
    }
    let quick_filter = quick_filters
        .iter()
        .find(|quick_filter| quick_filter.key.to_lowercase() == key)?;

    let mut labels: Vec<String> = Vec::new();
    let mut push_unique = |label: &str| {
        let folded = label.to_lowercase();
        if !labels.iter().any(|existing| existing.to_lowercase() == folded) {
            labels.push(label.to_string());
        }
    };

    for section in taxonomy
        .sections()
        .iter()
        .filter(|section| {
            quick_filter.all_sections || section.name.to_lowercase().contains(&key)
        })
    {
        for entry in &section.categories {
            push_unique(&entry.label);
        }
    }

    let keywords: Vec<String> = quick_filter
        .label_keywords
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .collect();
    if !keywords.is_empty() {
        for label in records
            .iter()
            .flat_map(|record| record.categories.iter())
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
        {
            let folded = label.to_lowercase();
            if keywords.iter().any(|keyword| folded.contains(keyword)) {
                push_unique(label);
            }
        }
    }

    labels.truncate(cap);
    Some(QuickFilterSelection::Select(labels))
}

/// Returns whether a pill should render as active for the current selection.
pub fn is_quick_filter_active(quick_filter: &QuickFilter, filter: &FilterState) -> bool {
    if quick_filter.key.eq_ignore_ascii_case(ALL_QUICK_FILTER) {
        return filter.selected_categories().is_empty();
    }
    filter.selected_categories().iter().any(|selected| {
        let selected = selected.to_lowercase();
        quick_filter
            .label_keywords
            .iter()
            .any(|keyword| selected.contains(&keyword.to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::{default_quick_filters, default_sections},
        taxonomy::index_categories,
    };

    fn icon(id: &str, categories: &[&str]) -> IconRecord {
        IconRecord {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            image_url: format!("https://cdn.example/{id}.png"),
            image_url_grid: None,
            image_url_preview: None,
        }
    }

    fn resolve(key: &str, records: &[IconRecord]) -> Option<QuickFilterSelection> {
        let taxonomy = index_categories(records, &default_sections());
        resolve_quick_filter(key, &default_quick_filters(), &taxonomy, records, 5)
    }

    #[test]
    fn all_clears_filters() {
        assert_eq!(resolve("ALL", &[]), Some(QuickFilterSelection::ClearAll));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(resolve("planets", &[]), None);
    }

    #[test]
    fn section_labels_come_first_then_keyword_labels_capped_at_five() {
        let records = vec![
            icon("a", &["Wildlife", "Farm Animal"]),
            icon("b", &["Wildlife", "Pets"]),
            icon("c", &["Zoo", "Sea Animal", "Animal Kingdom", "animal kingdom"]),
        ];
        let Some(QuickFilterSelection::Select(labels)) = resolve("animals", &records) else {
            panic!("expected selection");
        };
        assert_eq!(
            labels,
            vec!["Wildlife", "Pets", "Zoo", "Farm Animal", "Sea Animal"]
        );
    }

    #[test]
    fn vehicles_collect_transport_labels_once() {
        let records = vec![icon("a", &["Public Transportation"]), icon("b", &["Boats"])];
        let Some(QuickFilterSelection::Select(labels)) = resolve("vehicles", &records) else {
            panic!("expected selection");
        };
        assert_eq!(labels, vec!["Public Transportation"]);
    }

    #[test]
    fn shortcut_without_matches_selects_nothing() {
        let records = vec![icon("a", &["Boats"])];
        assert_eq!(
            resolve("animals", &records),
            Some(QuickFilterSelection::Select(Vec::new()))
        );
    }

    #[test]
    fn latest_and_sponsors_draw_from_every_section() {
        let records = vec![
            icon("a", &["Daily Routine", "Party"]),
            icon("b", &["Pets", "Gym"]),
            icon("c", &["Brand Logo"]),
        ];
        let expected = QuickFilterSelection::Select(
            ["Daily Routine", "Party", "Pets", "Gym", "Brand Logo"]
                .iter()
                .map(|label| label.to_string())
                .collect(),
        );

        assert_eq!(resolve("latest", &records), Some(expected.clone()));
        assert_eq!(resolve("sponsors", &records), Some(expected));
    }

    #[test]
    fn active_state_follows_selection() {
        let quick_filters = default_quick_filters();
        let mut filter = FilterState::default();
        assert!(is_quick_filter_active(&quick_filters[0], &filter));

        filter.select_categories(["Farm Animals"]);
        assert!(!is_quick_filter_active(&quick_filters[0], &filter));
        assert!(is_quick_filter_active(&quick_filters[2], &filter));
        assert!(!is_quick_filter_active(&quick_filters[3], &filter));
    }
}

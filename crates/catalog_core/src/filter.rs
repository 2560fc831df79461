//! Free-text and category filtering over the resident record set.

use serde::{Deserialize, Serialize};

use crate::model::IconRecord;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// User-driven filter inputs.
///
/// Selected labels are kept unique ignoring case; their order only affects the active-filters
/// display.
pub struct FilterState {
    query: String,
    selected: Vec<String>,
}

impl FilterState {
    /// Current free-text query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selected category labels.
    pub fn selected_categories(&self) -> &[String] {
        &self.selected
    }

    /// Returns whether neither dimension constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.selected.is_empty()
    }

    /// Returns whether `label` is selected, ignoring case.
    pub fn is_selected(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.selected
            .iter()
            .any(|selected| selected.to_lowercase() == label)
    }

    /// Replaces the query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Adds `label` if absent, removes every case-insensitive match otherwise.
    ///
    /// Returns `true` when the label ends up selected.
    pub fn toggle_category(&mut self, label: &str) -> bool {
        if self.is_selected(label) {
            let folded = label.to_lowercase();
            self.selected
                .retain(|selected| selected.to_lowercase() != folded);
            false
        } else {
            self.selected.push(label.to_string());
            true
        }
    }

    /// Replaces the selection, dropping case-insensitive duplicates.
    pub fn select_categories<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.clear();
        for label in labels {
            let label = label.into();
            if !self.is_selected(&label) {
                self.selected.push(label);
            }
        }
    }

    /// Clears query and selection.
    pub fn clear(&mut self) {
        self.query.clear();
        self.selected.clear();
    }

    /// Comma-joined selection shown as the active-filters indicator.
    pub fn active_filters_display(&self) -> String {
        self.selected.join(", ")
    }

    /// Evaluates both predicates against one record.
    pub fn matches(&self, record: &IconRecord) -> bool {
        self.matcher().matches(record)
    }

    fn matcher(&self) -> Matcher {
        Matcher {
            query: self.query.to_lowercase(),
            selected: self.selected.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// Case-folded copy of a [`FilterState`] so a scan folds the inputs once.
struct Matcher {
    query: String,
    selected: Vec<String>,
}

impl Matcher {
    fn matches(&self, record: &IconRecord) -> bool {
        self.matches_text(record) && self.matches_categories(record)
    }

    fn matches_text(&self, record: &IconRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(&self.query)
            || record.description.to_lowercase().contains(&self.query)
            || record
                .categories
                .iter()
                .any(|category| category.to_lowercase().contains(&self.query))
    }

    fn matches_categories(&self, record: &IconRecord) -> bool {
        if self.selected.is_empty() {
            return true;
        }
        record.categories.iter().any(|category| {
            let category = category.to_lowercase();
            self.selected.iter().any(|selected| *selected == category)
        })
    }
}

/// Returns the records matching `filter`, preserving input order.
pub fn filter_records<'a>(records: &'a [IconRecord], filter: &FilterState) -> Vec<&'a IconRecord> {
    let matcher = filter.matcher();
    records
        .iter()
        .filter(|record| matcher.matches(record))
        .collect()
}

/// Counts the records matching `filter` without collecting them.
pub fn count_matches(records: &[IconRecord], filter: &FilterState) -> usize {
    let matcher = filter.matcher();
    records
        .iter()
        .filter(|record| matcher.matches(record))
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn icon(id: &str, name: &str, description: &str, categories: &[&str]) -> IconRecord {
        IconRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            image_url: format!("https://cdn.example/{id}.png"),
            image_url_grid: None,
            image_url_preview: None,
        }
    }

    fn ids(records: &[&IconRecord]) -> Vec<String> {
        records.iter().map(|record| record.id.clone()).collect()
    }

    fn sample() -> Vec<IconRecord> {
        vec![
            icon("1", "Category Icon", "a folder", &["Interface"]),
            icon("2", "Tabby", "striped", &["Cats", "Pets"]),
            icon("3", "Dog", "loyal friend", &["Pets"]),
            icon("4", "Lamp", "Delicate light", &["Home"]),
        ]
    }

    #[test]
    fn text_query_matches_name_description_or_label() {
        let records = sample();
        let mut filter = FilterState::default();
        filter.set_query("CAT");
        assert_eq!(ids(&filter_records(&records, &filter)), vec!["1", "2", "4"]);
    }

    #[test]
    fn category_selection_requires_exact_label_ignoring_case() {
        let records = sample();
        let mut filter = FilterState::default();
        filter.toggle_category("pets");
        assert_eq!(ids(&filter_records(&records, &filter)), vec!["2", "3"]);

        filter.select_categories(["Pet"]);
        assert!(filter_records(&records, &filter).is_empty());
    }

    #[test]
    fn query_and_selection_combine_with_and() {
        let records = sample();
        let mut filter = FilterState::default();
        filter.toggle_category("Pets");
        filter.set_query("loyal");
        assert_eq!(ids(&filter_records(&records, &filter)), vec!["3"]);
        assert_eq!(count_matches(&records, &filter), 1);
    }

    #[test]
    fn toggle_removes_case_insensitive_matches() {
        let mut filter = FilterState::default();
        assert!(filter.toggle_category("Animals"));
        assert!(filter.toggle_category("Cars"));
        assert!(!filter.toggle_category("animals"));
        assert_eq!(filter.selected_categories(), ["Cars".to_string()]);
        assert_eq!(filter.active_filters_display(), "Cars");
    }

    #[test]
    fn select_categories_deduplicates_ignoring_case() {
        let mut filter = FilterState::default();
        filter.select_categories(["Cats", "cats", "Dogs"]);
        assert_eq!(filter.active_filters_display(), "Cats, Dogs");
        filter.clear();
        assert!(filter.is_unconstrained());
    }
}

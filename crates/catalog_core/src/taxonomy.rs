//! Category frequency counting and section grouping for the category browser.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{config::CategorySection, model::IconRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A raw category label and the number of records carrying it.
pub struct CategoryCount {
    /// Trimmed label as it appears in the dataset.
    pub label: String,
    /// Occurrences across all records.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One section of the browsable taxonomy.
pub struct TaxonomySection {
    /// Section display name.
    pub name: String,
    /// Matching labels, most frequent first.
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Section name to category-count mapping, in configuration order.
pub struct Taxonomy {
    sections: Vec<TaxonomySection>,
}

impl Taxonomy {
    /// All sections, including empty ones.
    pub fn sections(&self) -> &[TaxonomySection] {
        &self.sections
    }

    /// Sections with at least one matching label.
    pub fn non_empty_sections(&self) -> impl Iterator<Item = &TaxonomySection> {
        self.sections
            .iter()
            .filter(|section| !section.categories.is_empty())
    }

    /// Looks up a section by exact name.
    pub fn section(&self, name: &str) -> Option<&TaxonomySection> {
        self.sections.iter().find(|section| section.name == name)
    }
}

/// Counts trimmed, non-blank category labels in first-seen order.
pub fn count_categories(records: &[IconRecord]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for label in records
        .iter()
        .flat_map(|record| record.categories.iter())
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
    {
        match positions.get(label) {
            Some(&position) => counts[position].count += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts
}

/// Groups category counts into the configured sections.
///
/// A label may land in several sections; labels matching none are left out. Within a section
/// labels are sorted by descending count, ties keeping first-seen order.
pub fn index_categories(records: &[IconRecord], sections: &[CategorySection]) -> Taxonomy {
    let counts = count_categories(records);
    let sections = sections
        .iter()
        .map(|section| {
            let mut categories: Vec<CategoryCount> = counts
                .iter()
                .filter(|entry| section.matches_label(&entry.label))
                .cloned()
                .collect();
            categories.sort_by(|a, b| b.count.cmp(&a.count));
            TaxonomySection {
                name: section.name.clone(),
                categories,
            }
        })
        .collect();
    Taxonomy { sections }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::default_sections;

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

    #[test]
    fn counts_trim_labels_and_skip_blanks() {
        let records = vec![
            icon("a", &["Animals ", "", "Pets"]),
            icon("b", &["Animals", "  "]),
        ];
        assert_eq!(
            count_categories(&records),
            vec![
                CategoryCount {
                    label: "Animals".to_string(),
                    count: 2
                },
                CategoryCount {
                    label: "Pets".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn sections_sort_by_count_and_omit_unmatched_labels() {
        let records = vec![
            icon("a", &["Pets", "Quantum Flux"]),
            icon("b", &["Wildlife", "Pets"]),
            icon("c", &["Wildlife"]),
            icon("d", &["Wildlife"]),
        ];
        let taxonomy = index_categories(&records, &default_sections());
        let animals = taxonomy.section("Animals").expect("animals section");
        let labels: Vec<(&str, usize)> = animals
            .categories
            .iter()
            .map(|entry| (entry.label.as_str(), entry.count))
            .collect();
        assert_eq!(labels, vec![("Wildlife", 3), ("Pets", 2)]);
        assert!(taxonomy
            .sections()
            .iter()
            .all(|section| section.categories.iter().all(|c| c.label != "Quantum Flux")));
    }

    #[test]
    fn label_can_belong_to_multiple_sections_and_empty_sections_are_kept() {
        let records = vec![icon("a", &["Leisure"])];
        let taxonomy = index_categories(&records, &default_sections());
        assert_eq!(taxonomy.sections().len(), 23);
        let holders: Vec<&str> = taxonomy
            .non_empty_sections()
            .map(|section| section.name.as_str())
            .collect();
        assert_eq!(holders, vec!["Hobbies", "Entertainment & Leisure"]);
    }

    #[test]
    fn indexing_is_deterministic() {
        let records = vec![icon("a", &["Cars", "Trucks"]), icon("b", &["Trucks"])];
        assert_eq!(
            index_categories(&records, &default_sections()),
            index_categories(&records, &default_sections())
        );
    }
}

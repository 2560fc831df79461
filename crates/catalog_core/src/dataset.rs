//! The resident record set and the taxonomy derived from it.

use crate::{
    config::CategorySection,
    error::CatalogError,
    filter::{count_matches, filter_records, FilterState},
    model::IconRecord,
    taxonomy::{index_categories, Taxonomy},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a detail lookup by identifier.
pub enum Lookup<'a> {
    /// The record exists.
    Found(&'a IconRecord),
    /// No record carries the identifier.
    NotFound {
        /// Identifier that was requested.
        id: String,
    },
}

impl<'a> Lookup<'a> {
    /// Converts into an [`Option`], discarding the requested id.
    pub fn found(self) -> Option<&'a IconRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Immutable record set loaded once at startup, with its taxonomy index.
///
/// The taxonomy is computed on construction only, so it tracks dataset identity.
pub struct Catalog {
    records: Vec<IconRecord>,
    taxonomy: Taxonomy,
}

impl Catalog {
    /// Builds a catalog and indexes its categories into `sections`.
    pub fn new(records: Vec<IconRecord>, sections: &[CategorySection]) -> Self {
        let taxonomy = index_categories(&records, sections);
        Self { records, taxonomy }
    }

    /// Parses a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Dataset`] when the payload is not an array of records.
    pub fn from_json_str(raw: &str, sections: &[CategorySection]) -> Result<Self, CatalogError> {
        let records: Vec<IconRecord> = serde_json::from_str(raw).map_err(CatalogError::Dataset)?;
        Ok(Self::new(records, sections))
    }

    /// All records in source order.
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    /// Total record count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Category sections with counts.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Records matching `filter` in source order.
    pub fn filtered(&self, filter: &FilterState) -> Vec<&IconRecord> {
        filter_records(&self.records, filter)
    }

    /// Number of records matching `filter`.
    pub fn filtered_len(&self, filter: &FilterState) -> usize {
        count_matches(&self.records, filter)
    }

    /// Finds a record by identifier with a linear scan.
    pub fn lookup(&self, id: &str) -> Lookup<'_> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .map(Lookup::Found)
            .unwrap_or_else(|| Lookup::NotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::default_sections;

    const SAMPLE: &str = r#"[
        {"id": "a", "name": "Owl", "description": "Night bird", "categories": ["Animals"], "imageUrl": "https://cdn.example/a.png"},
        {"id": "b", "name": "Taxi", "description": "Yellow cab", "categories": ["Vehicles"], "imageUrl": "https://cdn.example/b.png"}
    ]"#;

    #[test]
    fn parses_records_and_indexes_taxonomy() {
        let catalog = Catalog::from_json_str(SAMPLE, &default_sections()).expect("catalog");
        assert_eq!(catalog.len(), 2);
        let animals = catalog.taxonomy().section("Animals").expect("section");
        assert_eq!(animals.categories[0].label, "Animals");
    }

    #[test]
    fn lookup_reports_not_found_without_failing() {
        let catalog = Catalog::from_json_str(SAMPLE, &default_sections()).expect("catalog");
        assert_eq!(
            catalog.lookup("b").found().map(|record| record.name.as_str()),
            Some("Taxi")
        );
        assert_eq!(
            catalog.lookup("zzz"),
            Lookup::NotFound {
                id: "zzz".to_string()
            }
        );
    }

    #[test]
    fn malformed_payload_is_a_dataset_error() {
        let err = Catalog::from_json_str(r#"{"id": "a"}"#, &default_sections()).unwrap_err();
        assert!(matches!(err, CatalogError::Dataset(_)));
    }
}

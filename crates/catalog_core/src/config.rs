//! Static catalog configuration: taxonomy sections, quick filters, paging, and presentation
//! variants.
//!
//! The browser runtime embeds `catalog.config.toml` at build time and decodes it into
//! [`CatalogConfig`]. [`CatalogConfig::default`] mirrors that file so the engine is usable in
//! tests and tools without it.

use serde::{Deserialize, Serialize};

use crate::{error::CatalogError, pagination::DEFAULT_PAGE_SIZE};

/// Configuration schema version accepted by this build.
pub const CATALOG_CONFIG_SCHEMA_VERSION: u32 = 1;

const DEFAULT_QUICK_FILTER_CAP: usize = 5;
const DEFAULT_MODAL_PREVIEW_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Human-facing grouping that classifies raw category labels by keyword substrings.
pub struct CategorySection {
    /// Display name of the section.
    pub name: String,
    /// Lowercase keyword substrings.
    pub keywords: Vec<String>,
}

impl CategorySection {
    /// Creates a section from borrowed keyword literals.
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|kw| kw.to_lowercase()).collect(),
        }
    }

    /// Returns whether a raw label belongs to this section.
    ///
    /// A label matches when its lowercase form contains a keyword or is contained by one.
    pub fn matches_label(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            label.contains(&keyword) || keyword.contains(&label)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Shortcut control that maps to a precomputed category selection.
pub struct QuickFilter {
    /// Stable key dispatched by the pill (`all`, `animals`, ...).
    pub key: String,
    /// Pill text.
    pub label: String,
    /// Extra substrings matched against every dataset label when resolving the shortcut.
    #[serde(default)]
    pub label_keywords: Vec<String>,
    /// Collect labels from every taxonomy section instead of only sections named after the key.
    #[serde(default)]
    pub all_sections: bool,
}

impl QuickFilter {
    fn new(key: &str, label_keywords: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: key.to_string(),
            label_keywords: label_keywords.iter().map(|kw| kw.to_string()).collect(),
            all_sections: false,
        }
    }

    fn spanning_all_sections(mut self) -> Self {
        self.all_sections = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Color theme applied to the catalog root.
pub enum Theme {
    /// Light gradient background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Tile density for the icon grid.
pub enum GridDensity {
    /// More, smaller tiles per row.
    Compact,
    /// Default tile size.
    #[default]
    Comfortable,
}

impl GridDensity {
    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfortable => "comfortable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Arrangement of the detail page.
pub enum DetailLayout {
    /// Image and text side by side.
    #[default]
    Split,
    /// Image above text.
    Stacked,
}

impl DetailLayout {
    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Stacked => "stacked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Complete catalog configuration.
pub struct CatalogConfig {
    /// Schema version of the source file.
    pub schema_version: u32,
    /// Records revealed initially and per reveal-more step.
    pub page_size: usize,
    /// Maximum labels a quick filter selects.
    pub quick_filter_cap: usize,
    /// Labels listed per section in the category browser.
    pub modal_preview_limit: usize,
    /// Placeholder text for the search field.
    pub search_placeholder: String,
    /// File extension used for downloaded images.
    pub download_extension: String,
    /// Color theme.
    pub theme: Theme,
    /// Grid tile density.
    pub grid_density: GridDensity,
    /// Detail page arrangement.
    pub detail_layout: DetailLayout,
    /// Browsable taxonomy sections, in display order.
    pub sections: Vec<CategorySection>,
    /// Quick-filter pills, in display order.
    pub quick_filters: Vec<QuickFilter>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            schema_version: CATALOG_CONFIG_SCHEMA_VERSION,
            page_size: DEFAULT_PAGE_SIZE,
            quick_filter_cap: DEFAULT_QUICK_FILTER_CAP,
            modal_preview_limit: DEFAULT_MODAL_PREVIEW_LIMIT,
            search_placeholder: "Search 7000 Things".to_string(),
            download_extension: "png".to_string(),
            theme: Theme::default(),
            grid_density: GridDensity::default(),
            detail_layout: DetailLayout::default(),
            sections: default_sections(),
            quick_filters: default_quick_filters(),
        }
    }
}

impl CatalogConfig {
    /// Decodes and validates a JSON configuration payload.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ConfigParse`] for undecodable JSON and
    /// [`CatalogError::ConfigInvalid`] when [`CatalogConfig::validate`] rejects the result.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let config: Self = serde_json::from_str(raw).map_err(CatalogError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks structural rules the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ConfigInvalid`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.schema_version != CATALOG_CONFIG_SCHEMA_VERSION {
            return Err(CatalogError::ConfigInvalid(format!(
                "expected schema_version {CATALOG_CONFIG_SCHEMA_VERSION}, found {}",
                self.schema_version
            )));
        }
        if self.page_size == 0 {
            return Err(CatalogError::ConfigInvalid(
                "page_size must be positive".to_string(),
            ));
        }
        if self.quick_filter_cap == 0 {
            return Err(CatalogError::ConfigInvalid(
                "quick_filter_cap must be positive".to_string(),
            ));
        }
        for section in &self.sections {
            if section.name.trim().is_empty() {
                return Err(CatalogError::ConfigInvalid(
                    "section name must not be blank".to_string(),
                ));
            }
            if section.keywords.iter().any(|kw| kw.trim().is_empty()) || section.keywords.is_empty()
            {
                return Err(CatalogError::ConfigInvalid(format!(
                    "section `{}` needs non-blank keywords",
                    section.name
                )));
            }
        }
        for quick_filter in &self.quick_filters {
            if quick_filter.key.trim().is_empty() {
                return Err(CatalogError::ConfigInvalid(
                    "quick filter key must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Looks up a quick filter by key, ignoring case.
    pub fn quick_filter(&self, key: &str) -> Option<&QuickFilter> {
        self.quick_filters
            .iter()
            .find(|quick_filter| quick_filter.key.eq_ignore_ascii_case(key))
    }
}

/// Built-in taxonomy sections.
pub fn default_sections() -> Vec<CategorySection> {
    vec![
        CategorySection::new("Everyday Life", &["everyday life", "daily", "routine"]),
        CategorySection::new(
            "Events",
            &["events", "celebration", "party", "wedding", "festival"],
        ),
        CategorySection::new("Animals", &["animals", "wildlife", "pets", "zoo"]),
        CategorySection::new("Sports", &["sports", "fitness", "exercise", "gym", "game"]),
        CategorySection::new("Countries", &["countries", "nation", "flag", "geography"]),
        CategorySection::new("Professions", &["professions", "jobs", "career", "work"]),
        CategorySection::new("Hobbies", &["hobbies", "craft", "art", "leisure"]),
        CategorySection::new(
            "Nature & Outdoors",
            &["nature", "outdoors", "environment", "plants", "trees"],
        ),
        CategorySection::new(
            "Places & Structures",
            &["places", "structures", "buildings", "architecture"],
        ),
        CategorySection::new(
            "Technology & Media",
            &["technology", "media", "tech", "digital", "computer"],
        ),
        CategorySection::new(
            "Vehicles & Transport",
            &["vehicles", "transport", "car", "truck", "plane"],
        ),
        CategorySection::new(
            "Entertainment & Leisure",
            &["entertainment", "leisure", "fun", "music"],
        ),
        CategorySection::new(
            "Food & Drink",
            &["food", "drink", "cuisine", "cooking", "kitchen"],
        ),
        CategorySection::new(
            "Work & Industry",
            &["work", "industry", "business", "office", "manufacturing"],
        ),
        CategorySection::new(
            "Space & Science",
            &["space", "science", "astronomy", "research"],
        ),
        CategorySection::new(
            "Interface & Symbols",
            &["interface", "symbols", "icons", "ui", "signs"],
        ),
        CategorySection::new(
            "Health & Wellness",
            &["health", "wellness", "medical", "medicine"],
        ),
        CategorySection::new(
            "Fashion & Style",
            &["fashion", "style", "clothing", "accessories"],
        ),
        CategorySection::new(
            "History & Culture",
            &["history", "culture", "heritage", "tradition"],
        ),
        CategorySection::new(
            "Fantasy & Imagination",
            &["fantasy", "imagination", "magical", "mythical"],
        ),
        CategorySection::new("Flags", &["flags", "banner", "national"]),
        CategorySection::new(
            "Historical Figures",
            &["historical", "figures", "people", "famous"],
        ),
        CategorySection::new("Sponsors", &["sponsors", "brand", "logo", "company"]),
    ]
}

/// Built-in quick-filter pills.
pub fn default_quick_filters() -> Vec<QuickFilter> {
    vec![
        QuickFilter::new("all", &[]),
        QuickFilter::new("latest", &["latest"]).spanning_all_sections(),
        QuickFilter::new("animals", &["animal"]),
        QuickFilter::new("vehicles", &["vehicle", "transport"]),
        QuickFilter::new("sponsors", &["sponsor"]).spanning_all_sections(),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid_and_matches_documented_values() {
        let config = CatalogConfig::default();
        config.validate().expect("default config valid");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.quick_filter_cap, 5);
        assert_eq!(config.sections.len(), 23);
        assert_eq!(config.quick_filters[0].key, "all");
    }

    #[test]
    fn section_matches_in_both_directions() {
        let animals = CategorySection::new("Animals", &["animals", "wildlife", "pets", "zoo"]);
        assert!(animals.matches_label("Farm Animals"));
        assert!(animals.matches_label("Pet"));
        assert!(animals.matches_label("ZOO"));
        assert!(!animals.matches_label("Cars"));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config =
            CatalogConfig::from_json_str(r#"{"page_size": 24, "theme": "dark"}"#).expect("config");
        assert_eq!(config.page_size, 24);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.detail_layout, DetailLayout::Split);
        assert_eq!(config.sections, default_sections());
    }

    #[test]
    fn validation_rejects_zero_page_size_and_blank_keywords() {
        let err = CatalogConfig::from_json_str(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigInvalid(_)));

        let config = CatalogConfig {
            sections: vec![CategorySection {
                name: "Empty".to_string(),
                keywords: vec!["  ".to_string()],
            }],
            ..CatalogConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn schema_mismatch_is_reported() {
        let err = CatalogConfig::from_json_str(r#"{"schema_version": 2}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "catalog config invalid: expected schema_version 1, found 2"
        );
    }

    #[test]
    fn quick_filter_lookup_ignores_case() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.quick_filter("Vehicles").map(|qf| qf.label_keywords.len()),
            Some(2)
        );
        assert!(config.quick_filter("unknown").is_none());
    }
}

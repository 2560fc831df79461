//! Typed view of `catalog.config.toml`, shared by the build script and the crate's tests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeManifest {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridDensityManifest {
    Compact,
    Comfortable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLayoutManifest {
    Split,
    Stacked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionManifest {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickFilterManifest {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub label_keywords: Vec<String>,
    #[serde(default)]
    pub all_sections: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogManifest {
    pub schema_version: u32,
    pub page_size: usize,
    pub quick_filter_cap: usize,
    pub modal_preview_limit: usize,
    pub search_placeholder: String,
    pub download_extension: String,
    pub theme: ThemeManifest,
    pub grid_density: GridDensityManifest,
    pub detail_layout: DetailLayoutManifest,
    pub sections: Vec<SectionManifest>,
    pub quick_filters: Vec<QuickFilterManifest>,
}

impl CatalogManifest {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let manifest: Self = toml::from_str(raw).map_err(|err| err.to_string())?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != 1 {
            return Err(format!(
                "schema mismatch: expected 1 found {}",
                self.schema_version
            ));
        }
        if self.page_size == 0 {
            return Err("page_size must be positive".to_string());
        }
        if self.quick_filter_cap == 0 {
            return Err("quick_filter_cap must be positive".to_string());
        }
        for section in &self.sections {
            if section.name.trim().is_empty() {
                return Err("section with blank name".to_string());
            }
            if section.keywords.is_empty() || section.keywords.iter().any(|kw| kw.trim().is_empty())
            {
                return Err(format!(
                    "section `{}` needs non-blank keywords",
                    section.name
                ));
            }
        }
        if self.quick_filters.iter().any(|qf| qf.key.trim().is_empty()) {
            return Err("quick filter with blank key".to_string());
        }
        Ok(())
    }
}

//! Icon records and the download requests derived from them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One immutable catalog entry as shipped in the static metadata file.
pub struct IconRecord {
    /// Unique identifier used for detail routing.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Raw category labels. Order carries no meaning.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Full-size image URL; also the download source.
    pub image_url: String,
    /// Precomputed grid thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url_grid: Option<String>,
    /// Precomputed large preview URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url_preview: Option<String>,
}

impl IconRecord {
    /// Thumbnail for grid tiles, falling back to the primary image.
    pub fn grid_image_url(&self) -> &str {
        self.image_url_grid.as_deref().unwrap_or(&self.image_url)
    }

    /// Image shown on the detail page, falling back to the primary image.
    pub fn preview_image_url(&self) -> &str {
        self.image_url_preview.as_deref().unwrap_or(&self.image_url)
    }

    /// Builds the save request for this record's primary image.
    pub fn download_request(&self, extension: &str) -> DownloadRequest {
        DownloadRequest {
            url: self.image_url.clone(),
            file_name: format!("{}.{}", self.name, extension.trim_start_matches('.')),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Fetch-then-save instruction handed to the host download service.
pub struct DownloadRequest {
    /// Source URL to fetch.
    pub url: String,
    /// Suggested file name for the saved asset.
    pub file_name: String,
}

impl DownloadRequest {
    /// User-facing alert text for a failed download.
    pub fn failure_message(&self) -> String {
        format!("Failed to download \"{}\". Please try again.", self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record() -> IconRecord {
        IconRecord {
            id: "rocket".to_string(),
            name: "Rocket".to_string(),
            description: "A small rocket".to_string(),
            categories: vec!["Space".to_string()],
            image_url: "https://cdn.example/rocket.png".to_string(),
            image_url_grid: None,
            image_url_preview: Some("https://cdn.example/rocket-1000.png".to_string()),
        }
    }

    #[test]
    fn image_urls_fall_back_to_primary() {
        let record = record();
        assert_eq!(record.grid_image_url(), "https://cdn.example/rocket.png");
        assert_eq!(
            record.preview_image_url(),
            "https://cdn.example/rocket-1000.png"
        );
    }

    #[test]
    fn download_request_uses_display_name_and_extension() {
        let request = record().download_request(".png");
        assert_eq!(request.file_name, "Rocket.png");
        assert_eq!(request.url, "https://cdn.example/rocket.png");
        assert_eq!(
            request.failure_message(),
            "Failed to download \"Rocket.png\". Please try again."
        );
    }

    #[test]
    fn deserializes_camel_case_metadata_and_ignores_unknown_keys() {
        let raw = r#"{
            "id": "cat-01",
            "name": "Cat",
            "description": "Sleepy cat",
            "categories": ["Animals", "Pets"],
            "imageUrl": "https://cdn.example/cat.png",
            "imageUrlGrid": "https://cdn.example/cat-320.png",
            "originalImageUrl": "https://cdn.example/image-abc.png"
        }"#;
        let record: IconRecord = serde_json::from_str(raw).expect("record");
        assert_eq!(record.categories, vec!["Animals", "Pets"]);
        assert_eq!(record.grid_image_url(), "https://cdn.example/cat-320.png");
        assert_eq!(record.image_url_preview, None);
    }
}

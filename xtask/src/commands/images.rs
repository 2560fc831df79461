//! `cargo xtask rename-images`: restore the file names the metadata expects from encoded downloads.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

const ENCODED_PREFIX: &str = "image-";

/// `cargo xtask rename-images <metadata> <images_dir>`
pub struct RenameImagesCommand;

/// Parsed `rename-images` arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenameImagesOptions {
    /// Metadata file listing `originalImageUrl` and `image` per entry.
    pub metadata: String,
    /// Directory holding the downloaded images.
    pub images_dir: String,
}

/// The two metadata fields this command reads. Other keys are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    /// Source URL whose last segment is the encoded file name.
    #[serde(default)]
    pub original_image_url: Option<String>,
    /// File name the site expects.
    #[serde(default)]
    pub image: Option<String>,
}

/// Outcome of one rename pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenameReport {
    /// `(encoded, expected)` pairs that were copied.
    pub renamed: Vec<(String, String)>,
    /// Copies that failed, with the error text.
    pub failed: Vec<(String, String)>,
}

impl XtaskCommand for RenameImagesCommand {
    type Options = RenameImagesOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        match args {
            [metadata, images_dir] => Ok(RenameImagesOptions {
                metadata: metadata.clone(),
                images_dir: images_dir.clone(),
            }),
            _ => Err(
                XtaskError::validation("rename-images expects <metadata> <images_dir>")
                    .with_hint("cargo xtask rename-images data/metadata.json public/images"),
            ),
        }
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        let metadata = ctx.resolve(&options.metadata);
        let images_dir = ctx.resolve(&options.images_dir);

        let raw = fs::read_to_string(&metadata).map_err(|err| {
            XtaskError::from(err)
                .with_operation("rename-images")
                .with_path(&metadata)
        })?;
        let entries: Vec<ImageEntry> = serde_json::from_str(&raw).map_err(|err| {
            XtaskError::from(err)
                .with_operation("rename-images")
                .with_path(&metadata)
        })?;

        let report = rename_images(&entries, &images_dir);
        for (encoded, expected) in &report.renamed {
            println!("Renamed: {encoded} -> {expected}");
        }
        for (encoded, err) in &report.failed {
            eprintln!("Error renaming {encoded}: {err}");
        }
        println!("Renamed {} files", report.renamed.len());
        Ok(())
    }
}

/// Encoded file name carried by `original_image_url`, when it follows the `image-` convention.
pub fn encoded_file_name(original_image_url: &str) -> Option<&str> {
    original_image_url
        .rsplit('/')
        .next()
        .filter(|segment| segment.starts_with(ENCODED_PREFIX))
}

/// Copies each encoded image to its expected name.
///
/// An entry is skipped when either field is missing, the encoded file does not exist, or the
/// expected file already does. Originals are left in place. A copy failure is recorded and the
/// pass continues.
pub fn rename_images(entries: &[ImageEntry], images_dir: &Path) -> RenameReport {
    let mut report = RenameReport::default();
    for entry in entries {
        let (Some(original_url), Some(expected)) = (&entry.original_image_url, &entry.image) else {
            continue;
        };
        let Some(encoded) = encoded_file_name(original_url) else {
            continue;
        };
        if !is_plain_file_name(expected) || !is_plain_file_name(encoded) {
            continue;
        }

        let encoded_path = images_dir.join(encoded);
        let expected_path = images_dir.join(expected);
        if !encoded_path.is_file() || expected_path.exists() {
            continue;
        }

        match fs::copy(&encoded_path, &expected_path) {
            Ok(_) => report
                .renamed
                .push((encoded.to_string(), expected.to_string())),
            Err(err) => report.failed.push((encoded.to_string(), err.to_string())),
        }
    }
    report
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && Path::new(name).file_name() == Some(std::ffi::OsStr::new(name))
}

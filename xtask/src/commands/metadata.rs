//! `cargo xtask process-metadata`: derive optimized image URLs for the catalog metadata file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

const OPTIMIZER_BASE_URL: &str = "https://www.thiings.co/_next/image?url=";
const GRID_WIDTH: u32 = 320;
const PREVIEW_WIDTH: u32 = 1000;
const IMAGE_QUALITY: u32 = 75;
const PROGRESS_INTERVAL: usize = 1000;

/// `cargo xtask process-metadata <in> <out>`
pub struct ProcessMetadataCommand;

/// Parsed `process-metadata` arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcessMetadataOptions {
    /// Source metadata file.
    pub input: String,
    /// Destination file; may equal the input.
    pub output: String,
}

impl XtaskCommand for ProcessMetadataCommand {
    type Options = ProcessMetadataOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        match args {
            [input, output] => Ok(ProcessMetadataOptions {
                input: input.clone(),
                output: output.clone(),
            }),
            _ => Err(
                XtaskError::validation("process-metadata expects <in> <out>")
                    .with_hint("cargo xtask process-metadata data/backup.json data/metadata.json"),
            ),
        }
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        let input = ctx.resolve(&options.input);
        let output = ctx.resolve(&options.output);
        let processed = process_metadata_file(&input, &output)?;
        println!("Processed {processed} entries into {}", output.display());
        Ok(())
    }
}

/// Grid and preview URLs routed through the image optimizer.
pub fn optimized_image_urls(image_url: &str) -> (String, String) {
    let encoded = urlencoding::encode(image_url);
    (
        format!("{OPTIMIZER_BASE_URL}{encoded}&w={GRID_WIDTH}&q={IMAGE_QUALITY}"),
        format!("{OPTIMIZER_BASE_URL}{encoded}&w={PREVIEW_WIDTH}&q={IMAGE_QUALITY}"),
    )
}

/// Adds `imageUrlGrid` and `imageUrlPreview` to every entry, keeping all other keys in place.
pub fn process_entries(entries: Vec<Value>) -> XtaskResult<Vec<Value>> {
    let mut processed = Vec::with_capacity(entries.len());
    for (index, mut entry) in entries.into_iter().enumerate() {
        if index % PROGRESS_INTERVAL == 0 {
            println!("Processed {index} entries...");
        }

        let Some(object) = entry.as_object_mut() else {
            return Err(XtaskError::data(format!("entry {index} is not a JSON object")));
        };
        let Some(image_url) = object.get("imageUrl").and_then(Value::as_str) else {
            return Err(XtaskError::data(format!(
                "entry {index} has no string `imageUrl`"
            )));
        };

        let (grid, preview) = optimized_image_urls(image_url);
        object.insert("imageUrlGrid".to_string(), Value::String(grid));
        object.insert("imageUrlPreview".to_string(), Value::String(preview));
        processed.push(entry);
    }
    Ok(processed)
}

fn process_metadata_file(input: &Path, output: &Path) -> XtaskResult<usize> {
    let context = |err: XtaskError, path: &Path| {
        err.with_operation("process-metadata").with_path(path)
    };

    println!("Reading {}...", input.display());
    let raw = fs::read_to_string(input).map_err(|err| context(err.into(), input))?;
    let entries: Vec<Value> =
        serde_json::from_str(&raw).map_err(|err| context(err.into(), input))?;

    println!("Processing {} entries...", entries.len());
    let processed = process_entries(entries).map_err(|err| context(err, input))?;

    let rendered =
        serde_json::to_string_pretty(&processed).map_err(|err| context(err.into(), output))?;
    ensure_parent(output).map_err(|err| context(err, output))?;
    fs::write(output, rendered).map_err(|err| context(err.into(), output))?;
    Ok(processed.len())
}

fn ensure_parent(path: &Path) -> XtaskResult<()> {
    match path.parent().map(PathBuf::from) {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}

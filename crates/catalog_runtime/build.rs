use std::fs;
use std::path::PathBuf;

#[path = "build/manifest.rs"]
mod manifest;

use manifest::CatalogManifest;

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog.config.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!(
        "cargo:rerun-if-changed={}",
        crate_root.join("build").join("manifest.rs").display()
    );
    println!(
        "cargo:rerun-if-changed={}",
        crate_root.join("data").join("catalog_metadata.json").display()
    );

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest = CatalogManifest::parse(&raw)
        .unwrap_or_else(|err| panic!("invalid catalog config in {}: {err}", path.display()));

    let json = serde_json::to_string_pretty(&manifest).expect("serialize catalog config");
    let generated = format!(
        "/// Build-time generated catalog configuration JSON.\n\
pub const CATALOG_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("catalog_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}

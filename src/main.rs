//! Builtin database generation entry point.
//!
//! Runs both spreadsheet-to-JSON conversions and writes the bundled app
//! assets. Takes no arguments; paths are fixed relative to the project
//! root.
//!
//! Usage:
//!   cargo run

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use plankton_dbgen::output::write_document;
use plankton_dbgen::{parse_taxonomies, parse_wetweights};

const TAXONOMY_XLSX: &str = "数据库/浮游动物分类.xlsx";
const WETWEIGHT_XLSX: &str = "数据库/评价湿重.xlsx";
const ASSETS_DIR: &str = "android/app/src/main/assets";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let assets_dir = Path::new(ASSETS_DIR);
    fs::create_dir_all(assets_dir)
        .with_context(|| format!("Failed to create assets directory: {ASSETS_DIR}"))?;

    // The two documents are generated independently: a fatal error in one
    // must not block the other, and a failed document is never written.
    let taxonomies = generate_taxonomies(Path::new(TAXONOMY_XLSX), assets_dir);
    let wetweights = generate_wetweights(Path::new(WETWEIGHT_XLSX), assets_dir);

    let mut failed = false;
    for result in [taxonomies, wetweights] {
        match result {
            Ok(path) => println!("Generated {}", path.display()),
            Err(err) => {
                failed = true;
                eprintln!("error: {err:#}");
            }
        }
    }

    if failed {
        bail!("one or more conversions failed");
    }

    Ok(())
}

fn generate_taxonomies(source: &Path, assets_dir: &Path) -> Result<PathBuf> {
    let document = parse_taxonomies(source)
        .with_context(|| format!("Failed to convert {}", source.display()))?;

    let dest = assets_dir.join("taxonomies.json");
    write_document(&document, &dest)?;
    Ok(dest)
}

fn generate_wetweights(source: &Path, assets_dir: &Path) -> Result<PathBuf> {
    let document = parse_wetweights(source)
        .with_context(|| format!("Failed to convert {}", source.display()))?;

    let dest = assets_dir.join("wetweights.json");
    write_document(&document, &dest)?;
    Ok(dest)
}

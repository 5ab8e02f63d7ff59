//! JSON Asset Emission
//!
//! Documents are fully rewritten on every run: pretty-printed UTF-8 with
//! a trailing newline, matching the assets checked into the app.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::Document;

/// Serialize a document and write it to `path`, replacing any previous
/// content.
pub fn write_document<T: Serialize>(document: &Document<T>, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document)
        .context("Failed to serialize document to JSON")?;
    json.push('\n');

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

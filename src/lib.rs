//! Builtin Database Generator
//!
//! Converts the two hand-maintained plankton spreadsheets into the JSON
//! documents bundled with the mobile app:
//! - `taxonomies.json` from the five-level classification workbook
//! - `wetweights.json` from the average-wet-weight reference workbook
//!
//! Both pipelines share the same shape: scan the first sheet top to bottom,
//! carry forward merged-cell values, classify heading vs. data rows, split
//! compound name fields, dedupe by Chinese name, emit a versioned document.
//!
//! - `names`: Chinese/Latin compound name splitting
//! - `groups`: level-1 group label canonicalization
//! - `sheet`: workbook access and cell coercion helpers
//! - `taxonomy` / `wetweight`: the two table parsers
//! - `output`: JSON asset emission

pub mod error;
pub mod groups;
pub mod model;
pub mod names;
pub mod output;
pub mod sheet;
pub mod taxonomy;
pub mod wetweight;

// Re-export commonly used types
pub use error::ImportError;
pub use model::{Document, GroupPath, TaxonomyEntry, TaxonomyPath, WetWeightEntry, SCHEMA_VERSION};
pub use taxonomy::parse_taxonomies;
pub use wetweight::parse_wetweights;

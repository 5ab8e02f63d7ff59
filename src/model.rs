//! Output Data Model
//!
//! Wire structs for the two bundled JSON documents. Field names are
//! camelCase on the wire; optional fields serialize as explicit `null`
//! so the app-side decoder sees a stable shape.

use serde::{Deserialize, Serialize};

/// Static schema tag carried by every generated document.
pub const SCHEMA_VERSION: u32 = 1;

/// One species in `taxonomies.json`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyEntry {
    /// Chinese species label; unique within the document.
    pub name_cn: String,

    /// Latin binomial, when the source field carried a parenthesized part.
    pub name_latin: Option<String>,

    pub taxonomy: TaxonomyPath,
}

/// Five-level classification path. Lower levels may be empty strings when
/// the source row left them blank.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaxonomyPath {
    pub lvl1: String,
    pub lvl2: String,
    pub lvl3: String,
    pub lvl4: String,
    pub lvl5: String,
}

/// One species in `wetweights.json`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WetWeightEntry {
    /// Chinese species label; unique within the document.
    pub name_cn: String,

    pub name_latin: Option<String>,

    /// Individual average wet weight, milligrams.
    pub wet_weight_mg: f64,

    pub taxonomy: GroupPath,
}

/// Two-level grouping for wet-weight entries. `sub` is absent when the
/// species sits directly under a level-1 heading.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GroupPath {
    pub group: String,
    pub sub: Option<String>,
}

/// Output envelope: `{ "version": 1, "entries": [...] }`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document<T> {
    pub version: u32,
    pub entries: Vec<T>,
}

impl<T> Document<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            entries,
        }
    }
}

//! Taxonomy Table Parser
//!
//! The classification workbook lists species under a five-level hierarchy
//! in columns A-E with the compound species name in column F. Higher-level
//! cells are merged in the source, so a blank cell means "same as the
//! nearest non-blank cell above": the scan carries a last-seen value per
//! column from top to bottom.

use std::path::Path;

use calamine::{Data, Range};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::ImportError;
use crate::groups::normalize_lvl1;
use crate::model::{Document, TaxonomyEntry, TaxonomyPath};
use crate::names::split_cn_latin;
use crate::sheet::{cell_text, open_first_sheet};

/// Five hierarchy levels plus the species-name column.
const COLUMNS: usize = 6;

/// Parse the classification workbook into the taxonomy document.
///
/// Fatal only when the workbook is missing or unreadable; malformed rows
/// are skipped. Entries keep the order in which each Chinese name first
/// appears, and later duplicates are dropped.
pub fn parse_taxonomies(path: &Path) -> Result<Document<TaxonomyEntry>, ImportError> {
    let range = open_first_sheet(path)?;
    Ok(collect_taxonomies(&range))
}

fn collect_taxonomies(range: &Range<Data>) -> Document<TaxonomyEntry> {
    let mut carry: [String; COLUMNS] = Default::default();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut entries = Vec::new();

    // Row 1 is the header.
    for row in range.rows().skip(1) {
        let cells: Vec<Option<String>> = (0..COLUMNS)
            .map(|col| row.get(col).and_then(cell_text))
            .collect();

        // Fully blank rows do not reset carried-forward state.
        if cells.iter().all(Option::is_none) {
            continue;
        }

        for (slot, cell) in carry.iter_mut().zip(&cells) {
            if let Some(value) = cell {
                *slot = value.clone();
            }
        }

        // A row without a resolvable species name only contributes
        // higher-level context.
        if carry[5].is_empty() {
            continue;
        }

        let (name_cn, name_latin) = split_cn_latin(&carry[5]);
        if name_cn.is_empty() {
            continue;
        }
        if !seen.insert(name_cn.clone()) {
            debug!(name = %name_cn, "duplicate species name, keeping first occurrence");
            continue;
        }

        entries.push(TaxonomyEntry {
            name_cn,
            name_latin,
            taxonomy: TaxonomyPath {
                lvl1: normalize_lvl1(&carry[0]),
                lvl2: carry[1].clone(),
                lvl3: carry[2].clone(),
                lvl4: carry[3].clone(),
                lvl5: carry[4].clone(),
            },
        });
    }

    Document::new(entries)
}

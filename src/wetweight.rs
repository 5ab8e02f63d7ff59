//! Wet-Weight Table Parser
//!
//! The wet-weight workbook mixes heading rows and data rows in one sheet:
//! a row without a weight value introduces either a level-1 group (when
//! its label is a recognized spelling) or a freeform subgroup. Data rows
//! below a heading inherit the current group/subgroup until the next
//! heading of either kind.

use std::path::Path;

use calamine::{Data, Range};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::ImportError;
use crate::groups::{normalize_lvl1, LEVEL1_LABELS};
use crate::model::{Document, GroupPath, WetWeightEntry};
use crate::sheet::{cell_number, cell_text, is_blank, open_first_sheet};

/// Literal header label that locates the header row.
pub const WEIGHT_HEADER_LABEL: &str = "平均湿重";

/// Parse the wet-weight workbook into the wet-weight document.
///
/// Fatal when the workbook is missing, unreadable, or has no row
/// containing the `平均湿重` header label. Rows with an unparseable
/// weight are skipped without touching the group state.
pub fn parse_wetweights(path: &Path) -> Result<Document<WetWeightEntry>, ImportError> {
    let range = open_first_sheet(path)?;
    collect_wetweights(&range)
}

fn collect_wetweights(range: &Range<Data>) -> Result<Document<WetWeightEntry>, ImportError> {
    let rows: Vec<&[Data]> = range.rows().collect();

    let header_idx = rows
        .iter()
        .position(|row| {
            row.iter()
                .any(|cell| cell_text(cell).is_some_and(|text| text == WEIGHT_HEADER_LABEL))
        })
        .ok_or(ImportError::HeaderRowNotFound)?;

    let mut group: Option<String> = None;
    let mut sub: Option<String> = None;
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut entries = Vec::new();

    for row in &rows[header_idx + 1..] {
        let Some(name_cn) = row.first().and_then(cell_text) else {
            continue;
        };
        let name_latin = row.get(1).and_then(cell_text);
        let weight_cell = row.get(2);

        if weight_cell.map_or(true, is_blank) {
            // Heading row: a recognized spelling opens a new level-1
            // group and resets the subgroup, anything else names a
            // subgroup under the current group.
            if LEVEL1_LABELS.contains(&name_cn.as_str()) {
                group = Some(normalize_lvl1(&name_cn));
                sub = None;
            } else {
                sub = Some(name_cn);
            }
            continue;
        }

        let Some(wet_weight_mg) = weight_cell.and_then(cell_number) else {
            debug!(name = %name_cn, "unparseable weight value, skipping row");
            continue;
        };

        if !seen.insert(name_cn.clone()) {
            debug!(name = %name_cn, "duplicate species name, keeping first occurrence");
            continue;
        }

        entries.push(WetWeightEntry {
            name_cn,
            name_latin,
            wet_weight_mg,
            taxonomy: GroupPath {
                group: normalize_lvl1(group.as_deref().unwrap_or("")),
                sub: sub.clone(),
            },
        });
    }

    Ok(Document::new(entries))
}

//! Workbook Access and Cell Coercion
//!
//! Both parsers read only the first worksheet and only cached values;
//! formulas are never evaluated here. Cell coercion is deliberately loose:
//! numbers stringify, strings trim, anything blank counts as absent.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader as _};

use crate::error::ImportError;

/// Open a workbook and return the cell range of its first sheet.
///
/// A missing file is the caller's fatal configuration error, reported
/// before any workbook parsing is attempted.
pub fn open_first_sheet(path: &Path) -> Result<Range<Data>, ImportError> {
    if !path.exists() {
        return Err(ImportError::MissingInput(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|source| ImportError::OpenWorkbook {
        path: path.to_path_buf(),
        source,
    })?;

    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::NoWorksheet(path.to_path_buf()))?
        .map_err(|source| ImportError::OpenWorkbook {
            path: path.to_path_buf(),
            source,
        })
}

/// Trimmed cell text, or `None` for empty and whitespace-only cells.
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Float(v) => format!("{v}"),
        Data::Int(v) => format!("{v}"),
        Data::Bool(v) => if *v { "1" } else { "0" }.to_string(),
        other => format!("{other}").trim().to_string(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Numeric cell value: native numbers pass through, text is parsed after
/// trimming, everything else fails.
pub fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Whether a cell is empty or whitespace-only.
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

//! Import Errors
//!
//! Only two anomalies are fatal for a document: a missing input workbook
//! and a wet-weight sheet without its header row. Everything else (blank
//! rows, duplicate names, unparseable weights) is handled by the skip
//! policy inside the parsers and never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("input workbook not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to open workbook {}: {}", .path.display(), .source)]
    OpenWorkbook {
        path: PathBuf,
        source: calamine::Error,
    },

    #[error("workbook has no worksheet: {}", .0.display())]
    NoWorksheet(PathBuf),

    #[error("header row \"平均湿重\" not found")]
    HeaderRowNotFound,
}

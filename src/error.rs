/// Error type for table ingest and cell access.
///
/// The rendering pipeline itself never fails; every data-absence state is
/// a sentinel value, not an error. What remains fallible are the edges:
/// bounds-checked cell accessors and JSON ingest of raw records.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("row {row} out of range [0, {len})")]
    RowOutOfRange { row: usize, len: usize },

    #[error("column '{0}' not present in this table")]
    ColumnNotInTable(&'static str),

    #[error("invalid raw records: {0}")]
    Json(#[from] serde_json::Error),
}

/// RatioTable Table Implementation
///
/// A Table is the renamed, fixed-schema form of the raw design-check
/// input: an ordered column list over an ordered row list. Tables are
/// rebuilt from scratch on every render and never mutated in place;
/// every transformation produces a new table.
///
/// # Examples
///
/// ```
/// use ratiotable::{CellValue, Column, RawRecord, Table};
///
/// let mut record = RawRecord::new();
/// record.insert("col_beam".to_string(), CellValue::from("B1"));
/// record.insert("col_design_property".to_string(), CellValue::from("W12x26"));
/// record.insert("col_normalized_ratio".to_string(), CellValue::from(0.93));
///
/// let table = Table::from_records(&[record]);
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.columns().len(), 12);
/// assert_eq!(table.get_value(0, Column::Beam).unwrap().as_text(), Some("B1"));
/// // Fields absent from the record come through as Null, not as errors.
/// assert!(table.get_value(0, Column::Clause).unwrap().is_null());
/// ```

use crate::column::{CellValue, Column};
use crate::error::TableError;
use serde::Serialize;
use std::collections::HashMap;

/// A raw input record as supplied by the table-input form: raw field
/// identifiers (`col_beam`, `col_normalized_ratio`, ...) mapped to raw
/// values. Fields may be absent; unknown fields are ignored.
pub type RawRecord = HashMap<String, CellValue>;

/// One design-check result, with a named field per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    pub beam: CellValue,
    pub analysis_property: CellValue,
    pub design_property: CellValue,
    pub actual_ratio: CellValue,
    pub allowable_ratio: CellValue,
    pub normalized_ratio: CellValue,
    pub clause: CellValue,
    pub load_case: CellValue,
    pub ax: CellValue,
    pub iz: CellValue,
    pub iy: CellValue,
    pub ix: CellValue,
}

impl Row {
    /// Build a row from a raw record. Absent fields become `Null`.
    pub fn from_record(record: &RawRecord) -> Self {
        let field = |column: Column| {
            record
                .get(column.raw_field())
                .cloned()
                .unwrap_or(CellValue::Null)
        };

        Row {
            beam: field(Column::Beam),
            analysis_property: field(Column::AnalysisProperty),
            design_property: field(Column::DesignProperty),
            actual_ratio: field(Column::ActualRatio),
            allowable_ratio: field(Column::AllowableRatio),
            normalized_ratio: field(Column::NormalizedRatio),
            clause: field(Column::Clause),
            load_case: field(Column::LoadCase),
            ax: field(Column::Ax),
            iz: field(Column::Iz),
            iy: field(Column::Iy),
            ix: field(Column::Ix),
        }
    }

    /// Borrow the cell for a column.
    pub fn get(&self, column: Column) -> &CellValue {
        match column {
            Column::Beam => &self.beam,
            Column::AnalysisProperty => &self.analysis_property,
            Column::DesignProperty => &self.design_property,
            Column::ActualRatio => &self.actual_ratio,
            Column::AllowableRatio => &self.allowable_ratio,
            Column::NormalizedRatio => &self.normalized_ratio,
            Column::Clause => &self.clause,
            Column::LoadCase => &self.load_case,
            Column::Ax => &self.ax,
            Column::Iz => &self.iz,
            Column::Iy => &self.iy,
            Column::Ix => &self.ix,
        }
    }

    /// Normalized ratio as a number, if the cell holds one. The ratio is
    /// trusted user input; it is never recomputed from Actual/Allowable.
    pub fn ratio(&self) -> Option<f64> {
        self.normalized_ratio.as_f64()
    }
}

/// The fixed-schema design-check table: ordered columns over ordered rows.
///
/// Freshly built tables carry all twelve columns; the summary projection
/// narrows the column list to six. Rows keep their full typed shape
/// either way; cells outside the column list are simply not addressable
/// and not rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    /// Build the full twelve-column table from raw input records,
    /// preserving input order. Permissive by contract: missing fields
    /// become `Null` cells, unknown fields are ignored, nothing fails.
    pub fn from_records(records: &[RawRecord]) -> Self {
        Table {
            columns: Column::ALL.to_vec(),
            rows: records.iter().map(Row::from_record).collect(),
        }
    }

    pub(crate) fn from_parts(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The current column set, in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Header labels for the current column set, in display order.
    pub fn header_labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.label()).collect()
    }

    /// Borrow a cell, bounds-checked on both axes. Asking for a column
    /// that projection removed is an error, matching the narrowed view.
    pub fn get_value(&self, row: usize, column: Column) -> Result<&CellValue, TableError> {
        if !self.columns.contains(&column) {
            return Err(TableError::ColumnNotInTable(column.label()));
        }

        self.rows
            .get(row)
            .map(|r| r.get(column))
            .ok_or(TableError::RowOutOfRange {
                row,
                len: self.rows.len(),
            })
    }
}

/// Deserialize raw records from the JSON payload posted by the input
/// form: an array of objects mapping raw field identifiers to string,
/// number or null values.
///
/// # Examples
///
/// ```
/// use ratiotable::records_from_json;
///
/// let records = records_from_json(
///     r#"[{"col_beam": "B1", "col_normalized_ratio": 0.93, "col_clause": null}]"#,
/// )
/// .unwrap();
/// assert_eq!(records.len(), 1);
/// ```
pub fn records_from_json(json: &str) -> Result<Vec<RawRecord>, TableError> {
    Ok(serde_json::from_str(json)?)
}

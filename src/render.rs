/// RatioTable Rendering
///
/// Turns raw design-check records into the structure the table view
/// consumes: ordered cell rows, column headers, and a color annotation
/// on every Normalized Ratio cell. Colors classify the ratio against the
/// fixed 0.85 / 1.0 thresholds. The full pipeline runs in a fixed order:
/// build, group, filter, project, sort, colorize.

use crate::column::{CellValue, Column};
use crate::error::TableError;
use crate::table::{RawRecord, Table};
use crate::view::{self, ViewOptions, NO_DATA_MESSAGE};
use log::debug;
use serde::Serialize;

/// An RGB triple as consumed by the table renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Three-tier classification of a normalized design ratio.
///
/// # Examples
///
/// ```
/// use ratiotable::Band;
///
/// assert_eq!(Band::classify(1.2), Band::Critical);
/// assert_eq!(Band::classify(0.9), Band::Warning);
/// assert_eq!(Band::classify(0.3), Band::Ok);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Critical,
    Warning,
    Ok,
}

impl Band {
    /// Ratio at or above which a member is over-stressed.
    pub const CRITICAL_THRESHOLD: f64 = 1.0;
    /// Ratio at or above which a member is close to its limit.
    pub const WARNING_THRESHOLD: f64 = 0.85;

    /// Classify a normalized ratio. Anything not at or above a threshold,
    /// NaN included, is `Ok`.
    pub fn classify(ratio: f64) -> Band {
        if ratio >= Self::CRITICAL_THRESHOLD {
            Band::Critical
        } else if ratio >= Self::WARNING_THRESHOLD {
            Band::Warning
        } else {
            Band::Ok
        }
    }

    /// Background color for this band.
    pub fn color(&self) -> Rgb {
        match self {
            Band::Critical => Rgb { r: 210, g: 0, b: 0 },
            Band::Warning => Rgb { r: 255, g: 165, b: 0 },
            Band::Ok => Rgb { r: 0, g: 210, b: 0 },
        }
    }
}

/// Color annotation for a single cell, keyed by row index and column.
/// Annotations live beside the cell values instead of replacing them, so
/// a cell stays a plain value whether or not it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellColor {
    pub row: usize,
    pub column: Column,
    pub band: Band,
    pub color: Rgb,
}

/// A fully rendered summary table: what the table view displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTable {
    /// Header labels for the summary columns; empty for the no-data
    /// placeholder result.
    pub column_headers: Vec<String>,
    /// Cell values row by row, in column order.
    pub rows: Vec<Vec<CellValue>>,
    /// Color annotations, one per row, on the Normalized Ratio column.
    pub cell_colors: Vec<CellColor>,
    /// Whether the view should offer interactive sorting and filtering.
    /// True whenever real data is present.
    pub enable_sorting_and_filtering: bool,
}

impl RenderedTable {
    /// The degenerate single-cell result shown before any input exists.
    pub fn no_data() -> Self {
        RenderedTable {
            column_headers: Vec::new(),
            rows: vec![vec![CellValue::Text(NO_DATA_MESSAGE.to_string())]],
            cell_colors: Vec::new(),
            enable_sorting_and_filtering: false,
        }
    }

    /// Pretty-printed JSON for the rendering collaborator.
    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// CSV export of headers and rows. Null cells become empty fields;
    /// fields containing commas, quotes or newlines are quoted.
    pub fn to_csv(&self) -> String {
        let mut result = String::new();

        if !self.column_headers.is_empty() {
            let header: Vec<String> = self
                .column_headers
                .iter()
                .map(|label| csv_escape(label))
                .collect();
            result.push_str(&header.join(","));
            result.push('\n');
        }

        for row in &self.rows {
            let fields: Vec<String> = row.iter().map(csv_field).collect();
            result.push_str(&fields.join(","));
            result.push('\n');
        }

        result
    }
}

fn csv_field(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => String::new(),
        CellValue::Number(n) => n.to_string(),
        CellValue::Text(s) => csv_escape(s),
    }
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Run the full summary pipeline over raw input records: build the
/// twelve-column table, apply the grouping and filtering selections,
/// project to the six summary columns, sort by Normalized Ratio
/// descending, and attach a color band to every ratio cell.
///
/// Empty input short-circuits to the no-data placeholder. Everything is
/// recomputed from scratch on each call; there is no cached state.
///
/// # Examples
///
/// ```
/// use ratiotable::{design_ratio_table, Band, CellValue, RawRecord, ViewOptions};
///
/// let mut record = RawRecord::new();
/// record.insert("col_beam".to_string(), CellValue::from("B1"));
/// record.insert("col_design_property".to_string(), CellValue::from("W12x26"));
/// record.insert("col_normalized_ratio".to_string(), CellValue::from(1.2));
///
/// let rendered = design_ratio_table(&[record], &ViewOptions::default());
///
/// assert_eq!(rendered.column_headers.len(), 6);
/// assert_eq!(rendered.rows.len(), 1);
/// assert_eq!(rendered.cell_colors[0].band, Band::Critical);
/// assert!(rendered.enable_sorting_and_filtering);
/// ```
pub fn design_ratio_table(records: &[RawRecord], options: &ViewOptions) -> RenderedTable {
    if records.is_empty() {
        debug!("no input records, rendering the placeholder");
        return RenderedTable::no_data();
    }

    let table = Table::from_records(records);
    let table = view::apply(&table, options);
    let table = view::project_summary(&table);
    let table = view::sort_by_ratio_desc(&table);
    debug!("rendering {} summary rows", table.len());

    let mut cell_colors = Vec::with_capacity(table.len());
    let rows: Vec<Vec<CellValue>> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let band = Band::classify(row.ratio().unwrap_or(f64::NEG_INFINITY));
            cell_colors.push(CellColor {
                row: index,
                column: Column::NormalizedRatio,
                band,
                color: band.color(),
            });
            table
                .columns()
                .iter()
                .map(|&column| row.get(column).clone())
                .collect()
        })
        .collect();

    RenderedTable {
        column_headers: table
            .header_labels()
            .iter()
            .map(|&label| label.to_string())
            .collect(),
        rows,
        cell_colors,
        enable_sorting_and_filtering: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(beam: &str, section: &str, ratio: f64) -> RawRecord {
        let mut r = RawRecord::new();
        r.insert("col_beam".to_string(), CellValue::from(beam));
        r.insert("col_design_property".to_string(), CellValue::from(section));
        r.insert("col_normalized_ratio".to_string(), CellValue::from(ratio));
        r
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(Band::classify(1.0), Band::Critical);
        assert_eq!(Band::classify(1.5), Band::Critical);
        assert_eq!(Band::classify(0.85), Band::Warning);
        assert_eq!(Band::classify(0.999), Band::Warning);
        assert_eq!(Band::classify(0.849999), Band::Ok);
        assert_eq!(Band::classify(0.0), Band::Ok);
        assert_eq!(Band::classify(f64::NAN), Band::Ok);
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(Band::Critical.color(), Rgb { r: 210, g: 0, b: 0 });
        assert_eq!(Band::Warning.color(), Rgb { r: 255, g: 165, b: 0 });
        assert_eq!(Band::Ok.color(), Rgb { r: 0, g: 210, b: 0 });
    }

    #[test]
    fn test_grouped_all_sections_scenario() {
        let records = vec![
            record("B1", "W12x26", 0.9),
            record("B2", "W12x26", 1.2),
            record("B3", "W14x30", 0.5),
        ];
        let options = ViewOptions {
            group: true,
            cross_section: Some("All".to_string()),
        };

        let rendered = design_ratio_table(&records, &options);

        assert_eq!(rendered.rows.len(), 2);
        // Sorted descending: the critical W12x26 row comes first.
        assert_eq!(rendered.rows[0][1].as_text(), Some("W12x26"));
        assert_eq!(rendered.rows[0][4].as_f64(), Some(1.2));
        assert_eq!(rendered.rows[1][1].as_text(), Some("W14x30"));
        assert_eq!(rendered.rows[1][4].as_f64(), Some(0.5));

        assert_eq!(rendered.cell_colors[0].band, Band::Critical);
        assert_eq!(rendered.cell_colors[1].band, Band::Ok);
        assert!(rendered.enable_sorting_and_filtering);
    }

    #[test]
    fn test_filtered_without_grouping_scenario() {
        let records = vec![
            record("B1", "W12x26", 0.9),
            record("B2", "W12x26", 1.2),
            record("B3", "W14x30", 0.5),
        ];

        let rendered = design_ratio_table(&records, &ViewOptions::filtered("W12x26"));

        assert_eq!(rendered.rows.len(), 2);
        assert_eq!(rendered.rows[0][4].as_f64(), Some(1.2));
        assert_eq!(rendered.rows[1][4].as_f64(), Some(0.9));
        assert_eq!(rendered.cell_colors[1].band, Band::Warning);
    }

    #[test]
    fn test_annotations_target_only_the_ratio_column() {
        let records = vec![record("B1", "W12x26", 0.9), record("B2", "W14x30", 0.5)];
        let rendered = design_ratio_table(&records, &ViewOptions::default());

        assert_eq!(rendered.cell_colors.len(), rendered.rows.len());
        for (index, annotation) in rendered.cell_colors.iter().enumerate() {
            assert_eq!(annotation.row, index);
            assert_eq!(annotation.column, Column::NormalizedRatio);
        }
    }

    #[test]
    fn test_summary_headers() {
        let rendered = design_ratio_table(&[record("B1", "W12x26", 0.9)], &ViewOptions::default());
        assert_eq!(
            rendered.column_headers,
            vec![
                "Beam",
                "Design Property",
                "Actual Ratio",
                "Allowable Ratio",
                "Normalized Ratio (Actual/Allowable)",
                "L/C",
            ]
        );
    }

    #[test]
    fn test_empty_input_renders_placeholder() {
        let rendered = design_ratio_table(&[], &ViewOptions::grouped());

        assert!(rendered.column_headers.is_empty());
        assert_eq!(rendered.rows, vec![vec![CellValue::Text(NO_DATA_MESSAGE.to_string())]]);
        assert!(rendered.cell_colors.is_empty());
        assert!(!rendered.enable_sorting_and_filtering);
    }

    #[test]
    fn test_unknown_cross_section_renders_empty_table() {
        let rendered = design_ratio_table(
            &[record("B1", "W12x26", 0.9)],
            &ViewOptions::filtered("HSS6x6"),
        );

        assert_eq!(rendered.rows.len(), 0);
        assert_eq!(rendered.column_headers.len(), 6);
        assert!(rendered.enable_sorting_and_filtering);
    }

    #[test]
    fn test_missing_ratio_renders_ok_band_and_sinks() {
        let mut no_ratio = RawRecord::new();
        no_ratio.insert("col_beam".to_string(), CellValue::from("B9"));
        no_ratio.insert("col_design_property".to_string(), CellValue::from("W8x10"));

        let records = vec![no_ratio, record("B1", "W12x26", 0.9)];
        let rendered = design_ratio_table(&records, &ViewOptions::default());

        assert_eq!(rendered.rows[1][0].as_text(), Some("B9"));
        assert!(rendered.rows[1][4].is_null());
        assert_eq!(rendered.cell_colors[1].band, Band::Ok);
    }

    #[test]
    fn test_csv_export() {
        let mut r = record("B1", "W12x26", 1.2);
        r.insert(
            "col_load_case".to_string(),
            CellValue::from("1.2DL, 1.6LL"),
        );

        let rendered = design_ratio_table(&[r], &ViewOptions::default());
        let csv = rendered.to_csv();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Beam,Design Property,Actual Ratio,Allowable Ratio,Normalized Ratio (Actual/Allowable),L/C"
        );
        // The load case contains a comma, so it is quoted.
        assert_eq!(lines.next().unwrap(), "B1,W12x26,,,1.2,\"1.2DL, 1.6LL\"");
    }

    #[test]
    fn test_json_export_shape() {
        let rendered = design_ratio_table(&[record("B1", "W12x26", 1.2)], &ViewOptions::default());
        let json = rendered.to_json().unwrap();

        assert!(json.contains("\"column_headers\""));
        assert!(json.contains("\"band\": \"critical\""));
        assert!(json.contains("\"r\": 210"));
    }
}

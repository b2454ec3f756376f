/// RatioTable View Transformations
///
/// Views are derived tables computed fresh from a parent table: the
/// group-by-maximum reduction, the cross-section equality filter, the
/// summary projection and the ratio sort. Each transformation is a pure
/// function; the selections driving them travel in an explicit
/// `ViewOptions` value rather than in any shared state, so a render is
/// fully determined by its inputs.

use crate::column::Column;
use crate::table::{RawRecord, Row, Table};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Sentinel filter option that keeps every cross-section.
pub const ALL_SECTIONS: &str = "All";

/// Placeholder shown when no table input has been supplied yet. The
/// filter-option list offers it as its only entry in that state, which
/// makes the placeholder itself selectable; selecting it matches no rows.
pub const NO_DATA_MESSAGE: &str = "No data available! Please add table input.";

/// User selections for one render of the summary view.
///
/// # Examples
///
/// ```
/// use ratiotable::ViewOptions;
///
/// let options = ViewOptions::default();
/// assert!(!options.group);
/// assert_eq!(options.cross_section, None);
///
/// let options: ViewOptions =
///     serde_json::from_str(r#"{"group": true, "cross_section": "All"}"#).unwrap();
/// assert!(options.group);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Keep only the worst-ratio row per cross-section.
    pub group: bool,
    /// Cross-section to filter by; `None` and "All" keep every section.
    pub cross_section: Option<String>,
}

impl ViewOptions {
    /// Options with grouping enabled and no filter.
    pub fn grouped() -> Self {
        ViewOptions {
            group: true,
            cross_section: None,
        }
    }

    /// Options filtering on one cross-section, without grouping.
    pub fn filtered(cross_section: impl Into<String>) -> Self {
        ViewOptions {
            group: false,
            cross_section: Some(cross_section.into()),
        }
    }
}

/// Cross-section options for the filter dropdown: every distinct Design
/// Property value in first-occurrence order, with "All" appended last.
/// Rows without a Design Property contribute no option. Empty input
/// yields the no-data placeholder as the only entry.
///
/// The enumeration always runs over the unfiltered input, so the option
/// list is stable across grouping and filtering selections.
pub fn cross_section_options(records: &[RawRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![NO_DATA_MESSAGE.to_string()];
    }

    let table = Table::from_records(records);
    let mut options: Vec<String> = Vec::new();
    for row in table.rows() {
        if let Some(section) = row.design_property.as_text() {
            if !options.iter().any(|known| known == section) {
                options.push(section.to_string());
            }
        }
    }
    options.push(ALL_SECTIONS.to_string());
    options
}

/// Apply the user's grouping and filtering selections, in that order.
/// Grouping runs first so a subsequent specific-section filter selects
/// that section's single worst row.
pub fn apply(table: &Table, options: &ViewOptions) -> Table {
    debug!(
        "applying view options: group={}, cross_section={:?}",
        options.group, options.cross_section
    );

    let mut view = if options.group {
        group_by_max_ratio(table)
    } else {
        table.clone()
    };

    if let Some(section) = options.cross_section.as_deref() {
        if section != ALL_SECTIONS {
            view = filter_by_cross_section(&view, section);
        }
    }

    view
}

/// Keep, for each distinct Design Property, the single row with the
/// maximum Normalized Ratio. Result rows are ordered by ascending
/// partition key.
///
/// Ties keep the first-encountered row (a deliberate, stable choice).
/// Rows without a Design Property have no partition and are dropped.
/// A missing ratio compares as negative infinity, so a partition whose
/// rows all lack a ratio keeps its first row.
pub fn group_by_max_ratio(table: &Table) -> Table {
    let mut best: BTreeMap<&str, &Row> = BTreeMap::new();

    for row in table.rows() {
        let section = match row.design_property.as_text() {
            Some(section) => section,
            None => continue,
        };
        let ratio = row.ratio().unwrap_or(f64::NEG_INFINITY);

        // Strictly greater, so the first-encountered row wins ties.
        let replace = match best.get(section) {
            Some(current) => ratio > current.ratio().unwrap_or(f64::NEG_INFINITY),
            None => true,
        };
        if replace {
            best.insert(section, row);
        }
    }

    let rows = best.into_values().cloned().collect();
    Table::from_parts(table.columns().to_vec(), rows)
}

/// Retain only rows whose Design Property equals `cross_section` exactly
/// (case-sensitive). A value not present in the data simply matches
/// nothing; the result is an empty table, not an error.
pub fn filter_by_cross_section(table: &Table, cross_section: &str) -> Table {
    let rows = table
        .rows()
        .iter()
        .filter(|row| row.design_property.as_text() == Some(cross_section))
        .cloned()
        .collect();
    Table::from_parts(table.columns().to_vec(), rows)
}

/// Narrow the table to the six summary columns, preserving their display
/// order. Only meaningful for tables that still carry the summary
/// columns; anything else is a programming error upstream, not a
/// user-facing failure.
pub fn project_summary(table: &Table) -> Table {
    debug_assert!(
        Column::SUMMARY
            .iter()
            .all(|column| table.columns().contains(column)),
        "summary projection applied to a table missing summary columns"
    );
    Table::from_parts(Column::SUMMARY.to_vec(), table.rows().to_vec())
}

/// Stable sort by Normalized Ratio, descending. Rows without a numeric
/// ratio compare as negative infinity and sink to the bottom.
pub fn sort_by_ratio_desc(table: &Table) -> Table {
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| {
        let ratio_a = a.ratio().unwrap_or(f64::NEG_INFINITY);
        let ratio_b = b.ratio().unwrap_or(f64::NEG_INFINITY);
        ratio_b.partial_cmp(&ratio_a).unwrap_or(Ordering::Equal)
    });
    Table::from_parts(table.columns().to_vec(), rows)
}

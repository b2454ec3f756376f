/// RatioTable Column Model
///
/// The column set is fixed and domain-specific: the twelve columns of a
/// STAAD.PRO beam design-check export. Each column knows the raw field
/// identifier used by the table-input form and the label shown as the
/// column header in the rendered summary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve fixed display columns, in display order.
///
/// # Examples
///
/// ```
/// use ratiotable::Column;
///
/// assert_eq!(Column::ALL.len(), 12);
/// assert_eq!(Column::NormalizedRatio.raw_field(), "col_normalized_ratio");
/// assert_eq!(
///     Column::NormalizedRatio.label(),
///     "Normalized Ratio (Actual/Allowable)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Beam,
    AnalysisProperty,
    DesignProperty,
    ActualRatio,
    AllowableRatio,
    NormalizedRatio,
    Clause,
    LoadCase,
    Ax,
    Iz,
    Iy,
    Ix,
}

impl Column {
    /// All twelve columns in display order. This is the column set of
    /// every freshly built table; order is significant for rendering.
    pub const ALL: [Column; 12] = [
        Column::Beam,
        Column::AnalysisProperty,
        Column::DesignProperty,
        Column::ActualRatio,
        Column::AllowableRatio,
        Column::NormalizedRatio,
        Column::Clause,
        Column::LoadCase,
        Column::Ax,
        Column::Iz,
        Column::Iy,
        Column::Ix,
    ];

    /// The six columns kept by the summary projection, in display order.
    pub const SUMMARY: [Column; 6] = [
        Column::Beam,
        Column::DesignProperty,
        Column::ActualRatio,
        Column::AllowableRatio,
        Column::NormalizedRatio,
        Column::LoadCase,
    ];

    /// Raw field identifier used by the table-input form.
    pub fn raw_field(&self) -> &'static str {
        match self {
            Column::Beam => "col_beam",
            Column::AnalysisProperty => "col_analysis_property",
            Column::DesignProperty => "col_design_property",
            Column::ActualRatio => "col_actual_ratio",
            Column::AllowableRatio => "col_allowable_ratio",
            Column::NormalizedRatio => "col_normalized_ratio",
            Column::Clause => "col_clause",
            Column::LoadCase => "col_load_case",
            Column::Ax => "col_ax",
            Column::Iz => "col_iz",
            Column::Iy => "col_iy",
            Column::Ix => "col_ix",
        }
    }

    /// Display label used as the column header.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Beam => "Beam",
            Column::AnalysisProperty => "Analysis Property",
            Column::DesignProperty => "Design Property",
            Column::ActualRatio => "Actual Ratio",
            Column::AllowableRatio => "Allowable Ratio",
            Column::NormalizedRatio => "Normalized Ratio (Actual/Allowable)",
            Column::Clause => "Clause",
            Column::LoadCase => "L/C",
            Column::Ax => "Ax in²",
            Column::Iz => "Iz in⁴",
            Column::Iy => "Iy in⁴",
            Column::Ix => "Ix in⁴",
        }
    }
}

/// Cell value for the fixed-schema table.
///
/// Raw input is permissive: fields arrive as text, as numbers, or not at
/// all. `Null` stands for an absent or null field. The untagged serde
/// representation lets raw JSON records deserialize directly: strings
/// become `Text`, numbers become `Number`, nulls become `Null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{}", v),
            CellValue::Text(v) => write!(f, "{}", v),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

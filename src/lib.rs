/// RatioTable - Design Ratio Summary Tables
///
/// Turns manually entered structural-beam design-check results into a
/// filtered, grouped, color-coded summary table. The input form supplies
/// raw row records; a fixed-schema table is rebuilt from scratch on
/// every render and comes back out as ordered rows, column headers and
/// per-cell color annotations for the table view to display.

pub mod column;
pub mod error;
pub mod render;
pub mod table;
pub mod view;

pub use column::{CellValue, Column};
pub use error::TableError;
pub use render::{design_ratio_table, Band, CellColor, RenderedTable, Rgb};
pub use table::{records_from_json, RawRecord, Row, Table};
pub use view::{cross_section_options, ViewOptions, ALL_SECTIONS, NO_DATA_MESSAGE};

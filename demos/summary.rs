/// Summary Pipeline Example
///
/// This example demonstrates:
/// - Building raw records the way the table-input form supplies them
/// - Rendering the flat summary view
/// - Rendering the grouped (worst row per cross-section) view
/// - Filtering the grouped view down to one cross-section

use ratiotable::{cross_section_options, design_ratio_table, CellValue, RawRecord, ViewOptions};

fn record(beam: &str, section: &str, actual: f64, allowable: f64, load_case: &str) -> RawRecord {
    let mut r = RawRecord::new();
    r.insert("col_beam".to_string(), CellValue::from(beam));
    r.insert("col_analysis_property".to_string(), CellValue::from(section));
    r.insert("col_design_property".to_string(), CellValue::from(section));
    r.insert("col_actual_ratio".to_string(), CellValue::from(actual));
    r.insert("col_allowable_ratio".to_string(), CellValue::from(allowable));
    r.insert(
        "col_normalized_ratio".to_string(),
        CellValue::from(actual / allowable),
    );
    r.insert("col_load_case".to_string(), CellValue::from(load_case));
    r
}

fn print_rendered(rendered: &ratiotable::RenderedTable) {
    println!("   {}", rendered.column_headers.join(" | "));
    for (index, row) in rendered.rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        let band = rendered
            .cell_colors
            .iter()
            .find(|annotation| annotation.row == index)
            .map(|annotation| format!("{:?}", annotation.band))
            .unwrap_or_default();
        println!("   {}   [{}]", cells.join(" | "), band);
    }
    println!();
}

fn main() {
    env_logger::init();

    println!("=== RatioTable Summary Example ===\n");

    // 1. Raw input, as pasted into the table form
    println!("1. Building raw design-check records...");
    let records = vec![
        record("B1", "W12x26", 0.92, 1.0, "101"),
        record("B2", "W12x26", 1.21, 1.0, "103"),
        record("B3", "W14x30", 0.48, 1.0, "101"),
        record("B4", "W14x30", 0.87, 1.0, "102"),
        record("B5", "W16x40", 0.33, 1.0, "101"),
    ];
    println!("   {} records\n", records.len());

    // 2. Filter options offered by the dropdown
    println!("2. Cross-section filter options:");
    for option in cross_section_options(&records) {
        println!("   - {}", option);
    }
    println!();

    // 3. Flat summary view
    println!("3. Flat summary (sorted by ratio, descending):");
    let rendered = design_ratio_table(&records, &ViewOptions::default());
    print_rendered(&rendered);

    // 4. Grouped view: worst row per cross-section
    println!("4. Grouped by cross-section:");
    let rendered = design_ratio_table(&records, &ViewOptions::grouped());
    print_rendered(&rendered);

    // 5. Grouped view filtered to one cross-section
    println!("5. Grouped, filtered to W14x30:");
    let options = ViewOptions {
        group: true,
        cross_section: Some("W14x30".to_string()),
    };
    let rendered = design_ratio_table(&records, &options);
    print_rendered(&rendered);

    println!("=== Example Complete ===");
}

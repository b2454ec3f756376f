/// Filter Options Example
///
/// Shows the filter-option list in both of its states: populated from
/// real data, and the placeholder offered before any input exists.

use ratiotable::{cross_section_options, records_from_json};

fn main() {
    env_logger::init();

    println!("=== RatioTable Filter Options Example ===\n");

    println!("1. Options before any input:");
    for option in cross_section_options(&[]) {
        println!("   - {}", option);
    }
    println!();

    println!("2. Options from a pasted JSON payload:");
    let records = records_from_json(
        r#"[
            {"col_beam": "B1", "col_design_property": "W12x26", "col_normalized_ratio": 0.9},
            {"col_beam": "B2", "col_design_property": "W14x30", "col_normalized_ratio": 0.5},
            {"col_beam": "B3", "col_design_property": "W12x26", "col_normalized_ratio": 1.2}
        ]"#,
    )
    .expect("payload is well-formed");

    for option in cross_section_options(&records) {
        println!("   - {}", option);
    }

    println!("\n=== Example Complete ===");
}

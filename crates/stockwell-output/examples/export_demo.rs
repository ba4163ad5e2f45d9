//! Demonstrates exporting a report in each supported format.

use stockwell_output::{ExportFormat, export_to_string, render_text};
use stockwell_reports::PurchasingRow;

fn main() {
    let report = vec![
        PurchasingRow {
            week: 0,
            product_name: "Lobster".to_string(),
            quantity: 5,
        },
        PurchasingRow {
            week: 0,
            product_name: "Salmon".to_string(),
            quantity: 4,
        },
        PurchasingRow {
            week: 1,
            product_name: "Lobster".to_string(),
            quantity: 3,
        },
    ];

    println!("{}", render_text(&report));
    println!("--- CSV ---");
    println!("{}", export_to_string(&report, ExportFormat::Csv).unwrap());
    println!("--- JSON ---");
    println!("{}", export_to_string(&report, ExportFormat::Json).unwrap());
}

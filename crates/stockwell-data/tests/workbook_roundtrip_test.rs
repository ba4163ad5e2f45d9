//! Round-trip test: write the sample template, load it back, and check the
//! loaded tables against the sample dataset.

use std::path::PathBuf;

use stockwell_data::{ProductId, load_workbook, write_template};

fn temp_workbook(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn test_template_loads_back_into_snapshot() {
    let path = temp_workbook("stockwell_roundtrip.xlsx");

    write_template(&path).unwrap();
    let snapshot = load_workbook(&path).unwrap();

    assert_eq!(snapshot.orders().len(), 15);
    assert_eq!(snapshot.purchases().len(), 15);
    assert_eq!(snapshot.baselines().len(), 3);
    assert_eq!(snapshot.products().len(), 3);
    assert_eq!(snapshot.suppliers().len(), 3);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_loaded_cells_match_sample_data() {
    let path = temp_workbook("stockwell_roundtrip_cells.xlsx");

    write_template(&path).unwrap();
    let snapshot = load_workbook(&path).unwrap();

    let first_order = &snapshot.orders()[0];
    assert_eq!(first_order.order_id, 1);
    assert_eq!(first_order.product_id, ProductId::new("L"));
    assert_eq!(first_order.quantity, 4);
    assert_eq!(first_order.customer, "M");
    assert_eq!(first_order.week, 0);

    let lobster_baseline = snapshot
        .baselines()
        .iter()
        .find(|baseline| baseline.product_id == ProductId::new("L"))
        .unwrap();
    assert_eq!(lobster_baseline.quantity, 6);
    assert_eq!(lobster_baseline.week, 0);

    let shrimp = snapshot
        .products()
        .iter()
        .find(|product| product.product_id == ProductId::new("S"))
        .unwrap();
    assert_eq!(shrimp.product_name, "Shrimp");
    assert_eq!(shrimp.price, 1.5);
    assert_eq!(shrimp.cost, 1.0);

    let salmon_supplier = snapshot
        .suppliers()
        .iter()
        .find(|supplier| supplier.product_id == ProductId::new("G"))
        .unwrap();
    assert_eq!(salmon_supplier.supplier_name, "Keelung Fish House");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_is_a_load_error() {
    let result = load_workbook(&temp_workbook("stockwell_does_not_exist.xlsx"));
    assert!(result.is_err());
}

//! Sample template workbook.
//!
//! Writes a workbook with the five sheets pre-populated with a small
//! five-week dataset for three products, for the user to edit and upload.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::Result;
use crate::workbook::{
    INVENTORY_SHEET, ORDERS_SHEET, PRODUCTS_SHEET, PURCHASES_SHEET, SUPPLIERS_SHEET,
};

const ORDER_PRODUCTS: [&str; 15] = [
    "L", "G", "S", "L", "G", "S", "L", "G", "S", "S", "G", "S", "L", "G", "S",
];
const ORDER_QUANTITIES: [i64; 15] = [4, 2, 3, 3, 5, 3, 4, 3, 3, 2, 3, 4, 3, 4, 3];
const ORDER_CUSTOMERS: [&str; 15] = [
    "M", "F", "F", "M", "F", "M", "M", "M", "F", "F", "M", "F", "M", "F", "M",
];
const PURCHASE_PRODUCTS: [&str; 15] = [
    "L", "G", "S", "L", "G", "S", "L", "G", "S", "L", "G", "S", "L", "G", "S",
];
const PURCHASE_QUANTITIES: [i64; 15] = [5, 4, 3, 3, 3, 4, 2, 3, 2, 3, 4, 4, 3, 3, 4];
const PURCHASE_SUPPLIERS: [&str; 15] = [
    "Supplier A",
    "Supplier B",
    "Supplier C",
    "Supplier A",
    "Supplier B",
    "Supplier C",
    "Supplier A",
    "Supplier B",
    "Supplier C",
    "Supplier A",
    "Supplier B",
    "Supplier C",
    "Supplier A",
    "Supplier B",
    "Supplier C",
];

/// Three rows per week, weeks 0 through 4.
const fn week_of(row: usize) -> u32 {
    (row / 3) as u32
}

/// Write the sample template workbook to `path`.
///
/// # Errors
///
/// Returns an error if the workbook cannot be written.
pub fn write_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    write_orders(workbook.add_worksheet().set_name(ORDERS_SHEET)?)?;
    write_purchases(workbook.add_worksheet().set_name(PURCHASES_SHEET)?)?;
    write_inventory(workbook.add_worksheet().set_name(INVENTORY_SHEET)?)?;
    write_products(workbook.add_worksheet().set_name(PRODUCTS_SHEET)?)?;
    write_suppliers(workbook.add_worksheet().set_name(SUPPLIERS_SHEET)?)?;

    workbook.save(path)?;
    Ok(())
}

fn write_header(sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    for (column, header) in headers.iter().enumerate() {
        sheet.write_string(0, column as u16, *header)?;
    }
    Ok(())
}

fn write_orders(sheet: &mut Worksheet) -> Result<()> {
    write_header(sheet, &["OrderID", "ProductID", "Quantity", "Customer", "Week"])?;
    for row in 0..ORDER_PRODUCTS.len() {
        let excel_row = row as u32 + 1;
        sheet.write_number(excel_row, 0, (row + 1) as f64)?;
        sheet.write_string(excel_row, 1, ORDER_PRODUCTS[row])?;
        sheet.write_number(excel_row, 2, ORDER_QUANTITIES[row] as f64)?;
        sheet.write_string(excel_row, 3, ORDER_CUSTOMERS[row])?;
        sheet.write_number(excel_row, 4, week_of(row) as f64)?;
    }
    Ok(())
}

fn write_purchases(sheet: &mut Worksheet) -> Result<()> {
    write_header(
        sheet,
        &["PurchaseID", "ProductID", "Quantity", "Supplier", "Week"],
    )?;
    for row in 0..PURCHASE_PRODUCTS.len() {
        let excel_row = row as u32 + 1;
        sheet.write_number(excel_row, 0, (row + 1) as f64)?;
        sheet.write_string(excel_row, 1, PURCHASE_PRODUCTS[row])?;
        sheet.write_number(excel_row, 2, PURCHASE_QUANTITIES[row] as f64)?;
        sheet.write_string(excel_row, 3, PURCHASE_SUPPLIERS[row])?;
        sheet.write_number(excel_row, 4, week_of(row) as f64)?;
    }
    Ok(())
}

fn write_inventory(sheet: &mut Worksheet) -> Result<()> {
    write_header(sheet, &["ProductID", "Quantity", "Week"])?;
    for (row, (product_id, quantity)) in [("L", 6), ("G", 6), ("S", 7)].iter().enumerate() {
        let excel_row = row as u32 + 1;
        sheet.write_string(excel_row, 0, *product_id)?;
        sheet.write_number(excel_row, 1, *quantity as f64)?;
        sheet.write_number(excel_row, 2, 0.0)?;
    }
    Ok(())
}

fn write_products(sheet: &mut Worksheet) -> Result<()> {
    write_header(
        sheet,
        &["ProductID", "ProductName", "CategoryID", "Unit", "Price", "Cost"],
    )?;
    let rows = [
        ("L", "Lobster", "A", "piece", 4.0, 2.0),
        ("G", "Salmon", "B", "gram", 3.0, 2.0),
        ("S", "Shrimp", "C", "gram", 1.5, 1.0),
    ];
    for (row, (id, name, category, unit, price, cost)) in rows.iter().enumerate() {
        let excel_row = row as u32 + 1;
        sheet.write_string(excel_row, 0, *id)?;
        sheet.write_string(excel_row, 1, *name)?;
        sheet.write_string(excel_row, 2, *category)?;
        sheet.write_string(excel_row, 3, *unit)?;
        sheet.write_number(excel_row, 4, *price)?;
        sheet.write_number(excel_row, 5, *cost)?;
    }
    Ok(())
}

fn write_suppliers(sheet: &mut Worksheet) -> Result<()> {
    write_header(
        sheet,
        &["ProductID", "SupplierName", "ContactName", "Phone", "Email", "Address"],
    )?;
    let rows = [
        (
            "L",
            "Nanliao Seafood",
            "C. Lee",
            "0922732525",
            "supplierA@example.com",
            "12 Harbor Road",
        ),
        (
            "G",
            "Keelung Fish House",
            "T. Wang",
            "0908223534",
            "supplierB@example.com",
            "5 Pier Street",
        ),
        (
            "S",
            "Mali Seafood",
            "W. Wu",
            "0937200311",
            "supplierC@example.com",
            "88 Coast Avenue",
        ),
    ];
    for (row, (id, name, contact, phone, email, address)) in rows.iter().enumerate() {
        let excel_row = row as u32 + 1;
        sheet.write_string(excel_row, 0, *id)?;
        sheet.write_string(excel_row, 1, *name)?;
        sheet.write_string(excel_row, 2, *contact)?;
        sheet.write_string(excel_row, 3, *phone)?;
        sheet.write_string(excel_row, 4, *email)?;
        sheet.write_string(excel_row, 5, *address)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weeks_cover_zero_through_four() {
        assert_eq!(week_of(0), 0);
        assert_eq!(week_of(2), 0);
        assert_eq!(week_of(3), 1);
        assert_eq!(week_of(14), 4);
    }

    #[test]
    fn test_sample_tables_are_aligned() {
        assert_eq!(ORDER_PRODUCTS.len(), ORDER_QUANTITIES.len());
        assert_eq!(ORDER_PRODUCTS.len(), ORDER_CUSTOMERS.len());
        assert_eq!(PURCHASE_PRODUCTS.len(), PURCHASE_QUANTITIES.len());
        assert_eq!(PURCHASE_PRODUCTS.len(), PURCHASE_SUPPLIERS.len());
    }
}

//! Workbook loading.
//!
//! Reads the five named sheets of an inventory workbook into typed records.
//! Cell values are normalized at this boundary: IDs become trimmed strings
//! regardless of whether the workbook stored them as text or numbers, and
//! quantities must be whole numbers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use tracing::info;

use crate::error::{DataError, Result};
use crate::model::{InventoryBaseline, Order, Product, ProductId, Purchase, Snapshot, Supplier, Week};

/// Sheet holding order rows.
pub const ORDERS_SHEET: &str = "orders";

/// Sheet holding purchase rows. The spelling is part of the workbook
/// format and kept for compatibility with existing files.
pub const PURCHASES_SHEET: &str = "purcurement";

/// Sheet holding inventory baseline rows.
pub const INVENTORY_SHEET: &str = "inventory";

/// Sheet holding product reference rows.
pub const PRODUCTS_SHEET: &str = "products";

/// Sheet holding supplier reference rows.
pub const SUPPLIERS_SHEET: &str = "suppliers";

/// Load the five tables from an `.xlsx` workbook into a snapshot.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed, a sheet or
/// column is missing, a cell cannot be converted to its expected type, or
/// the inventory sheet carries duplicate baseline rows.
pub fn load_workbook(path: &Path) -> Result<Snapshot> {
    let mut workbook = open_workbook_auto(path)?;

    let orders = read_orders(&sheet(&mut workbook, ORDERS_SHEET)?)?;
    let purchases = read_purchases(&sheet(&mut workbook, PURCHASES_SHEET)?)?;
    let baselines = read_baselines(&sheet(&mut workbook, INVENTORY_SHEET)?)?;
    let products = read_products(&sheet(&mut workbook, PRODUCTS_SHEET)?)?;
    let suppliers = read_suppliers(&sheet(&mut workbook, SUPPLIERS_SHEET)?)?;

    let snapshot = Snapshot::new(orders, purchases, baselines, products, suppliers)?;
    info!(
        orders = snapshot.orders().len(),
        purchases = snapshot.purchases().len(),
        baselines = snapshot.baselines().len(),
        products = snapshot.products().len(),
        suppliers = snapshot.suppliers().len(),
        "workbook loaded"
    );
    Ok(snapshot)
}

fn sheet(workbook: &mut Sheets<BufReader<File>>, name: &str) -> Result<Range<Data>> {
    if !workbook.sheet_names().iter().any(|candidate| candidate == name) {
        return Err(DataError::MissingSheet {
            name: name.to_string(),
        });
    }
    Ok(workbook.worksheet_range(name)?)
}

/// A sheet split into a header row and 1-based-numbered data rows.
struct Table<'a> {
    name: &'static str,
    headers: Vec<String>,
    rows: Vec<(usize, &'a [Data])>,
}

impl<'a> Table<'a> {
    fn new(name: &'static str, range: &'a Range<Data>) -> Self {
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|row| row.iter().map(|cell| text(Some(cell))).collect())
            .unwrap_or_default();
        let rows = rows
            .enumerate()
            .filter(|(_, row)| !is_blank(row))
            .map(|(index, row)| (index + 2, row))
            .collect();
        Self {
            name,
            headers,
            rows,
        }
    }

    fn column(&self, column: &'static str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| DataError::MissingColumn {
                sheet: self.name.to_string(),
                column: column.to_string(),
            })
    }
}

fn read_orders(range: &Range<Data>) -> Result<Vec<Order>> {
    let table = Table::new(ORDERS_SHEET, range);
    let order_id = table.column("OrderID")?;
    let product_id = table.column("ProductID")?;
    let quantity = table.column("Quantity")?;
    let customer = table.column("Customer")?;
    let week = table.column("Week")?;

    table
        .rows
        .iter()
        .map(|&(row_no, row)| {
            Ok(Order {
                order_id: integer(&table, row_no, "OrderID", row.get(order_id))?,
                product_id: ProductId::new(&text(row.get(product_id))),
                quantity: integer(&table, row_no, "Quantity", row.get(quantity))?,
                customer: text(row.get(customer)),
                week: week_number(&table, row_no, "Week", row.get(week))?,
            })
        })
        .collect()
}

fn read_purchases(range: &Range<Data>) -> Result<Vec<Purchase>> {
    let table = Table::new(PURCHASES_SHEET, range);
    let purchase_id = table.column("PurchaseID")?;
    let product_id = table.column("ProductID")?;
    let quantity = table.column("Quantity")?;
    let supplier = table.column("Supplier")?;
    let week = table.column("Week")?;

    table
        .rows
        .iter()
        .map(|&(row_no, row)| {
            Ok(Purchase {
                purchase_id: integer(&table, row_no, "PurchaseID", row.get(purchase_id))?,
                product_id: ProductId::new(&text(row.get(product_id))),
                quantity: integer(&table, row_no, "Quantity", row.get(quantity))?,
                supplier: text(row.get(supplier)),
                week: week_number(&table, row_no, "Week", row.get(week))?,
            })
        })
        .collect()
}

fn read_baselines(range: &Range<Data>) -> Result<Vec<InventoryBaseline>> {
    let table = Table::new(INVENTORY_SHEET, range);
    let product_id = table.column("ProductID")?;
    let quantity = table.column("Quantity")?;
    let week = table.column("Week")?;

    table
        .rows
        .iter()
        .map(|&(row_no, row)| {
            Ok(InventoryBaseline {
                product_id: ProductId::new(&text(row.get(product_id))),
                quantity: integer(&table, row_no, "Quantity", row.get(quantity))?,
                week: week_number(&table, row_no, "Week", row.get(week))?,
            })
        })
        .collect()
}

fn read_products(range: &Range<Data>) -> Result<Vec<Product>> {
    let table = Table::new(PRODUCTS_SHEET, range);
    let product_id = table.column("ProductID")?;
    let product_name = table.column("ProductName")?;
    let category_id = table.column("CategoryID")?;
    let unit = table.column("Unit")?;
    let price = table.column("Price")?;
    let cost = table.column("Cost")?;

    table
        .rows
        .iter()
        .map(|&(row_no, row)| {
            Ok(Product {
                product_id: ProductId::new(&text(row.get(product_id))),
                product_name: text(row.get(product_name)),
                category_id: text(row.get(category_id)),
                unit: text(row.get(unit)),
                price: number(&table, row_no, "Price", row.get(price))?,
                cost: number(&table, row_no, "Cost", row.get(cost))?,
            })
        })
        .collect()
}

fn read_suppliers(range: &Range<Data>) -> Result<Vec<Supplier>> {
    let table = Table::new(SUPPLIERS_SHEET, range);
    let product_id = table.column("ProductID")?;
    let supplier_name = table.column("SupplierName")?;
    let contact_name = table.column("ContactName")?;
    let phone = table.column("Phone")?;
    let email = table.column("Email")?;
    let address = table.column("Address")?;

    table
        .rows
        .iter()
        .map(|&(row_no, row)| {
            Ok(Supplier {
                product_id: ProductId::new(&text(row.get(product_id))),
                supplier_name: text(row.get(supplier_name)),
                contact_name: text(row.get(contact_name)),
                phone: text(row.get(phone)),
                email: text(row.get(email)),
                address: text(row.get(address)),
            })
        })
        .collect()
}

fn is_blank(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

/// Render a cell as trimmed text. Whole-number floats lose their
/// fractional zero so that a numeric ID cell joins against a text ID cell.
fn text(value: Option<&Data>) -> String {
    match value {
        Some(Data::String(text)) => text.trim().to_string(),
        Some(Data::Float(value)) => float_text(*value),
        Some(Data::Int(value)) => value.to_string(),
        Some(Data::Bool(value)) => value.to_string(),
        Some(Data::DateTime(value)) => value.to_string(),
        _ => String::new(),
    }
}

fn float_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

fn integer(table: &Table<'_>, row: usize, column: &str, value: Option<&Data>) -> Result<i64> {
    match value {
        Some(Data::Int(value)) => Ok(*value),
        Some(Data::Float(value)) if value.fract() == 0.0 => Ok(*value as i64),
        Some(Data::String(text)) => text
            .trim()
            .parse()
            .map_err(|_| cell_error(table, row, column, format!("'{text}' is not an integer"))),
        other => Err(cell_error(
            table,
            row,
            column,
            format!("expected a whole number, found {other:?}"),
        )),
    }
}

fn number(table: &Table<'_>, row: usize, column: &str, value: Option<&Data>) -> Result<f64> {
    match value {
        Some(Data::Int(value)) => Ok(*value as f64),
        Some(Data::Float(value)) => Ok(*value),
        Some(Data::String(text)) => text
            .trim()
            .parse()
            .map_err(|_| cell_error(table, row, column, format!("'{text}' is not a number"))),
        other => Err(cell_error(
            table,
            row,
            column,
            format!("expected a number, found {other:?}"),
        )),
    }
}

fn week_number(table: &Table<'_>, row: usize, column: &str, value: Option<&Data>) -> Result<Week> {
    let value = integer(table, row, column, value)?;
    Week::try_from(value)
        .map_err(|_| cell_error(table, row, column, format!("week {value} is negative")))
}

fn cell_error(table: &Table<'_>, row: usize, column: &str, reason: String) -> DataError {
    DataError::Cell {
        sheet: table.name.to_string(),
        row,
        column: column.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_normalizes_numeric_ids() {
        assert_eq!(text(Some(&Data::Float(3.0))), "3");
        assert_eq!(text(Some(&Data::Int(3))), "3");
        assert_eq!(text(Some(&Data::String("  L ".to_string()))), "L");
        assert_eq!(text(Some(&Data::Empty)), "");
        assert_eq!(text(None), "");
    }

    #[test]
    fn test_text_keeps_fractional_floats() {
        assert_eq!(text(Some(&Data::Float(1.5))), "1.5");
    }

    #[test]
    fn test_integer_rejects_fractional_quantity() {
        let range = Range::<Data>::new((0, 0), (0, 0));
        let table = Table::new(ORDERS_SHEET, &range);

        let result = integer(&table, 2, "Quantity", Some(&Data::Float(1.5)));
        assert!(matches!(result, Err(DataError::Cell { .. })));
    }

    #[test]
    fn test_integer_parses_text_cells() {
        let range = Range::<Data>::new((0, 0), (0, 0));
        let table = Table::new(ORDERS_SHEET, &range);

        assert_eq!(
            integer(&table, 2, "Quantity", Some(&Data::String(" 4 ".to_string()))).unwrap(),
            4
        );
    }

    #[test]
    fn test_week_rejects_negative_values() {
        let range = Range::<Data>::new((0, 0), (0, 0));
        let table = Table::new(ORDERS_SHEET, &range);

        let result = week_number(&table, 2, "Week", Some(&Data::Int(-1)));
        assert!(matches!(result, Err(DataError::Cell { .. })));
    }

    #[test]
    fn test_is_blank_row() {
        assert!(is_blank(&[Data::Empty, Data::Empty]));
        assert!(!is_blank(&[Data::Empty, Data::Int(1)]));
    }
}

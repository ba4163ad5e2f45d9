//! A common tabular shape for the displayable reports.
//!
//! Every tabular report exposes its headers and rows through [`Tabular`],
//! so the exporters and the text renderer work on any of them without
//! knowing the concrete report type.

use std::fmt;

use serde::{Serialize, Serializer};
use stockwell_reports::{InventoryRow, ProfitRow, PurchasingRow, SalesValueStack, SupplierReport};

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text cell.
    Text(String),

    /// Integer cell.
    Int(i64),

    /// Floating-point cell.
    Float(f64),

    /// Empty cell (unmatched left-join field).
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Empty => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Empty => serializer.serialize_none(),
        }
    }
}

/// A report that can be displayed and exported as a table.
pub trait Tabular {
    /// Sheet name used when the table is saved as a workbook.
    fn sheet_name(&self) -> &str;

    /// Column headers, in display order.
    fn headers(&self) -> Vec<String>;

    /// Data rows, aligned with [`Tabular::headers`].
    fn rows(&self) -> Vec<Vec<CellValue>>;
}

impl Tabular for Vec<PurchasingRow> {
    fn sheet_name(&self) -> &str {
        "purchasing"
    }

    fn headers(&self) -> Vec<String> {
        ["Week", "ProductName", "Quantity"]
            .map(String::from)
            .to_vec()
    }

    fn rows(&self) -> Vec<Vec<CellValue>> {
        self.iter()
            .map(|row| {
                vec![
                    CellValue::Int(row.week.into()),
                    CellValue::Text(row.product_name.clone()),
                    CellValue::Int(row.quantity),
                ]
            })
            .collect()
    }
}

impl Tabular for Vec<ProfitRow> {
    fn sheet_name(&self) -> &str {
        "profit"
    }

    fn headers(&self) -> Vec<String> {
        ["ProductName", "Quantity", "Profit"]
            .map(String::from)
            .to_vec()
    }

    fn rows(&self) -> Vec<Vec<CellValue>> {
        self.iter()
            .map(|row| {
                vec![
                    CellValue::Text(row.product_name.clone()),
                    CellValue::Int(row.quantity),
                    CellValue::Float(row.profit),
                ]
            })
            .collect()
    }
}

impl Tabular for Vec<InventoryRow> {
    fn sheet_name(&self) -> &str {
        "inventory"
    }

    fn headers(&self) -> Vec<String> {
        [
            "ProductID",
            "ProductName",
            "Week",
            "PreviousInventory",
            "Sales",
            "Purchased",
            "CurrentInventory",
        ]
        .map(String::from)
        .to_vec()
    }

    fn rows(&self) -> Vec<Vec<CellValue>> {
        self.iter()
            .map(|row| {
                vec![
                    CellValue::Text(row.product_id.to_string()),
                    row.product_name
                        .clone()
                        .map_or(CellValue::Empty, CellValue::Text),
                    CellValue::Int(row.week.into()),
                    CellValue::Int(row.previous_inventory),
                    CellValue::Int(row.sales),
                    CellValue::Int(row.purchased),
                    CellValue::Int(row.current_inventory),
                ]
            })
            .collect()
    }
}

impl Tabular for SupplierReport {
    fn sheet_name(&self) -> &str {
        "suppliers"
    }

    fn headers(&self) -> Vec<String> {
        [
            "ProductID",
            "ProductName",
            "SupplierName",
            "ContactName",
            "Phone",
            "Email",
            "Address",
        ]
        .map(String::from)
        .to_vec()
    }

    fn rows(&self) -> Vec<Vec<CellValue>> {
        self.rows
            .iter()
            .map(|row| {
                vec![
                    CellValue::Text(row.product_id.to_string()),
                    if row.product_name.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(row.product_name.clone())
                    },
                    CellValue::Text(row.supplier_name.clone()),
                    CellValue::Text(row.contact_name.clone()),
                    CellValue::Text(row.phone.clone()),
                    CellValue::Text(row.email.clone()),
                    CellValue::Text(row.address.clone()),
                ]
            })
            .collect()
    }
}

impl Tabular for SalesValueStack {
    fn sheet_name(&self) -> &str {
        "sales_value"
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = vec!["Week".to_string()];
        headers.extend(self.products.iter().cloned());
        headers
    }

    fn rows(&self) -> Vec<Vec<CellValue>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = vec![CellValue::Int(row.week.into())];
                cells.extend(row.values.iter().map(|&value| CellValue::Float(value)));
                cells
            })
            .collect()
    }
}

/// Render a table as aligned text, one row per line, for terminal display.
pub fn render_text(table: &dyn Tabular) -> String {
    let headers = table.headers();
    let rows = table.rows();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    let rendered: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    for row in &rendered {
        for (column, cell) in row.iter().enumerate() {
            if column < widths.len() {
                widths[column] = widths[column].max(cell.len());
            }
        }
    }

    let mut output = String::new();
    for (column, header) in headers.iter().enumerate() {
        output.push_str(&format!("{:<width$}  ", header, width = widths[column]));
    }
    output.push('\n');
    output.push_str(&"-".repeat(widths.iter().map(|w| w + 2).sum::<usize>()));
    output.push('\n');
    for row in &rendered {
        for (column, cell) in row.iter().enumerate() {
            output.push_str(&format!("{:<width$}  ", cell, width = widths[column]));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchasing_rows() -> Vec<PurchasingRow> {
        vec![
            PurchasingRow {
                week: 0,
                product_name: "Lobster".to_string(),
                quantity: 5,
            },
            PurchasingRow {
                week: 1,
                product_name: "Salmon".to_string(),
                quantity: 3,
            },
        ]
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Text("L".to_string()).to_string(), "L");
        assert_eq!(CellValue::Int(7).to_string(), "7");
        assert_eq!(CellValue::Float(4.5).to_string(), "4.5");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_tabular_rows_match_headers() {
        let table = purchasing_rows();
        let headers = table.headers();
        for row in table.rows() {
            assert_eq!(row.len(), headers.len());
        }
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let text = render_text(&purchasing_rows());
        let lines: Vec<_> = text.lines().collect();

        assert!(lines[0].contains("Week"));
        assert!(lines[0].contains("ProductName"));
        assert!(lines[2].contains("Lobster"));
        assert!(lines[3].contains("Salmon"));
        // Every product name starts at the same column.
        assert_eq!(
            lines[2].find("Lobster").unwrap(),
            lines[3].find("Salmon").unwrap()
        );
    }
}

//! Profit table, cumulative across all weeks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stockwell_data::Snapshot;

/// Total quantity sold and profit for one product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitRow {
    /// Product name from the products table.
    pub product_name: String,

    /// Total units sold across all weeks.
    pub quantity: i64,

    /// Total profit, `(Price - Cost) * Quantity` summed over all orders.
    pub profit: f64,
}

/// Per-product totals of quantity sold and profit.
///
/// Inner-joins orders to products on ID; rows are ordered by product name.
pub fn profit_table(snapshot: &Snapshot) -> Vec<ProfitRow> {
    let index = snapshot.product_index();

    let mut totals: BTreeMap<String, (i64, f64)> = BTreeMap::new();
    for order in snapshot.orders() {
        if let Some(product) = index.get(&order.product_id) {
            let entry = totals.entry(product.product_name.clone()).or_insert((0, 0.0));
            entry.0 += order.quantity;
            entry.1 += (product.price - product.cost) * order.quantity as f64;
        }
    }

    totals
        .into_iter()
        .map(|(product_name, (quantity, profit))| ProfitRow {
            product_name,
            quantity,
            profit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stockwell_data::{Order, Product, ProductId};

    fn order(product_id: &str, quantity: i64, week: u32) -> Order {
        Order {
            order_id: 0,
            product_id: ProductId::new(product_id),
            quantity,
            customer: String::new(),
            week,
        }
    }

    fn product(product_id: &str, name: &str, price: f64, cost: f64) -> Product {
        Product {
            product_id: ProductId::new(product_id),
            product_name: name.to_string(),
            category_id: String::new(),
            unit: String::new(),
            price,
            cost,
        }
    }

    #[test]
    fn test_profit_is_margin_times_total_quantity() {
        let snapshot = Snapshot::new(
            vec![order("S", 3, 0), order("S", 4, 1), order("S", 2, 2)],
            vec![],
            vec![],
            vec![product("S", "Shrimp", 1.5, 1.0)],
            vec![],
        )
        .unwrap();

        let report = profit_table(&snapshot);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].quantity, 9);
        assert_relative_eq!(report[0].profit, 0.5 * 9.0);
    }

    #[test]
    fn test_rows_ordered_by_product_name() {
        let snapshot = Snapshot::new(
            vec![order("S", 1, 0), order("L", 1, 0)],
            vec![],
            vec![],
            vec![
                product("L", "Lobster", 4.0, 2.0),
                product("S", "Shrimp", 1.5, 1.0),
            ],
            vec![],
        )
        .unwrap();

        let names: Vec<_> = profit_table(&snapshot)
            .into_iter()
            .map(|row| row.product_name)
            .collect();
        assert_eq!(names, vec!["Lobster", "Shrimp"]);
    }
}

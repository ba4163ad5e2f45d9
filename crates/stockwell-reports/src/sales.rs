//! Sales trend and sales-value stack reports.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use stockwell_data::{Snapshot, Week};

/// One product's (week, quantity) sales series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendSeries {
    /// Product name from the products table.
    pub product_name: String,

    /// Ordered (week, total quantity) points.
    pub points: Vec<(Week, i64)>,
}

/// Sales quantities per week and product.
///
/// Inner-joins orders to products on ID and sums quantities per
/// (week, product name) group. Orders whose product ID has no match in the
/// products table drop silently. Series are ordered by product name, points
/// by week.
pub fn sales_trend(snapshot: &Snapshot) -> Vec<TrendSeries> {
    let index = snapshot.product_index();

    let mut totals: BTreeMap<(String, Week), i64> = BTreeMap::new();
    for order in snapshot.orders() {
        if let Some(product) = index.get(&order.product_id) {
            *totals
                .entry((product.product_name.clone(), order.week))
                .or_insert(0) += order.quantity;
        }
    }

    let mut series: Vec<TrendSeries> = Vec::new();
    for ((product_name, week), quantity) in totals {
        match series.last_mut() {
            Some(last) if last.product_name == product_name => {
                last.points.push((week, quantity));
            }
            _ => series.push(TrendSeries {
                product_name,
                points: vec![(week, quantity)],
            }),
        }
    }
    series
}

/// Weekly sales revenue, one column per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesValueStack {
    /// Column order: product names, ascending.
    pub products: Vec<String>,

    /// One row per week, ascending; values align with `products`.
    pub rows: Vec<StackRow>,
}

/// One week's revenue split by product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackRow {
    /// Week of the row.
    pub week: Week,

    /// Revenue per product, aligned with [`SalesValueStack::products`].
    /// Products with no sales that week hold 0.
    pub values: Vec<f64>,
}

impl StackRow {
    /// Total revenue for the week across all products.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Weekly revenue per product, reshaped week-by-product.
///
/// Revenue is `Quantity * Price` per order row, summed per
/// (week, product name) group and pivoted into a week-indexed table with
/// one column per product. Missing combinations are 0.
pub fn sales_value_stack(snapshot: &Snapshot) -> SalesValueStack {
    let index = snapshot.product_index();

    let mut revenue: BTreeMap<Week, BTreeMap<String, f64>> = BTreeMap::new();
    let mut names: BTreeSet<String> = BTreeSet::new();
    for order in snapshot.orders() {
        if let Some(product) = index.get(&order.product_id) {
            names.insert(product.product_name.clone());
            *revenue
                .entry(order.week)
                .or_default()
                .entry(product.product_name.clone())
                .or_insert(0.0) += order.quantity as f64 * product.price;
        }
    }

    let products: Vec<String> = names.into_iter().collect();
    let rows = revenue
        .into_iter()
        .map(|(week, by_product)| StackRow {
            week,
            values: products
                .iter()
                .map(|name| by_product.get(name).copied().unwrap_or(0.0))
                .collect(),
        })
        .collect();

    SalesValueStack { products, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stockwell_data::{Order, Product, ProductId};

    fn order(product_id: &str, quantity: i64, week: Week) -> Order {
        Order {
            order_id: 0,
            product_id: ProductId::new(product_id),
            quantity,
            customer: String::new(),
            week,
        }
    }

    fn product(product_id: &str, name: &str, price: f64) -> Product {
        Product {
            product_id: ProductId::new(product_id),
            product_name: name.to_string(),
            category_id: String::new(),
            unit: String::new(),
            price,
            cost: 0.0,
        }
    }

    fn snapshot(orders: Vec<Order>, products: Vec<Product>) -> Snapshot {
        Snapshot::new(orders, vec![], vec![], products, vec![]).unwrap()
    }

    #[test]
    fn test_trend_series_per_product() {
        // Orders [(L,4,week0),(L,3,week1)] with price 4 give series [(0,4),(1,3)].
        let snapshot = snapshot(
            vec![order("L", 4, 0), order("L", 3, 1)],
            vec![product("L", "Lobster", 4.0)],
        );

        let series = sales_trend(&snapshot);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].product_name, "Lobster");
        assert_eq!(series[0].points, vec![(0, 4), (1, 3)]);
    }

    #[test]
    fn test_trend_sums_within_a_week() {
        let snapshot = snapshot(
            vec![order("L", 4, 0), order("L", 2, 0)],
            vec![product("L", "Lobster", 4.0)],
        );

        let series = sales_trend(&snapshot);
        assert_eq!(series[0].points, vec![(0, 6)]);
    }

    #[test]
    fn test_trend_drops_unmatched_products() {
        let snapshot = snapshot(
            vec![order("L", 4, 0), order("X", 9, 0)],
            vec![product("L", "Lobster", 4.0)],
        );

        let series = sales_trend(&snapshot);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].product_name, "Lobster");
    }

    #[test]
    fn test_stack_pivots_missing_combinations_to_zero() {
        let snapshot = snapshot(
            vec![order("L", 2, 0), order("G", 3, 1)],
            vec![product("L", "Lobster", 4.0), product("G", "Salmon", 3.0)],
        );

        let stack = sales_value_stack(&snapshot);
        assert_eq!(stack.products, vec!["Lobster", "Salmon"]);
        assert_eq!(stack.rows.len(), 2);

        // Week 0: Lobster 2 * 4.0, no Salmon sales.
        assert_eq!(stack.rows[0].week, 0);
        assert_relative_eq!(stack.rows[0].values[0], 8.0);
        assert_relative_eq!(stack.rows[0].values[1], 0.0);

        // Week 1: Salmon 3 * 3.0 only.
        assert_eq!(stack.rows[1].week, 1);
        assert_relative_eq!(stack.rows[1].values[0], 0.0);
        assert_relative_eq!(stack.rows[1].values[1], 9.0);
    }

    #[test]
    fn test_stack_row_total_sums_segments() {
        let snapshot = snapshot(
            vec![order("L", 2, 0), order("G", 3, 0)],
            vec![product("L", "Lobster", 4.0), product("G", "Salmon", 3.0)],
        );

        let stack = sales_value_stack(&snapshot);
        assert_relative_eq!(stack.rows[0].total(), 17.0);
    }
}

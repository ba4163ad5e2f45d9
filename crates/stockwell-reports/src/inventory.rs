//! Inventory report and inventory-value trend, built on the roll-forward
//! ledger.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use stockwell_data::{ProductId, Snapshot, Week};
use tracing::warn;

use crate::rollforward::roll_forward;

/// One ledger week with the product name attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryRow {
    /// Product the row belongs to.
    pub product_id: ProductId,

    /// Product name; `None` when the ID has no match in the products table.
    pub product_name: Option<String>,

    /// Week of the row, starting at 1.
    pub week: Week,

    /// On-hand quantity carried in from the previous week.
    pub previous_inventory: i64,

    /// Units sold during the week.
    pub sales: i64,

    /// Units purchased during the week.
    pub purchased: i64,

    /// On-hand quantity at the end of the week.
    pub current_inventory: i64,
}

/// The roll-forward ledger with product names left-joined on.
///
/// Rows are ordered by ProductID then Week. IDs missing from the products
/// table keep their ledger rows with an empty name.
pub fn inventory_report(snapshot: &Snapshot) -> Vec<InventoryRow> {
    let index = snapshot.product_index();

    roll_forward(snapshot)
        .into_iter()
        .map(|entry| InventoryRow {
            product_name: index
                .get(&entry.product_id)
                .map(|product| product.product_name.clone()),
            product_id: entry.product_id,
            week: entry.week,
            previous_inventory: entry.previous_inventory,
            sales: entry.sales,
            purchased: entry.purchased,
            current_inventory: entry.current_inventory,
        })
        .collect()
}

/// Total inventory value for one week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValuePoint {
    /// Week of the point, starting at 1.
    pub week: Week,

    /// Sum of `CurrentInventory * Cost` across all products.
    pub value: f64,
}

/// Total inventory value per week.
///
/// Multiplies each ledger week's ending balance by the product's cost and
/// sums across products. Ledger rows whose product has no cost (ID missing
/// from the products table) are skipped with a logged diagnostic.
pub fn inventory_value_trend(snapshot: &Snapshot) -> Vec<ValuePoint> {
    let index = snapshot.product_index();

    let mut totals: BTreeMap<Week, f64> = BTreeMap::new();
    let mut missing: BTreeSet<ProductId> = BTreeSet::new();
    for entry in roll_forward(snapshot) {
        match index.get(&entry.product_id) {
            Some(product) => {
                *totals.entry(entry.week).or_insert(0.0) +=
                    entry.current_inventory as f64 * product.cost;
            }
            None => {
                missing.insert(entry.product_id);
            }
        }
    }

    if !missing.is_empty() {
        let missing: Vec<_> = missing.iter().map(ToString::to_string).collect();
        warn!(
            product_ids = ?missing,
            "inventory value trend skipped products with no cost"
        );
    }

    totals
        .into_iter()
        .map(|(week, value)| ValuePoint { week, value })
        .collect()
}

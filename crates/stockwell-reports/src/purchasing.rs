//! Weekly purchasing report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stockwell_data::{Snapshot, Week};

/// One (week, product) purchasing total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchasingRow {
    /// Week of the purchases.
    pub week: Week,

    /// Product name from the products table.
    pub product_name: String,

    /// Total units purchased in the group.
    pub quantity: i64,
}

/// Units purchased per week and product.
///
/// Inner-joins purchases to products on ID and sums quantities per
/// (week, product name) group; rows are ordered by week, then product name.
pub fn weekly_purchasing(snapshot: &Snapshot) -> Vec<PurchasingRow> {
    let index = snapshot.product_index();

    let mut totals: BTreeMap<(Week, String), i64> = BTreeMap::new();
    for purchase in snapshot.purchases() {
        if let Some(product) = index.get(&purchase.product_id) {
            *totals
                .entry((purchase.week, product.product_name.clone()))
                .or_insert(0) += purchase.quantity;
        }
    }

    totals
        .into_iter()
        .map(|((week, product_name), quantity)| PurchasingRow {
            week,
            product_name,
            quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwell_data::{Product, ProductId, Purchase};

    fn purchase(product_id: &str, quantity: i64, week: Week) -> Purchase {
        Purchase {
            purchase_id: 0,
            product_id: ProductId::new(product_id),
            quantity,
            supplier: String::new(),
            week,
        }
    }

    fn product(product_id: &str, name: &str) -> Product {
        Product {
            product_id: ProductId::new(product_id),
            product_name: name.to_string(),
            category_id: String::new(),
            unit: String::new(),
            price: 0.0,
            cost: 0.0,
        }
    }

    #[test]
    fn test_groups_by_week_then_name() {
        let snapshot = Snapshot::new(
            vec![],
            vec![
                purchase("G", 3, 1),
                purchase("L", 5, 0),
                purchase("L", 2, 1),
                purchase("L", 1, 1),
            ],
            vec![],
            vec![product("L", "Lobster"), product("G", "Salmon")],
            vec![],
        )
        .unwrap();

        let report = weekly_purchasing(&snapshot);
        assert_eq!(
            report,
            vec![
                PurchasingRow {
                    week: 0,
                    product_name: "Lobster".to_string(),
                    quantity: 5,
                },
                PurchasingRow {
                    week: 1,
                    product_name: "Lobster".to_string(),
                    quantity: 3,
                },
                PurchasingRow {
                    week: 1,
                    product_name: "Salmon".to_string(),
                    quantity: 3,
                },
            ]
        );
    }

    #[test]
    fn test_unmatched_purchases_drop() {
        let snapshot = Snapshot::new(
            vec![],
            vec![purchase("X", 7, 0)],
            vec![],
            vec![product("L", "Lobster")],
            vec![],
        )
        .unwrap();

        assert!(weekly_purchasing(&snapshot).is_empty());
    }
}

//! Typed records for the five workbook tables and the immutable snapshot
//! that holds them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Week number. Week 0 is the baseline week; activity is recorded from
/// week 0 onward.
pub type Week = u32;

/// Product identifier, normalized to a trimmed string.
///
/// Workbooks are free to carry IDs as text or numeric cells; both are
/// normalized to the same trimmed string form here so that joins never
/// miss on a type or whitespace mismatch.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from raw cell text, trimming surrounding whitespace.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The normalized ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One sale event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order identifier (pass-through, not interpreted).
    pub order_id: i64,

    /// Product sold.
    pub product_id: ProductId,

    /// Units sold.
    pub quantity: i64,

    /// Customer label.
    pub customer: String,

    /// Week the sale happened.
    pub week: Week,
}

/// One restock event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    /// Purchase identifier (pass-through, not interpreted).
    pub purchase_id: i64,

    /// Product restocked.
    pub product_id: ProductId,

    /// Units purchased.
    pub quantity: i64,

    /// Supplier label as recorded on the purchase row.
    pub supplier: String,

    /// Week the restock happened.
    pub week: Week,
}

/// Starting on-hand quantity for a product, recorded at week 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryBaseline {
    /// Product the baseline belongs to.
    pub product_id: ProductId,

    /// On-hand quantity before any recorded activity.
    pub quantity: i64,

    /// Baseline week, 0 in well-formed workbooks.
    pub week: Week,
}

/// Product reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier.
    pub product_id: ProductId,

    /// Display name.
    pub product_name: String,

    /// Category label.
    pub category_id: String,

    /// Unit of measure.
    pub unit: String,

    /// Sale price per unit.
    pub price: f64,

    /// Purchase cost per unit.
    pub cost: f64,
}

/// Supplier reference data, one supplier per product in this model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    /// Product this supplier provides.
    pub product_id: ProductId,

    /// Supplier company name.
    pub supplier_name: String,

    /// Contact person.
    pub contact_name: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// Postal address.
    pub address: String,
}

/// Immutable view of the five loaded tables.
///
/// A snapshot is constructed once per upload and never mutated; report
/// functions take it as an explicit parameter, so a computation can never
/// observe a mix of old and new tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    orders: Vec<Order>,
    purchases: Vec<Purchase>,
    baselines: Vec<InventoryBaseline>,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
}

impl Snapshot {
    /// Assemble a snapshot from the five loaded tables.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuplicateBaseline`] if the inventory table
    /// carries more than one baseline row for the same product. The
    /// roll-forward contract requires exactly one starting quantity per
    /// product, so ambiguous workbooks are rejected at load rather than
    /// silently picking a row.
    pub fn new(
        orders: Vec<Order>,
        purchases: Vec<Purchase>,
        baselines: Vec<InventoryBaseline>,
        products: Vec<Product>,
        suppliers: Vec<Supplier>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for baseline in &baselines {
            if !seen.insert(&baseline.product_id) {
                return Err(DataError::DuplicateBaseline {
                    product_id: baseline.product_id.to_string(),
                });
            }
        }

        Ok(Self {
            orders,
            purchases,
            baselines,
            products,
            suppliers,
        })
    }

    /// All order rows.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All purchase rows.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// All inventory baseline rows, one per product.
    pub fn baselines(&self) -> &[InventoryBaseline] {
        &self.baselines
    }

    /// All product rows.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All supplier rows.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Hash index over the product table, keyed by ID.
    ///
    /// This is the build side of every product join; rows with IDs absent
    /// from the index drop from inner joins and yield empty fields from
    /// left joins.
    pub fn product_index(&self) -> HashMap<&ProductId, &Product> {
        self.products
            .iter()
            .map(|product| (&product.product_id, product))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline(id: &str, quantity: i64) -> InventoryBaseline {
        InventoryBaseline {
            product_id: ProductId::new(id),
            quantity,
            week: 0,
        }
    }

    #[test]
    fn test_product_id_trims_whitespace() {
        assert_eq!(ProductId::new("  L "), ProductId::new("L"));
        assert_eq!(ProductId::new(" L ").as_str(), "L");
    }

    #[test]
    fn test_snapshot_rejects_duplicate_baseline() {
        let result = Snapshot::new(
            vec![],
            vec![],
            vec![baseline("L", 6), baseline("L", 3)],
            vec![],
            vec![],
        );

        assert!(matches!(
            result,
            Err(DataError::DuplicateBaseline { product_id }) if product_id == "L"
        ));
    }

    #[test]
    fn test_snapshot_accepts_one_baseline_per_product() {
        let snapshot = Snapshot::new(
            vec![],
            vec![],
            vec![baseline("L", 6), baseline("G", 6), baseline("S", 7)],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(snapshot.baselines().len(), 3);
    }

    #[test]
    fn test_product_index_keys_by_id() {
        let product = Product {
            product_id: ProductId::new("L"),
            product_name: "Lobster".to_string(),
            category_id: "A".to_string(),
            unit: "piece".to_string(),
            price: 4.0,
            cost: 2.0,
        };
        let snapshot = Snapshot::new(vec![], vec![], vec![], vec![product], vec![]).unwrap();

        let index = snapshot.product_index();
        assert_eq!(index[&ProductId::new("L")].product_name, "Lobster");
        assert!(!index.contains_key(&ProductId::new("G")));
    }
}

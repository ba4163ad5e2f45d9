//! Supplier lookup report.

use serde::{Deserialize, Serialize};
use stockwell_data::{ProductId, Snapshot};
use tracing::warn;

/// One supplier row with the product name attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplierRow {
    /// Product the supplier provides.
    pub product_id: ProductId,

    /// Product name; empty when the ID has no match in the products table.
    pub product_name: String,

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

/// Supplier lookup with join diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplierReport {
    /// One row per supplier-table row, in table order.
    pub rows: Vec<SupplierRow>,

    /// Supplier ProductIDs with no match in the products table, sorted and
    /// deduplicated. A mismatch never aborts the report.
    pub unmatched: Vec<ProductId>,
}

/// Left-join suppliers to products on ID.
///
/// IDs were normalized to trimmed strings at load, so a text ID in one
/// sheet matches a numeric ID in the other. Unmatched IDs are collected
/// into [`SupplierReport::unmatched`] and logged.
pub fn supplier_report(snapshot: &Snapshot) -> SupplierReport {
    let index = snapshot.product_index();

    let mut rows = Vec::with_capacity(snapshot.suppliers().len());
    let mut unmatched = Vec::new();
    for supplier in snapshot.suppliers() {
        let product_name = match index.get(&supplier.product_id) {
            Some(product) => product.product_name.clone(),
            None => {
                unmatched.push(supplier.product_id.clone());
                String::new()
            }
        };
        rows.push(SupplierRow {
            product_id: supplier.product_id.clone(),
            product_name,
            supplier_name: supplier.supplier_name.clone(),
            contact_name: supplier.contact_name.clone(),
            phone: supplier.phone.clone(),
            email: supplier.email.clone(),
            address: supplier.address.clone(),
        });
    }

    unmatched.sort();
    unmatched.dedup();
    if !unmatched.is_empty() {
        let ids: Vec<_> = unmatched.iter().map(ToString::to_string).collect();
        warn!(product_ids = ?ids, "supplier rows with no matching product");
    }

    SupplierReport { rows, unmatched }
}

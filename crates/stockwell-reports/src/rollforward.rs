//! Week-by-week inventory roll-forward.
//!
//! For each product with a baseline row, the ledger walks weeks 1 through
//! the last week that product shows any activity, carrying the ending
//! balance of one week into the next:
//!
//! ```text
//! current(w) = previous(w) + purchased(w) - sales(w)
//! previous(1) = baseline quantity at week 0
//! previous(w) = current(w - 1)        for w > 1
//! ```
//!
//! A week with no orders or purchases contributes zeros. The balance is
//! allowed to go negative; the ledger records whatever the arithmetic
//! produces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stockwell_data::{ProductId, Snapshot, Week};

/// One week of one product's inventory ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Product the entry belongs to.
    pub product_id: ProductId,

    /// Week of the entry, starting at 1.
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

/// Compute the ledger for every product in the baseline table.
///
/// Products are processed in ID order and each product's weeks are emitted
/// in ascending order, so the concatenated output is ordered by
/// (ProductID, Week).
pub fn roll_forward(snapshot: &Snapshot) -> Vec<LedgerEntry> {
    let mut baselines: Vec<_> = snapshot.baselines().iter().collect();
    baselines.sort_by(|a, b| a.product_id.cmp(&b.product_id));

    let mut ledger = Vec::new();
    for baseline in baselines {
        let sales = weekly_totals(
            snapshot
                .orders()
                .iter()
                .filter(|order| order.product_id == baseline.product_id)
                .map(|order| (order.week, order.quantity)),
        );
        let purchases = weekly_totals(
            snapshot
                .purchases()
                .iter()
                .filter(|purchase| purchase.product_id == baseline.product_id)
                .map(|purchase| (purchase.week, purchase.quantity)),
        );

        product_ledger(
            &mut ledger,
            &baseline.product_id,
            baseline.quantity,
            baseline.week,
            &sales,
            &purchases,
        );
    }
    ledger
}

/// Sum quantities per week.
fn weekly_totals(rows: impl Iterator<Item = (Week, i64)>) -> BTreeMap<Week, i64> {
    let mut totals = BTreeMap::new();
    for (week, quantity) in rows {
        *totals.entry(week).or_insert(0) += quantity;
    }
    totals
}

fn product_ledger(
    ledger: &mut Vec<LedgerEntry>,
    product_id: &ProductId,
    starting_quantity: i64,
    baseline_week: Week,
    sales: &BTreeMap<Week, i64>,
    purchases: &BTreeMap<Week, i64>,
) {
    let last_week = |totals: &BTreeMap<Week, i64>| totals.keys().next_back().copied().unwrap_or(0);
    let max_week = baseline_week.max(last_week(sales)).max(last_week(purchases));

    let mut previous = starting_quantity;
    for week in 1..=max_week {
        let sold = sales.get(&week).copied().unwrap_or(0);
        let purchased = purchases.get(&week).copied().unwrap_or(0);
        let current = previous + purchased - sold;

        ledger.push(LedgerEntry {
            product_id: product_id.clone(),
            week,
            previous_inventory: previous,
            sales: sold,
            purchased,
            current_inventory: current,
        });
        previous = current;
    }
}

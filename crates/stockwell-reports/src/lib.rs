#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod inventory;
pub mod profit;
pub mod purchasing;
pub mod rollforward;
pub mod sales;
pub mod supplier;

pub use inventory::{InventoryRow, ValuePoint, inventory_report, inventory_value_trend};
pub use profit::{ProfitRow, profit_table};
pub use purchasing::{PurchasingRow, weekly_purchasing};
pub use rollforward::{LedgerEntry, roll_forward};
pub use sales::{SalesValueStack, StackRow, TrendSeries, sales_trend, sales_value_stack};
pub use supplier::{SupplierReport, SupplierRow, supplier_report};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

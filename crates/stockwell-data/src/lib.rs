#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod template;
pub mod workbook;

pub use error::{DataError, Result, SessionError};
pub use model::{InventoryBaseline, Order, Product, ProductId, Purchase, Snapshot, Supplier, Week};
pub use session::Session;
pub use template::write_template;
pub use workbook::load_workbook;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

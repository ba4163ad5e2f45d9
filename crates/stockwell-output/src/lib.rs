#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chart;
pub mod export;
pub mod table;

pub use chart::{
    CHART_HEIGHT, CHART_WIDTH, ChartError, render_inventory_value_trend, render_sales_trend,
    render_sales_value_stack,
};
pub use export::{ExportError, ExportFormat, export_to_file, export_to_string};
pub use table::{CellValue, Tabular, render_text};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

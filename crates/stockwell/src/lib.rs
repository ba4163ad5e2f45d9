#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use stockwell_data as data;
pub use stockwell_output as output;
pub use stockwell_reports as reports;

// Re-export the common entry points
pub use stockwell_data::{Session, Snapshot, load_workbook, write_template};

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

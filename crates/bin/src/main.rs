//! Stockwell CLI binary.
//!
//! One subcommand per user action: write the sample template, check a
//! workbook, or generate one of the seven reports/charts. Every failure is
//! caught at this boundary and reported as a one-line status message.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use stockwell::{load_workbook, write_template};
use stockwell_output::{
    ExportFormat, Tabular, export_to_file, render_inventory_value_trend, render_sales_trend,
    render_sales_value_stack, render_text,
};
use stockwell_reports::{
    inventory_report, inventory_value_trend, profit_table, sales_trend, sales_value_stack,
    supplier_report, weekly_purchasing,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stockwell")]
#[command(about = "Stockwell: inventory, purchasing, and sales reporting", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a template workbook pre-filled with sample data
    Template {
        /// Destination .xlsx path
        #[arg(default_value = "stockwell_template.xlsx")]
        out: PathBuf,
    },

    /// Load a workbook and report what it contains
    Check {
        /// Workbook to load
        workbook: PathBuf,
    },

    /// Sales quantity per week, one line per product (chart)
    SalesTrend {
        /// Workbook to load
        workbook: PathBuf,

        /// PNG destination
        #[arg(long, default_value = "sales_trend.png")]
        out: PathBuf,
    },

    /// Weekly sales revenue stacked by product (chart)
    SalesStack {
        /// Workbook to load
        workbook: PathBuf,

        /// PNG destination
        #[arg(long, default_value = "sales_stack.png")]
        out: PathBuf,
    },

    /// Weekly purchasing totals per product
    Purchasing {
        /// Workbook to load
        workbook: PathBuf,

        /// Save the report as .xlsx, .csv, or .json
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Total inventory value per week (chart)
    InventoryValue {
        /// Workbook to load
        workbook: PathBuf,

        /// PNG destination
        #[arg(long, default_value = "inventory_value.png")]
        out: PathBuf,
    },

    /// Week-by-week inventory ledger
    Inventory {
        /// Workbook to load
        workbook: PathBuf,

        /// Save the report as .xlsx, .csv, or .json
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Cumulative profit per product
    Profit {
        /// Workbook to load
        workbook: PathBuf,

        /// Save the report as .xlsx, .csv, or .json
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Supplier contact lookup
    Suppliers {
        /// Workbook to load
        workbook: PathBuf,

        /// Save the report as .xlsx, .csv, or .json
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(status) => println!("{status}"),
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}

fn run() -> Result<String, Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Template { out } => {
            write_template(&out)?;
            Ok(format!("OK: template written to {}", out.display()))
        }
        Commands::Check { workbook } => {
            let snapshot = load_workbook(&workbook)?;
            Ok(format!(
                "OK: loaded {} orders, {} purchases, {} baselines, {} products, {} suppliers",
                snapshot.orders().len(),
                snapshot.purchases().len(),
                snapshot.baselines().len(),
                snapshot.products().len(),
                snapshot.suppliers().len(),
            ))
        }
        Commands::SalesTrend { workbook, out } => {
            let snapshot = load_workbook(&workbook)?;
            render_sales_trend(&sales_trend(&snapshot), &out)?;
            Ok(chart_status(&out))
        }
        Commands::SalesStack { workbook, out } => {
            let snapshot = load_workbook(&workbook)?;
            render_sales_value_stack(&sales_value_stack(&snapshot), &out)?;
            Ok(chart_status(&out))
        }
        Commands::InventoryValue { workbook, out } => {
            let snapshot = load_workbook(&workbook)?;
            render_inventory_value_trend(&inventory_value_trend(&snapshot), &out)?;
            Ok(chart_status(&out))
        }
        Commands::Purchasing { workbook, out } => {
            let snapshot = load_workbook(&workbook)?;
            show_table(&weekly_purchasing(&snapshot), out.as_deref())
        }
        Commands::Inventory { workbook, out } => {
            let snapshot = load_workbook(&workbook)?;
            show_table(&inventory_report(&snapshot), out.as_deref())
        }
        Commands::Profit { workbook, out } => {
            let snapshot = load_workbook(&workbook)?;
            show_table(&profit_table(&snapshot), out.as_deref())
        }
        Commands::Suppliers { workbook, out } => {
            let snapshot = load_workbook(&workbook)?;
            let report = supplier_report(&snapshot);
            let status = show_table(&report, out.as_deref())?;
            if report.unmatched.is_empty() {
                Ok(status)
            } else {
                let ids: Vec<String> = report
                    .unmatched
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                Ok(format!("{status} (no product match for: {})", ids.join(", ")))
            }
        }
    }
}

/// Print a table and optionally export it; returns the status line.
fn show_table(table: &dyn Tabular, out: Option<&Path>) -> Result<String, Box<dyn Error>> {
    print!("{}", render_text(table));

    match out {
        Some(path) => {
            let format = ExportFormat::from_path(path).ok_or_else(|| {
                format!("unsupported export extension: {}", path.display())
            })?;
            export_to_file(table, path, format)?;
            Ok(format!("OK: report saved to {}", path.display()))
        }
        None => Ok("OK: report generated".to_string()),
    }
}

fn chart_status(out: &Path) -> String {
    format!("OK: chart saved to {}", out.display())
}

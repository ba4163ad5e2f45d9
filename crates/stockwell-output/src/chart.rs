//! Chart rendering.
//!
//! Renders the three charts (sales trend, sales-value stack,
//! inventory-value trend) to PNG files. Axis conventions follow the
//! tabular reports: weeks on x with integer ticks, quantities or values
//! on y with the floor fixed at 0.

use std::path::Path;

use plotters::prelude::*;
use stockwell_reports::{SalesValueStack, TrendSeries, ValuePoint};
use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Drawing backend error.
    #[error("Chart rendering error: {0}")]
    Render(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn render_error(error: impl std::fmt::Display) -> ChartError {
    ChartError::Render(error.to_string())
}

/// Rendered chart width in pixels.
pub const CHART_WIDTH: u32 = 800;

/// Rendered chart height in pixels.
pub const CHART_HEIGHT: u32 = 600;

/// Render the sales trend as a multi-line chart, one line per product.
///
/// # Errors
///
/// Returns an error if the backend cannot draw or write the file.
pub fn render_sales_trend(series: &[TrendSeries], path: &Path) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let max_week = series
        .iter()
        .flat_map(|series| series.points.iter().map(|&(week, _)| week))
        .max()
        .unwrap_or(0) as i64;
    let max_quantity = series
        .iter()
        .flat_map(|series| series.points.iter().map(|&(_, quantity)| quantity))
        .max()
        .unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Sales trend", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(0i64..max_week + 1, 0i64..max_quantity + 1)
        .map_err(render_error)?;
    chart
        .configure_mesh()
        .x_desc("Week")
        .y_desc("Quantity sold")
        .x_labels((max_week + 2) as usize)
        .draw()
        .map_err(render_error)?;

    for (index, series) in series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        chart
            .draw_series(LineSeries::new(
                series
                    .points
                    .iter()
                    .map(|&(week, quantity)| (week as i64, quantity)),
                color.stroke_width(2),
            ))
            .map_err(render_error)?
            .label(series.product_name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;
    root.present().map_err(render_error)?;
    Ok(())
}

/// Render the sales-value stack as stacked bars, one bar per week.
///
/// Segments are stacked in the report's product column order, so each
/// bar's total height is the week's total revenue.
///
/// # Errors
///
/// Returns an error if the backend cannot draw or write the file.
pub fn render_sales_value_stack(stack: &SalesValueStack, path: &Path) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let max_week = stack.rows.last().map(|row| row.week).unwrap_or(0) as f64;
    let max_total = stack
        .rows
        .iter()
        .map(|row| row.total())
        .fold(0.0f64, f64::max);
    let y_top = if max_total > 0.0 { max_total * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption("Sales value by week", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(-0.6..max_week + 0.6, 0.0..y_top)
        .map_err(render_error)?;
    chart
        .configure_mesh()
        .x_desc("Week")
        .y_desc("Sales value")
        .x_labels(stack.rows.len().max(2))
        .x_label_formatter(&|week| format!("{week:.0}"))
        .draw()
        .map_err(render_error)?;

    for (index, product_name) in stack.products.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        chart
            .draw_series(stack.rows.iter().filter(|row| row.values[index] != 0.0).map(
                |row| {
                    let bottom: f64 = row.values[..index].iter().sum();
                    let top = bottom + row.values[index];
                    let week = row.week as f64;
                    Rectangle::new([(week - 0.35, bottom), (week + 0.35, top)], color.filled())
                },
            ))
            .map_err(render_error)?
            .label(product_name.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;
    root.present().map_err(render_error)?;
    Ok(())
}

/// Render the inventory-value trend as a single line with point markers.
///
/// The y axis runs from 0 to slightly above the observed maximum.
///
/// # Errors
///
/// Returns an error if the backend cannot draw or write the file.
pub fn render_inventory_value_trend(points: &[ValuePoint], path: &Path) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let max_week = points.last().map(|point| point.week).unwrap_or(0) as i64;
    let max_value = points
        .iter()
        .map(|point| point.value)
        .fold(0.0f64, f64::max);
    let y_top = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption("Total inventory value per week", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(0i64..max_week + 1, 0.0..y_top)
        .map_err(render_error)?;
    chart
        .configure_mesh()
        .x_desc("Week")
        .y_desc("Inventory value")
        .x_labels((max_week + 2) as usize)
        .draw()
        .map_err(render_error)?;

    let color = Palette99::pick(0).to_rgba();
    chart
        .draw_series(LineSeries::new(
            points.iter().map(|point| (point.week as i64, point.value)),
            color.stroke_width(2),
        ))
        .map_err(render_error)?;
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new((point.week as i64, point.value), 4, color.filled())),
        )
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwell_reports::StackRow;

    fn temp_png(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    fn assert_renders(path: &std::path::Path) {
        assert!(std::fs::metadata(path).unwrap().len() > 0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_render_sales_trend() {
        let series = vec![
            TrendSeries {
                product_name: "Lobster".to_string(),
                points: vec![(0, 4), (1, 3), (2, 4)],
            },
            TrendSeries {
                product_name: "Salmon".to_string(),
                points: vec![(0, 2), (1, 5)],
            },
        ];

        let path = temp_png("stockwell_trend_test.png");
        render_sales_trend(&series, &path).unwrap();
        assert_renders(&path);
    }

    #[test]
    fn test_render_sales_value_stack() {
        let stack = SalesValueStack {
            products: vec!["Lobster".to_string(), "Salmon".to_string()],
            rows: vec![
                StackRow {
                    week: 0,
                    values: vec![16.0, 6.0],
                },
                StackRow {
                    week: 1,
                    values: vec![12.0, 15.0],
                },
            ],
        };

        let path = temp_png("stockwell_stack_test.png");
        render_sales_value_stack(&stack, &path).unwrap();
        assert_renders(&path);
    }

    #[test]
    fn test_render_inventory_value_trend() {
        let points = vec![
            ValuePoint {
                week: 1,
                value: 28.0,
            },
            ValuePoint {
                week: 2,
                value: 24.0,
            },
        ];

        let path = temp_png("stockwell_value_trend_test.png");
        render_inventory_value_trend(&points, &path).unwrap();
        assert_renders(&path);
    }

    #[test]
    fn test_render_empty_chart_does_not_panic() {
        let path = temp_png("stockwell_empty_chart_test.png");
        render_sales_trend(&[], &path).unwrap();
        assert_renders(&path);
    }
}

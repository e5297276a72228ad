use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;

use crate::error::{CommitplotError, Result};
use crate::types::MonthlySeries;

use super::styles::{ChartStyle, ChartTheme};

type PlotError = Box<dyn Error + Send + Sync>;

/// Caption drawn on every chart; also used as the viewer window title.
pub const CHART_TITLE: &str = "Commits Over Time";

const CHART_SIZE: (u32, u32) = (1200, 600);

/// Upper bound on x axis labels before thinning kicks in.
const MAX_X_LABELS: usize = 20;

// Helper function to wrap errors
fn wrap_err<E>(e: E) -> CommitplotError
where
    E: ToString,
{
    CommitplotError::Render(e.to_string())
}

/// Render the monthly series as a line chart image at `path`.
///
/// The image format follows the file extension (PNG for `.png`). An empty
/// series is legal and yields a blank chart rather than an error; an
/// unwritable path surfaces as a `Render` error.
pub fn render_chart(series: &MonthlySeries, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(series, &root).map_err(wrap_err)?;
    root.present().map_err(wrap_err)?;
    Ok(())
}

/// Render the chart into PNG bytes without leaving a file behind.
///
/// Used for display-only runs: the chart is written into a temporary
/// directory, read back, and the directory is dropped.
pub fn render_chart_to_bytes(series: &MonthlySeries) -> Result<Vec<u8>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("chart.png");
    render_chart(series, &path)?;
    let bytes = std::fs::read(&path)?;
    Ok(bytes)
}

/// Internal function to draw the chart onto a drawing area
fn draw_chart(
    series: &MonthlySeries,
    root_area: &DrawingArea<BitMapBackend, Shift>,
) -> std::result::Result<(), PlotError> {
    let theme = ChartTheme::default();
    let style = ChartStyle::default();

    root_area.fill(&theme.background_color)?;

    let x_end = (series.len() as f64).max(1.0);
    let y_end = (series.max_count() as f64 * 1.1).max(1.0);

    let mut chart_builder = ChartBuilder::on(root_area)
        .caption(
            CHART_TITLE,
            ("sans-serif", style.title_font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .x_label_area_size(style.x_label_area_size)
        .y_label_area_size(style.y_label_area_size)
        .build_cartesian_2d(0f64..x_end, 0f64..y_end)?;

    let labels: Vec<String> = series
        .points
        .iter()
        .map(|(bucket, _)| bucket.to_string())
        .collect();

    // Thin the labels so long histories stay readable
    let step = (labels.len() / MAX_X_LABELS).max(1);
    let x_label_formatter = move |x: &f64| {
        if *x < 0.0 {
            return String::new();
        }
        let idx = *x as usize;
        if idx >= labels.len() {
            return String::new();
        }
        if idx == 0 || idx == labels.len() - 1 || idx % step == 0 {
            labels[idx].clone()
        } else {
            String::new()
        }
    };

    chart_builder
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Number of Commits")
        .light_line_style(theme.grid_color)
        .bold_line_style(theme.major_grid_color)
        .axis_style(theme.axis_color)
        .label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .x_labels(series.len().clamp(1, MAX_X_LABELS))
        .x_label_formatter(&x_label_formatter)
        // Rotate x labels for better readability
        .x_label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color)
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        )
        .y_label_formatter(&|y| format!("{y:.0}"))
        .draw()?;

    // An empty series still presents as a valid, blank chart
    if series.is_empty() {
        return Ok(());
    }

    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, count))| (i as f64, *count as f64))
        .collect();

    chart_builder.draw_series(LineSeries::new(
        points.clone(),
        theme.line_color.stroke_width(style.line_width),
    ))?;

    // Point marker at every sample
    chart_builder.draw_series(points.iter().map(|&(x, y)| {
        Circle::new((x, y), style.marker_size, theme.line_color.filled())
    }))?;

    Ok(())
}

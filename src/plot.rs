//! Chart rendering for benchmark results.

use crate::data::BenchmarkPoint;
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

// 10x6 inch figure rasterized at 300 DPI
const WIDTH_PX: u32 = 3000;
const HEIGHT_PX: u32 = 1800;

const CAPTION: &str = "Hybrid MergeSort: threshold s vs time";
const X_LABEL: &str = "s (insertion threshold)";
const Y_LABEL: &str = "Time to sort (ms)";

/// Pad a value range by 5% on each side so points don't sit on the frame.
///
/// An empty iterator falls back to 0..1, and a degenerate span (single point
/// or constant column) gets a synthetic pad, so the chart always has a valid
/// coordinate range to build on.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if min > max {
        return 0.0..1.0;
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (min.abs() * 0.05).max(0.5)
    };
    (min - pad)..(max + pad)
}

/// Render the threshold-vs-time chart to a PNG file.
///
/// Draws one line series with a circular marker at each point, in file
/// order. The PNG is encoded in one shot at `present()`, so a failure
/// before that leaves no file behind. An empty slice still produces a
/// complete chart frame (grid, labels, caption) with no series points.
pub fn render_chart<P: AsRef<Path>>(points: &[BenchmarkPoint], path: P) -> Result<()> {
    let path = path.as_ref();
    let x_range = axis_range(points.iter().map(|p| p.s));
    let y_range = axis_range(points.iter().map(|p| p.time_ms));

    let root = BitMapBackend::new(path, (WIDTH_PX, HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CAPTION, ("sans-serif", 64))
        .margin(30)
        .x_label_area_size(110)
        .y_label_area_size(140)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style(("sans-serif", 44))
        .label_style(("sans-serif", 34))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().map(|p| (p.s, p.time_ms)),
        BLUE.stroke_width(4),
    ))?;

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.s, p.time_ms), 10, BLUE.filled())),
    )?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    Ok(())
}

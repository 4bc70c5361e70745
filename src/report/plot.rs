use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use crate::stats::density::{gaussian_kde, histogram_density};
use crate::stats::entropy::SiteEntropy;

const DENSITY_SIZE: (u32, u32) = (1400, 700);
const CONSERVATION_SIZE: (u32, u32) = (3000, 1500);
const BIN_COUNT: usize = 30;
const KDE_POINTS: usize = 200;

/// Side-by-side density panels of forward and reverse normalized bit scores.
pub fn plot_score_densities(path: &Path, forward: &[f64], reverse: &[f64]) -> Result<()> {
    let root = BitMapBackend::new(path, DENSITY_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (left, right) = root.split_horizontally(DENSITY_SIZE.0 / 2);
    draw_density_panel(&left, forward, "forward normalised bitscores", &BLUE)?;
    draw_density_panel(&right, reverse, "reverse normalised bitscores", &GREEN)?;

    root.present()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// One histogram-plus-smoothed-curve panel.
fn draw_density_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    values: &[f64],
    label: &str,
    color: &RGBColor,
) -> Result<()> {
    let bins = histogram_density(values, BIN_COUNT);
    let kde = gaussian_kde(values, KDE_POINTS);

    let x_min = kde.first().map(|&(x, _)| x).unwrap_or(0.0);
    let x_max = kde.last().map(|&(x, _)| x).unwrap_or(1.0);
    let y_max = bins
        .iter()
        .map(|b| b.density)
        .chain(kde.iter().map(|&(_, y)| y))
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(label)
        .y_desc("density")
        .draw()?;

    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.start, 0.0), (b.end, b.density)], color.mix(0.4).filled())
    }))?;
    chart.draw_series(LineSeries::new(kde, color.stroke_width(2)))?;
    Ok(())
}

/// Entropy-by-position line plot with each minimal-entropy region shaded as
/// a translucent vertical span.
pub fn plot_conservation(
    path: &Path,
    sites: &[SiteEntropy],
    regions: &[(usize, usize)],
) -> Result<()> {
    let root = BitMapBackend::new(path, CONSERVATION_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // .max(1) keeps the axis non-degenerate for a single-column alignment
    let x_max = sites.iter().map(|s| s.position).max().unwrap_or(1).max(1);
    let y_max = sites.iter().map(|s| s.entropy).fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .caption("Per-site sequence conservation of MSA", ("sans-serif", 50))
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(0.0..x_max as f64, 0.0..y_max)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Sequence position")
        .y_desc("Shannon entropy")
        .label_style(("sans-serif", 28))
        .axis_desc_style(("sans-serif", 32))
        .draw()?;

    // Spans first, so the entropy line stays on top of them
    let span_color = RGBColor(173, 216, 230).mix(0.5); // lightblue
    chart.draw_series(regions.iter().map(|&(start, end)| {
        Rectangle::new(
            [(start as f64, 0.0), (end as f64, y_max)],
            span_color.filled(),
        )
    }))?;

    chart.draw_series(LineSeries::new(
        sites.iter().map(|s| (s.position as f64, s.entropy)),
        &BLUE,
    ))?;

    root.present()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

//! Chart drawing with plotters
//!
//! Draws one `ChartSpec` to a PNG buffer. Bars are filled rectangles per
//! category; line series are an optional area fill plus a stroked line.
//! Multi-series bars on a stacked x axis share the category slot and draw
//! back-to-front so earlier series stay visible; line-overridden series
//! (the bankruptcy score) draw on top of the bars.
//!
//! The bitmap backend encodes the PNG when the drawing area is presented,
//! so rendering goes through a temp file that is read back and removed.

use crate::dashboard::error::{DashboardError, Result};
use crate::dashboard::spec::{ChartKind, ChartSpec, Rgba};
use plotters::prelude::*;

/// Render a chart spec to PNG bytes
pub fn render_chart(spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>> {
    let temp_path = std::env::temp_dir().join(format!(
        "findash_{}_{}.png",
        std::process::id(),
        spec.panel_id
    ));
    let path_str = temp_path.to_string_lossy().to_string();

    draw_chart(spec, &path_str, width, height)
        .map_err(|e| DashboardError::Render(format!("panel '{}': {}", spec.panel_id, e)))?;

    let png = std::fs::read(&temp_path)?;
    std::fs::remove_file(&temp_path)?;
    Ok(png)
}

fn color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

fn draw_chart(
    spec: &ChartSpec,
    path: &str,
    width: u32,
    height: u32,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = spec.n_categories();
    let x_max = if n == 0 { 0.5 } else { n as f64 - 0.5 };
    let (y_min, y_max) = y_range(spec);

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)?;

    let labels = &spec.labels;
    let grid = RGBColor(225, 225, 225);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.clamp(1, 24))
        .y_labels(8)
        .light_line_style(ShapeStyle::from(&grid).stroke_width(1))
        .x_label_formatter(&|x: &f64| {
            // Category labels sit at integer positions
            let i = x.round();
            if (x - i).abs() > 0.25 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .draw()?;

    // Bars grow from the zero line when it is in range
    let baseline = 0f64.clamp(y_min, y_max);

    let bar_series: Vec<&crate::dashboard::spec::Series> = spec
        .series
        .iter()
        .filter(|s| s.kind(spec.kind) == ChartKind::Bar)
        .collect();
    let n_bars = bar_series.len().max(1) as f64;

    for (j, s) in bar_series.iter().enumerate().rev() {
        // Stacked x axis: every series shares the full category slot.
        // Otherwise the slot is divided into side-by-side groups.
        let (lo, hi) = if spec.axis.x_stacked {
            (-0.35, 0.35)
        } else {
            let slot = 0.7 / n_bars;
            (-0.35 + j as f64 * slot, -0.35 + (j as f64 + 1.0) * slot)
        };

        let fill = color(s.fill);
        let rects = s.values.iter().enumerate().map(|(i, &v)| {
            let x = i as f64;
            Rectangle::new([(x + lo, baseline), (x + hi, v)], fill.filled())
        });
        chart
            .draw_series(rects)?
            .label(s.label.clone())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled()));
    }

    for s in &spec.series {
        if s.kind(spec.kind) != ChartKind::Line {
            continue;
        }
        let fill = color(s.fill);
        let border = color(s.border);
        let points: Vec<(f64, f64)> = s
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();

        if s.filled {
            chart.draw_series(AreaSeries::new(points.clone(), baseline, fill.filled()))?;
        }
        chart
            .draw_series(LineSeries::new(points, border.stroke_width(2)))?
            .label(s.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 12, y)], border.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&RGBColor(180, 180, 180))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Y-axis range with padding
///
/// Charts with no data at all still render, on a default range.
fn y_range(spec: &ChartSpec) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in &spec.series {
        for &v in &s.values {
            min = min.min(v);
            max = max.max(v);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 100.0);
    }

    if spec.axis.begin_at_zero {
        min = min.min(0.0);
    }

    let padding = ((max - min) * 0.1).max(1.0);
    let lo = if spec.axis.begin_at_zero && min >= 0.0 {
        0.0
    } else {
        min - padding
    };
    (lo, max + padding)
}

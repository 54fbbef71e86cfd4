// src/export/chart.rs

use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_profitability};
use crate::utils::formatting::{pad_right, rate};
use std::io;
use std::path::Path;
use svg::{
    Document,
    node::element::{Line, Rectangle, Text},
};
use unicode_width::UnicodeWidthStr;

/// Terminal bar width for the largest absolute value.
const BAR_WIDTH: usize = 40;

/// One bar per project: lifetime profitability.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_report(report: &Report) -> Self {
        Self {
            labels: report.rows.iter().map(|r| r.project.clone()).collect(),
            values: report.rows.iter().map(|r| r.profitability).collect(),
        }
    }

    fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Horizontal bars drawn with block characters, colored by sign.
pub fn render_terminal(series: &ChartSeries, currency: &str) -> String {
    let max = series.max_abs();
    let label_w = series
        .labels
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, value) in series.labels.iter().zip(&series.values) {
        let len = if max > 0.0 {
            ((value.abs() / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let glyph = if *value < 0.0 { "░" } else { "█" };
        out.push_str(&format!(
            "{}  {}{}{} {}\n",
            pad_right(label, label_w),
            color_for_profitability(*value),
            glyph.repeat(len),
            RESET,
            rate(*value, currency),
        ));
    }
    out
}

fn bar_color(value: f64) -> &'static str {
    if value > 0.0 {
        "#2e7d32"
    } else if value < 0.0 {
        "#c62828"
    } else {
        "#9e9e9e"
    }
}

/// Vertical bar chart around a zero baseline.
pub(crate) fn build_svg(series: &ChartSeries, title: &str, currency: &str) -> Document {
    let bar_w = 60.0;
    let gap = 30.0;
    let plot_h = 300.0;
    let margin = 40.0;
    let label_h = 60.0;

    let n = series.values.len().max(1) as f64;
    let fwidth = n * (bar_w + gap) + gap;

    let max_pos = series.values.iter().fold(0.0_f64, |m, v| m.max(*v));
    let max_neg = series.values.iter().fold(0.0_f64, |m, v| m.max(-*v));
    let span = (max_pos + max_neg).max(1.0);
    let scale = plot_h / span;
    let baseline = max_pos * scale;

    let mut document = Document::new()
        .set(
            "viewBox",
            (-margin, -margin, fwidth + 2.0 * margin, plot_h + label_h + 2.0 * margin),
        )
        .add(
            Text::new()
                .set("x", 0.0)
                .set("y", -margin / 2.0)
                .set("font-family", "Helvetica, Arial, sans-serif")
                .set("font-size", 16)
                .add(svg::node::Text::new(title)),
        );

    for (i, (label, value)) in series.labels.iter().zip(&series.values).enumerate() {
        let x = gap + i as f64 * (bar_w + gap);
        let h = value.abs() * scale;
        let y = if *value >= 0.0 { baseline - h } else { baseline };

        document = document
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", bar_w)
                    .set("height", h)
                    .set("fill", bar_color(*value)),
            )
            .add(
                Text::new()
                    .set("x", x + bar_w / 2.0)
                    .set("y", if *value >= 0.0 { y - 4.0 } else { y + h + 14.0 })
                    .set("text-anchor", "middle")
                    .set("font-size", 11)
                    .add(svg::node::Text::new(rate(*value, currency))),
            )
            .add(
                Text::new()
                    .set("x", x + bar_w / 2.0)
                    .set("y", plot_h + label_h / 2.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 11)
                    .add(svg::node::Text::new(label.as_str())),
            );
    }

    document.add(
        Line::new()
            .set("x1", 0.0)
            .set("x2", fwidth)
            .set("y1", baseline)
            .set("y2", baseline)
            .set("stroke", "black")
            .set("stroke-width", 1.5),
    )
}

pub(crate) fn export_report_svg(report: &Report, currency: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting chart to SVG: {}", path.display()));

    let series = ChartSeries::from_report(report);
    let document = build_svg(&series, &report.title(), currency);

    svg::save(path, &document)
        .map_err(|e| AppError::from(io::Error::other(format!("SVG export error: {e}"))))?;

    notify_export_success("SVG", path);
    Ok(())
}

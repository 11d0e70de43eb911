//! Inline SVG bar chart for recent result scores.

use leptos::prelude::*;

#[cfg(test)]
#[path = "simple_chart_test.rs"]
mod simple_chart_test;

const CHART_WIDTH: f64 = 320.0;
const CHART_HEIGHT: f64 = 120.0;
const BAR_GAP: f64 = 6.0;

/// Bar geometry as `(x, y, width, height)` within the chart viewbox.
///
/// Bars are normalized against the largest value so the tallest bar always
/// fills the chart. All-zero input yields zero-height bars rather than NaN.
#[allow(clippy::cast_precision_loss)]
pub fn bar_geometry(values: &[f64]) -> Vec<(f64, f64, f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let count = values.len() as f64;
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let bar_width = (CHART_WIDTH - BAR_GAP * (count - 1.0)) / count;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let height = if max > 0.0 {
                (v.max(0.0) / max) * CHART_HEIGHT
            } else {
                0.0
            };
            let x = i as f64 * (bar_width + BAR_GAP);
            (x, CHART_HEIGHT - height, bar_width, height)
        })
        .collect()
}

/// Minimal bar chart; one bar per value, labelled by tooltip only.
#[component]
pub fn SimpleChart(values: Vec<f64>, labels: Vec<String>) -> impl IntoView {
    let bars = bar_geometry(&values);
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    view! {
        <svg class="simple-chart" viewBox=view_box preserveAspectRatio="none">
            {bars
                .into_iter()
                .zip(labels)
                .map(|((x, y, w, h), label)| {
                    view! {
                        <rect class="simple-chart__bar" x=x y=y width=w height=h>
                            <title>{label}</title>
                        </rect>
                    }
                })
                .collect_view()}
        </svg>
    }
}

//! Activity bar chart, drawn as inline SVG.

use filechain::ActivityPoint;
use leptos::*;

use crate::{CHART_HEIGHT, CHART_WIDTH, UPLOADS_COLOR, VERIFICATIONS_COLOR};

const MARGIN_LEFT: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 24.0;
const MARGIN_TOP: f64 = 8.0;
const GRID_LINES: u32 = 4;

/// One bar of the chart, in viewBox coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: u32,
}

/// Bars and label position of one day.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub label_x: f64,
    pub uploads: BarRect,
    pub verifications: BarRect,
}

/// Largest value of the series, at least 1 so empty series still scale.
pub fn scale_max(series: &[ActivityPoint]) -> u32 {
    series
        .iter()
        .map(|p| p.uploads.max(p.verifications))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Lay out two bars per point inside a `width` x `height` plot.
pub fn layout(series: &[ActivityPoint], width: f64, height: f64) -> Vec<BarGroup> {
    if series.is_empty() {
        return Vec::new();
    }
    let max = f64::from(scale_max(series));
    let slot = width / series.len() as f64;
    let bar_width = slot * 0.35;
    let gap = slot * 0.05;

    let bar = |x: f64, value: u32| {
        let h = f64::from(value) / max * height;
        BarRect {
            x,
            y: height - h,
            width: bar_width,
            height: h,
            value,
        }
    };

    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let start = i as f64 * slot + (slot - 2.0 * bar_width - gap) / 2.0;
            BarGroup {
                label: point.label.clone(),
                label_x: i as f64 * slot + slot / 2.0,
                uploads: bar(start, point.uploads),
                verifications: bar(start + bar_width + gap, point.verifications),
            }
        })
        .collect()
}

#[component]
pub fn ActivityChart(series: &'static [ActivityPoint]) -> impl IntoView {
    let plot_width = CHART_WIDTH - MARGIN_LEFT;
    let plot_height = CHART_HEIGHT - MARGIN_BOTTOM - MARGIN_TOP;
    let max = scale_max(series);
    let groups = layout(series, plot_width, plot_height);

    let grid = (0..=GRID_LINES)
        .map(|i| {
            let y = MARGIN_TOP + plot_height - plot_height * f64::from(i) / f64::from(GRID_LINES);
            let tick = f64::from(max) * f64::from(i) / f64::from(GRID_LINES);
            view! {
                <g class="chart-grid">
                    <line x1=MARGIN_LEFT y1=y x2=CHART_WIDTH y2=y stroke="#e5e7eb" stroke-dasharray="3 3"/>
                    <text x={MARGIN_LEFT - 6.0} y={y + 4.0} text-anchor="end" class="chart-tick">
                        {format!("{}", tick.round())}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = groups
        .into_iter()
        .map(|g| {
            let top = MARGIN_TOP;
            let left = MARGIN_LEFT;
            view! {
                <g class="chart-day">
                    <rect
                        x={left + g.uploads.x}
                        y={top + g.uploads.y}
                        width=g.uploads.width
                        height=g.uploads.height
                        fill=UPLOADS_COLOR
                        aria-label=format!("{} uploads: {}", g.label, g.uploads.value)
                    />
                    <rect
                        x={left + g.verifications.x}
                        y={top + g.verifications.y}
                        width=g.verifications.width
                        height=g.verifications.height
                        fill=VERIFICATIONS_COLOR
                        aria-label=format!("{} verifications: {}", g.label, g.verifications.value)
                    />
                    <text x={left + g.label_x} y={CHART_HEIGHT - 6.0} text-anchor="middle" class="chart-label">
                        {g.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                width="100%"
                height=CHART_HEIGHT
                role="img"
                aria-label="Uploads and verifications per day"
            >
                {grid}
                {bars}
            </svg>
            <div class="chart-legend">
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background:{}", UPLOADS_COLOR)></span>
                    "Uploads"
                </span>
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background:{}", VERIFICATIONS_COLOR)></span>
                    "Verifications"
                </span>
            </div>
        </div>
    }
}

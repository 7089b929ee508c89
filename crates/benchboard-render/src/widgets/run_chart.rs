// Dweve Benchboard - Benchmark Results Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-run throughput line chart for one selected size.

use crate::canvas::{Canvas, TextAlign, Viewport};
use crate::chart::{
    value_ceiling, Margins, PlotArea, AXIS_COLOR, AXIS_LABEL_COLOR, GRID_COLOR, PLOT_BACKGROUND,
    TICK_LABEL_COLOR,
};
use crate::dom::Document;
use crate::page::ids;
use benchboard_core::BenchmarkReport;
use tracing::debug;

const MARGINS: Margins = Margins {
    left: 50.0,
    right: 20.0,
    top: 20.0,
    bottom: 40.0,
};

pub const FONT: &str = "12px \"JetBrains Mono\", monospace";
const LINE_WIDTH: f64 = 2.0;
const DOT_RADIUS: f64 = 3.0;
const FALLBACK_COLOR: &str = "#555";

/// Horizontal distance between consecutive runs.
pub fn step_width(plot_width: f64, runs: usize) -> f64 {
    if runs > 1 {
        plot_width / (runs - 1) as f64
    } else {
        plot_width
    }
}

/// Resize `canvas` for `viewport` and draw the samples of `size`.
pub fn draw_run_chart(
    canvas: &mut Canvas,
    report: &BenchmarkReport,
    size: &str,
    viewport: &Viewport,
) {
    canvas.resize(viewport);

    let plot = PlotArea::new(viewport.width, viewport.height, MARGINS);
    let versions = report.versions();
    let max = value_ceiling(
        versions
            .iter()
            .flat_map(|v| v.samples(size).iter().copied()),
    );

    canvas.fill_rect(plot.left, plot.top, plot.width, plot.height, PLOT_BACKGROUND);
    for (y, label) in plot.gridlines(max) {
        canvas.stroke_line((plot.left, y), (plot.right(), y), GRID_COLOR, 1.0);
        canvas.fill_text(
            label.to_string(),
            plot.left - 8.0,
            y + 4.0,
            TICK_LABEL_COLOR,
            FONT,
            TextAlign::Right,
            0.0,
        );
    }
    canvas.stroke_line(
        (plot.left, plot.bottom()),
        (plot.right(), plot.bottom()),
        AXIS_COLOR,
        1.0,
    );

    let step = step_width(plot.width, report.max_run_count(size));
    for version in &versions {
        let color = version.color().unwrap_or(FALLBACK_COLOR);
        let points: Vec<(f64, f64)> = version
            .samples(size)
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_finite())
            .map(|(run, &value)| (plot.left + run as f64 * step, plot.y_for(value, max)))
            .collect();

        canvas.stroke_path(points.clone(), color, LINE_WIDTH);
        for (x, y) in points {
            canvas.fill_circle(x, y, DOT_RADIUS, color);
        }
    }

    canvas.fill_text(
        "Run index",
        plot.left + plot.width / 2.0,
        viewport.height - 12.0,
        AXIS_LABEL_COLOR,
        FONT,
        TextAlign::Center,
        0.0,
    );
    canvas.fill_text(
        "MB/s",
        16.0,
        plot.top + plot.height / 2.0,
        AXIS_LABEL_COLOR,
        FONT,
        TextAlign::Center,
        -90.0,
    );
}

/// Redraw the `#run-chart` canvas. No-op without a canvas mount point.
pub fn render_run_chart(
    doc: &mut Document,
    report: &BenchmarkReport,
    size: &str,
    viewport: &Viewport,
) {
    let Some(element) = doc.element_by_id_mut(ids::RUN_CHART) else {
        return;
    };
    let Some(canvas) = element.surface_mut() else {
        return;
    };
    draw_run_chart(canvas, report, size, viewport);
    let (width, height) = (canvas.width(), canvas.height());
    element.set_attr("width", width);
    element.set_attr("height", height);
    debug!(size, width, height, "rendered run chart");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawOp;
    use crate::page::host_document;
    use serde_json::json;

    fn report() -> BenchmarkReport {
        BenchmarkReport::from_value(json!({
            "sizes": ["1K", "8K"],
            "versions": {
                "ref_c": { "label": "Ref C", "sizes": { "1K": [10, 20, 30], "8K": [200, 100] } },
                "go_purego": { "label": "Go purego", "sizes": { "1K": [5], "8K": [50, 75] } }
            }
        }))
        .unwrap()
    }

    fn paths(canvas: &Canvas) -> Vec<(&[(f64, f64)], &str)> {
        canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokePath {
                    points,
                    color,
                    width,
                } if *width == LINE_WIDTH => Some((points.as_slice(), color.as_str())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_step_width() {
        assert_eq!(step_width(830.0, 0), 830.0);
        assert_eq!(step_width(830.0, 1), 830.0);
        assert_eq!(step_width(830.0, 2), 830.0);
        assert_eq!(step_width(830.0, 3), 415.0);
    }

    #[test]
    fn test_backing_store_scaled_by_ratio() {
        let mut canvas = Canvas::default();
        draw_run_chart(&mut canvas, &report(), "1K", &Viewport::new(900.0, 360.0, 2.0));
        assert_eq!((canvas.width(), canvas.height()), (1800, 720));
        assert_eq!(canvas.css_size(), (900.0, 360.0));
    }

    #[test]
    fn test_uses_only_selected_size() {
        let mut canvas = Canvas::default();
        draw_run_chart(&mut canvas, &report(), "8K", &Viewport::new(900.0, 360.0, 1.0));

        // Plot 830 x 300 from (50, 20); max sample 200.
        let lines = paths(&canvas);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].1, "#1f7a8c");
        assert_eq!(lines[0].0, [(50.0, 20.0), (880.0, 170.0)]);
        assert_eq!(lines[1].1, "#4a7c59");
        assert_eq!(lines[1].0, [(50.0, 245.0), (880.0, 207.5)]);

        let dots = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
            .count();
        assert_eq!(dots, 4);
    }

    #[test]
    fn test_single_sample_version_gets_dot_only() {
        let mut canvas = Canvas::default();
        draw_run_chart(&mut canvas, &report(), "1K", &Viewport::new(900.0, 360.0, 1.0));
        // Three ref_c runs draw a line; the single go_purego run is a lone dot.
        assert_eq!(paths(&canvas).len(), 1);
        let dots = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
            .count();
        assert_eq!(dots, 4);
    }

    #[test]
    fn test_axis_titles() {
        let mut canvas = Canvas::default();
        draw_run_chart(&mut canvas, &report(), "1K", &Viewport::new(900.0, 360.0, 1.0));
        let titles: Vec<_> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText {
                    text, x, y, rotation, ..
                } if text.chars().any(char::is_alphabetic) => Some((text.as_str(), *x, *y, *rotation)),
                _ => None,
            })
            .collect();
        assert_eq!(
            titles,
            [("Run index", 465.0, 348.0, 0.0), ("MB/s", 16.0, 170.0, -90.0)]
        );
    }

    #[test]
    fn test_render_sets_canvas_attributes() {
        let mut doc = host_document("Bench");
        render_run_chart(&mut doc, &report(), "1K", &Viewport::new(640.0, 300.0, 1.5));
        let element = doc.element_by_id(ids::RUN_CHART).unwrap();
        assert_eq!(element.attr("width"), Some("960"));
        assert_eq!(element.attr("height"), Some("450"));

        let first = element.surface().unwrap().ops().len();
        render_run_chart(&mut doc, &report(), "1K", &Viewport::new(640.0, 300.0, 1.5));
        let again = doc.element_by_id(ids::RUN_CHART).unwrap();
        assert_eq!(again.surface().unwrap().ops().len(), first);
    }
}

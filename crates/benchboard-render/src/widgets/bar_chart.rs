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

//! Grouped average-throughput bar chart.
//!
//! One group per declared size, one bar per present version inside each
//! group. Geometry is computed by [`layout_bars`] independently of the SVG
//! output so it can be inspected directly.

use crate::chart::{
    value_ceiling, Margins, PlotArea, AXIS_COLOR, AXIS_LABEL_COLOR, GRID_COLOR, PLOT_BACKGROUND,
    TICK_LABEL_COLOR,
};
use crate::dom::{Document, Element};
use crate::page::ids;
use benchboard_core::{BenchmarkReport, Stats, VersionKey};
use tracing::debug;

pub const WIDTH: f64 = 900.0;
pub const HEIGHT: f64 = 420.0;

const MARGINS: Margins = Margins {
    left: 60.0,
    right: 20.0,
    top: 20.0,
    bottom: 50.0,
};

/// Horizontal padding at both ends of each size group.
const GROUP_GAP: f64 = 8.0;
/// Space left between adjacent bars within a group.
const BAR_SPACING: f64 = 4.0;
const BAR_RADIUS: f64 = 4.0;
const FALLBACK_COLOR: &str = "#999";

/// One positioned bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub version: VersionKey,
    /// Index of the size group this bar belongs to.
    pub group: usize,
    pub size: String,
    pub average: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// Computed chart geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub plot: PlotArea,
    /// Value mapped to the full plot height.
    pub max: f64,
    pub group_width: f64,
    pub bars: Vec<Bar>,
}

/// Lay out every (size, version) bar, size-major.
pub fn layout_bars(report: &BenchmarkReport) -> BarLayout {
    let plot = PlotArea::new(WIDTH, HEIGHT, MARGINS);
    let versions = report.versions();
    let sizes = &report.sizes;

    let averages: Vec<Vec<f64>> = sizes
        .iter()
        .map(|size| {
            versions
                .iter()
                .map(|v| Stats::compute(v.samples(size)).avg)
                .collect()
        })
        .collect();
    let max = value_ceiling(averages.iter().flatten().copied());

    let group_width = if sizes.is_empty() {
        plot.width
    } else {
        plot.width / sizes.len() as f64
    };

    let mut bars = Vec::with_capacity(sizes.len() * versions.len());
    if !versions.is_empty() {
        let slot = (group_width - GROUP_GAP * 2.0) / versions.len() as f64;
        for (gi, size) in sizes.iter().enumerate() {
            let group_x = plot.left + gi as f64 * group_width + GROUP_GAP;
            for (vi, version) in versions.iter().enumerate() {
                let average = averages[gi][vi];
                let height = plot.bottom() - plot.y_for(average, max);
                bars.push(Bar {
                    version: version.key,
                    group: gi,
                    size: size.clone(),
                    average,
                    x: group_x + vi as f64 * slot,
                    y: plot.top + (plot.height - height),
                    width: (slot - BAR_SPACING).max(0.0),
                    height,
                    color: version.color().unwrap_or(FALLBACK_COLOR),
                });
            }
        }
    }

    BarLayout {
        plot,
        max,
        group_width,
        bars,
    }
}

/// Draw the chart into `#bar-chart`, replacing its previous contents.
pub fn render_bar_chart(doc: &mut Document, report: &BenchmarkReport) {
    let Some(svg) = doc.element_by_id_mut(ids::BAR_CHART) else {
        return;
    };
    svg.clear_children();
    svg.set_attr("viewBox", format!("0 0 {} {}", WIDTH, HEIGHT));

    let layout = layout_bars(report);
    let plot = layout.plot;
    debug!(bars = layout.bars.len(), max = layout.max, "rendering bar chart");

    svg.append(
        Element::svg("rect")
            .with_attr("x", plot.left)
            .with_attr("y", plot.top)
            .with_attr("width", plot.width)
            .with_attr("height", plot.height)
            .with_attr("fill", PLOT_BACKGROUND),
    );

    for (y, label) in plot.gridlines(layout.max) {
        svg.append(
            Element::svg("line")
                .with_attr("x1", plot.left)
                .with_attr("y1", y)
                .with_attr("x2", plot.right())
                .with_attr("y2", y)
                .with_attr("stroke", GRID_COLOR)
                .with_attr("stroke-width", 1),
        );
        svg.append(
            Element::svg("text")
                .with_attr("x", plot.left - 10.0)
                .with_attr("y", y + 4.0)
                .with_attr("text-anchor", "end")
                .with_attr("font-size", 12)
                .with_attr("fill", TICK_LABEL_COLOR)
                .with_text(label.to_string()),
        );
    }

    for (gi, size) in report.sizes.iter().enumerate() {
        for bar in layout.bars.iter().filter(|b| b.group == gi) {
            let label = report
                .version(bar.version)
                .map(|v| v.label)
                .unwrap_or(bar.version.as_str());
            svg.append(
                Element::svg("rect")
                    .with_class("bar")
                    .with_attr("x", bar.x)
                    .with_attr("y", bar.y)
                    .with_attr("width", bar.width)
                    .with_attr("height", bar.height)
                    .with_attr("rx", BAR_RADIUS)
                    .with_attr("fill", bar.color)
                    .with_child(Element::svg("title").with_text(format!(
                        "{} {}: {:.2} MB/s",
                        label, bar.size, bar.average
                    ))),
            );
        }
        svg.append(
            Element::svg("text")
                .with_attr(
                    "x",
                    plot.left + gi as f64 * layout.group_width + layout.group_width / 2.0,
                )
                .with_attr("y", plot.bottom() + 30.0)
                .with_attr("text-anchor", "middle")
                .with_attr("font-size", 13)
                .with_attr("fill", AXIS_LABEL_COLOR)
                .with_text(size.clone()),
        );
    }

    svg.append(
        Element::svg("line")
            .with_attr("x1", plot.left)
            .with_attr("y1", plot.bottom())
            .with_attr("x2", plot.right())
            .with_attr("y2", plot.bottom())
            .with_attr("stroke", AXIS_COLOR)
            .with_attr("stroke-width", 1.2),
    );
}

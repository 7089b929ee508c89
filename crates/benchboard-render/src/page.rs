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

//! Host page template and static HTML export.

use crate::canvas::Canvas;
use crate::dashboard::Dashboard;
use crate::dom::{Document, Element};
use crate::widgets::run_chart::draw_run_chart;
use tracing::debug;

/// Mount point ids provided by the host page.
pub mod ids {
    pub const SPECS_GRID: &str = "specs-grid";
    pub const META_LINE: &str = "meta-line";
    pub const GENERATED_AT: &str = "generated-at";
    pub const SUMMARY_CARDS: &str = "summary-cards";
    pub const LEGEND: &str = "legend";
    pub const BAR_CHART: &str = "bar-chart";
    pub const SIZE_TABS: &str = "size-tabs";
    pub const STATS_TABLE: &str = "stats-table";
    pub const RUN_CHART: &str = "run-chart";

    pub const ALL: [&str; 9] = [
        SPECS_GRID,
        META_LINE,
        GENERATED_AT,
        SUMMARY_CARDS,
        LEGEND,
        BAR_CHART,
        SIZE_TABS,
        STATS_TABLE,
        RUN_CHART,
    ];
}

pub const DEFAULT_TITLE: &str = "Benchmark Results";

pub const RUN_PANEL_CLASS: &str = "run-panel";

/// Switches the pre-rendered run chart panels when a tab is clicked.
const TAB_SCRIPT: &str = r#"
document.querySelectorAll('#size-tabs .tab').forEach(function (tab) {
  tab.addEventListener('click', function () {
    var index = tab.getAttribute('data-index');
    document.querySelectorAll('#size-tabs .tab').forEach(function (t) {
      t.classList.toggle('active', t === tab);
    });
    document.querySelectorAll('#run-chart .run-panel').forEach(function (panel) {
      panel.hidden = panel.getAttribute('data-index') !== index;
    });
  });
});
"#;

fn section(heading: &str) -> Element {
    Element::new("section").with_child(Element::new("h2").with_text(heading))
}

/// Build the host page with every mount point empty.
pub fn host_document(title: &str) -> Document {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_text(title))
        .with_child(Element::new("style").with_text(include_str!("styles.css")));

    let main = Element::new("main")
        .with_child(
            Element::new("p")
                .with_class("meta")
                .with_child(Element::new("span").with_id(ids::META_LINE)),
        )
        .with_child(
            section("Machine")
                .with_child(Element::new("div").with_id(ids::SPECS_GRID).with_class("spec-grid")),
        )
        .with_child(
            section("Summary").with_child(
                Element::new("div")
                    .with_id(ids::SUMMARY_CARDS)
                    .with_class("summary-grid"),
            ),
        )
        .with_child(
            section("Average throughput")
                .with_child(Element::new("div").with_id(ids::LEGEND).with_class("legend"))
                .with_child(
                    Element::svg("svg")
                        .with_id(ids::BAR_CHART)
                        .with_class("chart")
                        .with_attr("role", "img")
                        .with_attr("aria-label", "Average throughput per size"),
                ),
        )
        .with_child(
            section("Per-run throughput")
                .with_child(Element::new("div").with_id(ids::SIZE_TABS).with_class("tabs"))
                .with_child(Element::canvas().with_id(ids::RUN_CHART).with_class("chart")),
        )
        .with_child(
            section("Statistics").with_child(Element::new("table").with_id(ids::STATS_TABLE)),
        )
        .with_child(
            Element::new("p")
                .with_class("meta")
                .with_child("Generated at ")
                .with_child(Element::new("span").with_id(ids::GENERATED_AT)),
        );

    let body = Element::new("body")
        .with_child(Element::new("header").with_child(Element::new("h1").with_text(title)))
        .with_child(main);

    Document::new(
        Element::new("html")
            .with_attr("lang", "en")
            .with_child(head)
            .with_child(body),
    )
}

/// Serialize a mounted dashboard as a standalone HTML page.
///
/// The run chart canvas becomes one inline SVG panel per size, with only
/// the selected size visible, and a small script switches panels on tab
/// clicks.
pub fn export_html(dashboard: &Dashboard) -> String {
    let mut doc = dashboard.document().clone();

    if let (Some(report), Some(tabs)) = (dashboard.report(), dashboard.tabs()) {
        let viewport = dashboard.viewport();
        let mut panels = Element::new("div")
            .with_id(ids::RUN_CHART)
            .with_class("run-panels");

        for (index, size) in tabs.sizes().iter().enumerate() {
            let mut canvas = Canvas::default();
            draw_run_chart(&mut canvas, report, size, &viewport);
            let mut panel = Element::new("div")
                .with_class(RUN_PANEL_CLASS)
                .with_attr("data-index", index)
                .with_attr("data-size", size)
                .with_child(canvas.to_svg().with_class("chart"));
            if tabs.current() != Some(size.as_str()) {
                panel.set_attr("hidden", "");
            }
            panels.append(panel);
        }

        debug!(panels = tabs.sizes().len(), "exporting run chart panels");
        doc.root_mut().replace_by_id(ids::RUN_CHART, panels);
        if let Some(body) = doc.root_mut().find_by_tag_mut("body") {
            body.append(Element::new("script").with_text(TAB_SCRIPT));
        }
    }

    doc.to_html()
}

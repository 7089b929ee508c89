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

//! Summary cards and colour legend.

use crate::dom::{Document, Element};
use crate::page::ids;
use benchboard_core::{BenchmarkReport, Stats};

const CARD_FALLBACK_COLOR: &str = "#ccc";
const SWATCH_FALLBACK_COLOR: &str = "#999";

/// One card per present version, averaging its largest-size samples.
pub fn render_summary(doc: &mut Document, report: &BenchmarkReport) {
    let Some(grid) = doc.element_by_id_mut(ids::SUMMARY_CARDS) else {
        return;
    };
    grid.clear_children();

    let size = report.largest_size();
    for version in report.versions() {
        let stats = Stats::compute(size.map(|s| version.samples(s)).unwrap_or(&[]));
        let color = version.color().unwrap_or(CARD_FALLBACK_COLOR);

        let mut card = Element::new("div")
            .with_class("summary-card")
            .with_attr("data-version", version.key)
            .with_child(Element::new("h3").with_text(format!(
                "{} ({} avg)",
                version.label,
                size.unwrap_or("n/a")
            )))
            .with_child(
                Element::new("div")
                    .with_class("value")
                    .with_text(format!("{:.2} MB/s", stats.avg)),
            );
        card.set_style("border-top", &format!("4px solid {}", color));
        grid.append(card);
    }
}

/// One swatch per present version, matching the card colours.
pub fn render_legend(doc: &mut Document, report: &BenchmarkReport) {
    let Some(legend) = doc.element_by_id_mut(ids::LEGEND) else {
        return;
    };
    legend.clear_children();

    for version in report.versions() {
        let mut swatch = Element::new("span").with_class("legend-swatch");
        swatch.set_style(
            "background",
            version.color().unwrap_or(SWATCH_FALLBACK_COLOR),
        );
        legend.append(
            Element::new("div")
                .with_class("legend-item")
                .with_child(swatch)
                .with_child(Element::new("span").with_text(version.label)),
        );
    }
}

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

//! Per-version, per-size statistics table.

use crate::dom::{Document, Element};
use crate::page::ids;
use benchboard_core::{BenchmarkReport, Stats};

pub const HEADERS: [&str; 6] = ["Version", "Size", "Avg MB/s", "Min", "Max", "Std"];

/// Table rows, version-major, formatted to two decimals.
pub fn table_rows(report: &BenchmarkReport) -> Vec<[String; 6]> {
    let mut rows = Vec::new();
    for version in report.versions() {
        for size in &report.sizes {
            let stats = Stats::compute(version.samples(size));
            rows.push([
                version.label.to_string(),
                size.clone(),
                format!("{:.2}", stats.avg),
                format!("{:.2}", stats.min),
                format!("{:.2}", stats.max),
                format!("{:.2}", stats.std),
            ]);
        }
    }
    rows
}

/// Rebuild `#stats-table` from scratch.
pub fn render_table(doc: &mut Document, report: &BenchmarkReport) {
    let Some(table) = doc.element_by_id_mut(ids::STATS_TABLE) else {
        return;
    };

    let mut head_row = Element::new("tr");
    for header in HEADERS {
        head_row.append(Element::new("th").with_text(header));
    }

    let mut body = Element::new("tbody");
    for row in table_rows(report) {
        let mut tr = Element::new("tr");
        for cell in row {
            tr.append(Element::new("td").with_text(cell));
        }
        body.append(tr);
    }

    table.clear_children();
    table.append(Element::new("thead").with_child(head_row));
    table.append(body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::host_document;
    use serde_json::json;

    #[test]
    fn test_rows_version_major() {
        let report = BenchmarkReport::from_value(json!({
            "sizes": ["1K", "8K"],
            "versions": {
                "fp_c": { "label": "FP C", "sizes": { "1K": [2, 4, 4, 4, 5, 5, 7, 9] } },
                "ref_c": { "label": "Ref C", "sizes": { "8K": [1.005] } }
            }
        }))
        .unwrap();
        let rows = table_rows(&report);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][..2], ["Ref C".to_string(), "1K".to_string()]);
        assert_eq!(rows[0][2..], ["0.00", "0.00", "0.00", "0.00"]);
        assert_eq!(rows[1][1], "8K");
        assert_eq!(rows[2], ["FP C", "1K", "5.00", "2.00", "9.00", "2.00"]);
    }

    #[test]
    fn test_render_rebuilds() {
        let report = BenchmarkReport::from_value(json!({
            "versions": { "go_asm": { "label": "Go asm", "sizes": { "1M": [900] } } }
        }))
        .unwrap();
        let mut doc = host_document("Bench");
        render_table(&mut doc, &report);
        render_table(&mut doc, &report);

        let table = doc.element_by_id(ids::STATS_TABLE).unwrap();
        let sections: Vec<_> = table.child_elements().map(|e| e.tag()).collect();
        assert_eq!(sections, ["thead", "tbody"]);
        let headers: Vec<_> = table
            .descendants()
            .into_iter()
            .filter(|e| e.tag() == "th")
            .map(|e| e.text_content())
            .collect();
        assert_eq!(headers, HEADERS);
        assert_eq!(doc.elements().iter().filter(|e| e.tag() == "td").count(), 18);
    }
}

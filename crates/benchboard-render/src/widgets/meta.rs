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

//! Run count, commit and generation timestamp.

use crate::dom::Document;
use crate::page::ids;
use benchboard_core::{BenchmarkReport, Scalar};

/// The `Runs: N - Commit: abcdef12` line.
pub fn meta_line(report: &BenchmarkReport) -> String {
    format!(
        "Runs: {} - Commit: {}",
        Scalar::display_or(report.runs.as_ref(), "unknown"),
        report.short_commit().as_deref().unwrap_or("unknown")
    )
}

/// Fill `#meta-line` and `#generated-at`. Each is skipped when absent.
pub fn render_meta(doc: &mut Document, report: &BenchmarkReport) {
    if let Some(line) = doc.element_by_id_mut(ids::META_LINE) {
        line.set_text(meta_line(report));
    }
    if let Some(stamp) = doc.element_by_id_mut(ids::GENERATED_AT) {
        let generated = report
            .generated_at
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("unknown");
        stamp.set_text(generated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::host_document;
    use serde_json::json;

    #[test]
    fn test_meta_line() {
        let report = BenchmarkReport::from_value(json!({
            "runs": 10,
            "git_commit": "9f8e7d6c5b4a39281706"
        }))
        .unwrap();
        assert_eq!(meta_line(&report), "Runs: 10 - Commit: 9f8e7d6c");
        assert_eq!(
            meta_line(&BenchmarkReport::default()),
            "Runs: unknown - Commit: unknown"
        );
    }

    #[test]
    fn test_render_meta() {
        let report =
            BenchmarkReport::from_value(json!({ "generated_at": "2025-03-01T08:30:00Z" })).unwrap();
        let mut doc = host_document("Bench");
        render_meta(&mut doc, &report);
        assert_eq!(
            doc.element_by_id(ids::GENERATED_AT).unwrap().text_content(),
            "2025-03-01T08:30:00Z"
        );
    }
}

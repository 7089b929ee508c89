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

//! Summary command - Print per-version statistics to the terminal

use super::loader_for;
use crate::error::CliError;
use benchboard_core::{BenchmarkReport, Stats};
use colored::Colorize;
use serde_json::json;
use std::path::Path;

struct Row<'a> {
    key: &'a str,
    label: &'a str,
    size: &'a str,
    stats: Stats,
}

fn rows<'a>(report: &'a BenchmarkReport, sizes: &[&'a str]) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    for version in report.versions() {
        for &size in sizes {
            rows.push(Row {
                key: version.key.as_str(),
                label: version.label,
                size,
                stats: Stats::compute(version.samples(size)),
            });
        }
    }
    rows
}

/// Print the statistics table, optionally for a single size.
///
/// # Errors
///
/// Returns `Err` if:
/// - No report can be loaded
/// - `size` is not declared in the report
/// - JSON serialization fails
pub fn summary(data: Option<&Path>, size: Option<&str>, json_output: bool) -> Result<(), CliError> {
    let (report, _) = loader_for(data).try_load()?;

    let sizes: Vec<&str> = match size {
        Some(size) => {
            let declared = report
                .sizes
                .iter()
                .find(|s| s.as_str() == size)
                .ok_or_else(|| CliError::unknown_size(size, &report.sizes))?;
            vec![declared.as_str()]
        }
        None => report.sizes.iter().map(String::as_str).collect(),
    };
    let rows = rows(&report, &sizes);

    if json_output {
        let entries: Vec<_> = rows
            .iter()
            .map(|r| {
                json!({
                    "version": r.key,
                    "label": r.label,
                    "size": r.size,
                    "stats": r.stats,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let runs = report
        .runs
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string());
    println!(
        "{} {} runs - Commit: {}",
        "Benchmark Summary:".bright_blue().bold(),
        runs,
        report.short_commit().unwrap_or_else(|| "unknown".to_string())
    );
    println!();
    println!(
        "{:<12} {:<6} {:>12} {:>12} {:>12} {:>10}",
        "Version".bold(),
        "Size".bold(),
        "Avg MB/s".bold(),
        "Min".bold(),
        "Max".bold(),
        "Std".bold()
    );
    for row in &rows {
        println!(
            "{:<12} {:<6} {:>12.2} {:>12.2} {:>12.2} {:>10.2}",
            row.label, row.size, row.stats.avg, row.stats.min, row.stats.max, row.stats.std
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_follow_version_then_size_order() {
        let report = BenchmarkReport::from_value(json!({
            "sizes": ["1K", "8K"],
            "versions": {
                "go_purego": { "label": "Go purego", "sizes": { "1K": [10, 20] } },
                "ref_c": { "label": "Ref C", "sizes": { "8K": [5] } }
            }
        }))
        .unwrap();
        let rows = rows(&report, &["1K", "8K"]);
        let order: Vec<_> = rows.iter().map(|r| (r.key, r.size)).collect();
        assert_eq!(
            order,
            [("ref_c", "1K"), ("ref_c", "8K"), ("go_purego", "1K"), ("go_purego", "8K")]
        );
        assert_eq!(rows[2].stats.avg, 15.0);
        assert_eq!(rows[0].stats, Stats::default());
    }
}

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

//! Statistics and dashboard rendering benchmarks.

use benchboard_core::{BenchmarkReport, Stats};
use benchboard_render::{export_html, host_document, Dashboard, Event, Viewport};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Map, Value};

/// Deterministic throughput-like samples around `base`.
fn samples(base: f64, runs: usize) -> Vec<f64> {
    let mut state = 0x9e37_79b9_u32;
    (0..runs)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            base + (state % 1000) as f64 / 10.0
        })
        .collect()
}

fn report(runs: usize) -> BenchmarkReport {
    let sizes = ["1K", "8K", "1M"];
    let mut versions = Map::new();
    for (i, (key, label)) in [
        ("ref_c", "Ref C"),
        ("go_asm", "Go asm"),
        ("go_purego", "Go purego"),
        ("fp_c", "FP C"),
    ]
    .iter()
    .enumerate()
    {
        let mut per_size = Map::new();
        for (j, size) in sizes.iter().enumerate() {
            let base = 400.0 * (i + 1) as f64 + 300.0 * j as f64;
            per_size.insert(size.to_string(), json!(samples(base, runs)));
        }
        versions.insert(
            key.to_string(),
            json!({ "label": label, "sizes": Value::Object(per_size) }),
        );
    }
    BenchmarkReport::from_value(json!({
        "runs": runs,
        "sizes": sizes,
        "versions": Value::Object(versions),
    }))
    .expect("generated report is valid")
}

// ============================================================================
// Statistics
// ============================================================================

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    for runs in [10usize, 1_000, 100_000] {
        let data = samples(1500.0, runs);
        group.throughput(Throughput::Elements(runs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(runs), &data, |b, data| {
            b.iter(|| Stats::compute(black_box(data)))
        });
    }
    group.finish();
}

// ============================================================================
// Dashboard
// ============================================================================

fn bench_mount(c: &mut Criterion) {
    let mut group = c.benchmark_group("mount");
    for runs in [10usize, 100, 1_000] {
        let report = report(runs);
        group.bench_with_input(BenchmarkId::from_parameter(runs), &report, |b, report| {
            b.iter(|| {
                Dashboard::mount(
                    host_document("Bench"),
                    Some(black_box(report.clone())),
                    Viewport::default(),
                )
            })
        });
    }
    group.finish();
}

fn bench_tab_switch(c: &mut Criterion) {
    let mut dashboard = Dashboard::mount(host_document("Bench"), Some(report(100)), Viewport::default());
    let sizes = ["1K", "8K", "1M"];
    let mut next = 0;
    c.bench_function("tab_switch", |b| {
        b.iter(|| {
            next = (next + 1) % sizes.len();
            dashboard.dispatch(Event::TabClick(sizes[next].to_string()))
        })
    });
}

fn bench_export(c: &mut Criterion) {
    let dashboard = Dashboard::mount(host_document("Bench"), Some(report(100)), Viewport::default());
    c.bench_function("export_html", |b| b.iter(|| export_html(black_box(&dashboard))));
}

criterion_group!(benches, bench_stats, bench_mount, bench_tab_switch, bench_export);
criterion_main!(benches);

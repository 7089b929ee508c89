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

//! Machine and toolchain spec grid.

use crate::dom::{Document, Element};
use crate::page::ids;
use benchboard_core::{BenchmarkReport, Scalar};

const UNKNOWN: &str = "unknown";

/// Label/value pairs shown in the spec grid, in display order.
pub fn spec_entries(report: &BenchmarkReport) -> Vec<(&'static str, String)> {
    let machine = &report.machine;
    let toolchain = &report.toolchain;
    vec![
        ("OS", Scalar::display_or(machine.os.as_ref(), UNKNOWN)),
        ("CPU", Scalar::display_or(machine.cpu.as_ref(), UNKNOWN)),
        ("Cores", Scalar::display_or(machine.cores.as_ref(), UNKNOWN)),
        ("RAM (GB)", Scalar::display_or(machine.ram_gb.as_ref(), UNKNOWN)),
        ("Go", Scalar::display_or(toolchain.go.as_ref(), UNKNOWN)),
        (
            "GOOS/GOARCH",
            format!(
                "{} / {}",
                Scalar::display_or(toolchain.goos.as_ref(), "?"),
                Scalar::display_or(toolchain.goarch.as_ref(), "?")
            ),
        ),
        (
            "GOMAXPROCS",
            Scalar::display_or(toolchain.gomaxprocs.as_ref(), "default"),
        ),
        ("GCC", Scalar::display_or(toolchain.gcc.as_ref(), UNKNOWN)),
        ("NASM", Scalar::display_or(toolchain.nasm.as_ref(), UNKNOWN)),
    ]
}

/// Render one card per spec entry into `#specs-grid`.
pub fn render_specs(doc: &mut Document, report: &BenchmarkReport) {
    let Some(grid) = doc.element_by_id_mut(ids::SPECS_GRID) else {
        return;
    };
    grid.clear_children();
    for (label, value) in spec_entries(report) {
        grid.append(
            Element::new("div")
                .with_class("spec-card")
                .with_child(Element::new("span").with_text(label))
                .with_child(Element::new("strong").with_text(value)),
        );
    }
}

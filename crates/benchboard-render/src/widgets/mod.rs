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

//! Dashboard widgets.
//!
//! Each widget renders into one mount point of the host document, looked up
//! by id. A missing mount point turns the widget into a silent no-op, and
//! every widget clears its mount before drawing so re-rendering never
//! accumulates elements.
//!
//! - [`specs`]: machine/toolchain spec grid
//! - [`meta`]: run count, commit and generation timestamp
//! - [`summary`]: per-version summary cards and the colour legend
//! - [`bar_chart`]: grouped average-throughput bar chart (SVG)
//! - [`table`]: per-version, per-size statistics table
//! - [`run_chart`]: per-run line chart (canvas)
//! - [`tabs`]: size selector driving the run chart
//! - [`notice`]: the "data unavailable" banner

pub mod bar_chart;
pub mod meta;
pub mod notice;
pub mod run_chart;
pub mod specs;
pub mod summary;
pub mod table;
pub mod tabs;

pub use bar_chart::render_bar_chart;
pub use meta::render_meta;
pub use notice::show_notice;
pub use run_chart::{draw_run_chart, render_run_chart};
pub use specs::render_specs;
pub use summary::{render_legend, render_summary};
pub use table::render_table;
pub use tabs::SizeTabs;

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

//! Benchboard rendering.
//!
//! Renders a [`BenchmarkReport`](benchboard_core::BenchmarkReport) into a
//! host document: machine specs, summary cards, a grouped bar chart, a
//! statistics table and a per-run line chart with size tabs.
//!
//! # Example
//!
//! ```
//! use benchboard_core::BenchmarkReport;
//! use benchboard_render::{export_html, host_document, Dashboard, Event, Viewport};
//!
//! let report = BenchmarkReport::from_json_str(
//!     r#"{"runs": 2, "sizes": ["1K"], "versions": {"ref_c": {"label": "Ref C", "sizes": {"1K": [410.5, 415.0]}}}}"#,
//! ).unwrap();
//!
//! let mut dashboard = Dashboard::mount(host_document("Nightly"), Some(report), Viewport::default());
//! dashboard.dispatch(Event::Resize(Viewport::new(1200.0, 400.0, 2.0)));
//!
//! let html = export_html(&dashboard);
//! assert!(html.contains("Ref C (1K avg)"));
//! ```

pub mod canvas;
pub mod chart;
pub mod dashboard;
pub mod dom;
pub mod page;
pub mod widgets;

pub use canvas::{Canvas, DrawOp, TextAlign, Viewport};
pub use dashboard::{Dashboard, Event, UNAVAILABLE_MESSAGE};
pub use dom::{Document, Element, Node};
pub use page::{export_html, host_document, DEFAULT_TITLE};
pub use widgets::SizeTabs;

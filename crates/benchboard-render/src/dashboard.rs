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

//! Dashboard controller.
//!
//! A [`Dashboard`] owns the host document, the loaded report and the tab
//! state. Mounting runs every widget once in a fixed order; afterwards
//! user interaction arrives as [`Event`]s that are handled to completion
//! one at a time.

use crate::canvas::Viewport;
use crate::dom::Document;
use crate::widgets::{self, SizeTabs};
use benchboard_core::BenchmarkReport;
use tracing::{debug, info, warn};

/// Notice shown when no benchmark report could be loaded.
pub const UNAVAILABLE_MESSAGE: &str =
    "Benchmark data could not be loaded. Make sure data/bench.js or data/bench.json exists.";

/// User interaction with a mounted dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A size tab was clicked.
    TabClick(String),
    /// The host viewport changed size or pixel density.
    Resize(Viewport),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    document: Document,
    report: Option<BenchmarkReport>,
    tabs: Option<SizeTabs>,
    viewport: Viewport,
}

impl Dashboard {
    /// Mount onto `document`.
    ///
    /// With a report every widget renders; without one the page only gets
    /// the unavailable notice.
    pub fn mount(document: Document, report: Option<BenchmarkReport>, viewport: Viewport) -> Self {
        let mut dashboard = Self {
            document,
            report,
            tabs: None,
            viewport,
        };
        if dashboard.report.is_some() {
            dashboard.render();
        } else {
            dashboard.mount_unavailable();
        }
        dashboard
    }

    /// Run the full render sequence. Rendering again yields the same
    /// document.
    pub fn render(&mut self) {
        let Some(report) = self.report.as_ref() else {
            return;
        };
        let doc = &mut self.document;
        debug!(versions = report.versions().len(), sizes = report.sizes.len(), "rendering dashboard");

        widgets::render_specs(doc, report);
        widgets::render_meta(doc, report);
        widgets::render_summary(doc, report);
        widgets::render_legend(doc, report);
        widgets::render_bar_chart(doc, report);
        widgets::render_table(doc, report);

        self.tabs = SizeTabs::setup(doc, report);
        self.redraw_run_chart();
    }

    /// Show the unavailable notice instead of any widget.
    pub fn mount_unavailable(&mut self) {
        warn!("no benchmark report available");
        widgets::show_notice(&mut self.document, UNAVAILABLE_MESSAGE);
    }

    /// Handle one event. Returns `true` when the document changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match event {
            Event::TabClick(size) => {
                let Some(tabs) = self.tabs.as_mut() else {
                    return false;
                };
                if !tabs.select(&mut self.document, &size) {
                    debug!(size = %size, "ignoring click on unknown tab");
                    return false;
                }
                info!(size = %size, "selected size");
                self.redraw_run_chart();
                true
            }
            Event::Resize(viewport) => {
                self.viewport = viewport;
                self.redraw_run_chart()
            }
        }
    }

    fn redraw_run_chart(&mut self) -> bool {
        let (Some(report), Some(size)) = (
            self.report.as_ref(),
            self.tabs.as_ref().and_then(SizeTabs::current),
        ) else {
            return false;
        };
        widgets::render_run_chart(&mut self.document, report, size, &self.viewport);
        true
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn report(&self) -> Option<&BenchmarkReport> {
        self.report.as_ref()
    }

    pub fn tabs(&self) -> Option<&SizeTabs> {
        self.tabs.as_ref()
    }

    /// The currently selected size.
    pub fn selected_size(&self) -> Option<&str> {
        self.tabs.as_ref().and_then(SizeTabs::current)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

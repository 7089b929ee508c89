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

//! Size selector tabs for the run chart.

use crate::dom::{Document, Element};
use crate::page::ids;
use benchboard_core::BenchmarkReport;

pub const TAB_CLASS: &str = "tab";
pub const ACTIVE_CLASS: &str = "active";

/// Tab state: the declared sizes and the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeTabs {
    sizes: Vec<String>,
    current: Option<String>,
}

impl SizeTabs {
    /// Build one button per size into `#size-tabs`, selecting the first.
    ///
    /// Returns `None` when the document has no tab mount point.
    pub fn setup(doc: &mut Document, report: &BenchmarkReport) -> Option<Self> {
        let container = doc.element_by_id_mut(ids::SIZE_TABS)?;
        container.clear_children();

        for (index, size) in report.sizes.iter().enumerate() {
            let mut button = Element::new("button")
                .with_class(TAB_CLASS)
                .with_attr("type", "button")
                .with_attr("data-index", index)
                .with_text(size.clone());
            if index == 0 {
                button.add_class(ACTIVE_CLASS);
            }
            container.append(button);
        }

        Some(Self {
            sizes: report.sizes.clone(),
            current: report.sizes.first().cloned(),
        })
    }

    /// The selected size, if any sizes are declared.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// Select `size`. Returns `false`, leaving state untouched, when the
    /// size has no tab.
    pub fn select(&mut self, doc: &mut Document, size: &str) -> bool {
        match self.sizes.iter().position(|s| s == size) {
            Some(index) => self.select_index(doc, index),
            None => false,
        }
    }

    /// Select the tab at `index`, marking exactly that button active.
    pub fn select_index(&mut self, doc: &mut Document, index: usize) -> bool {
        let Some(size) = self.sizes.get(index) else {
            return false;
        };
        self.current = Some(size.clone());

        if let Some(container) = doc.element_by_id_mut(ids::SIZE_TABS) {
            for (i, tab) in container
                .child_elements_mut()
                .filter(|e| e.has_class(TAB_CLASS))
                .enumerate()
            {
                if i == index {
                    tab.add_class(ACTIVE_CLASS);
                } else {
                    tab.remove_class(ACTIVE_CLASS);
                }
            }
        }
        true
    }
}

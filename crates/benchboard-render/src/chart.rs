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

//! Shared chart geometry: plot areas, value scaling and gridlines.

/// Number of equal value divisions marked by gridlines.
pub const GRID_DIVISIONS: usize = 5;

pub const PLOT_BACKGROUND: &str = "#fffaf2";
pub const GRID_COLOR: &str = "#e5d8c9";
pub const TICK_LABEL_COLOR: &str = "#5a5a5a";
pub const AXIS_LABEL_COLOR: &str = "#3a3a3a";
pub const AXIS_COLOR: &str = "#1b1b1b";

/// Space reserved around the plot for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// The plotting rectangle inside a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            width: width - margins.left - margins.right,
            height: height - margins.top - margins.bottom,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Vertical position of `value` on a linear scale from 0 to `max`.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        self.bottom() - scaled_height(value, max, self.height)
    }

    /// Gridline positions paired with their rounded value labels, top down.
    pub fn gridlines(&self, max: f64) -> Vec<(f64, i64)> {
        (0..=GRID_DIVISIONS)
            .map(|i| {
                let fraction = i as f64 / GRID_DIVISIONS as f64;
                let y = self.top + self.height * fraction;
                (y, (max - max * fraction).round() as i64)
            })
            .collect()
    }
}

/// Scale ceiling for a set of values: their maximum, floored at 1.
///
/// Non-finite values are ignored, so an empty or all-zero set scales
/// against 1 and never divides by zero.
pub fn value_ceiling(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(1.0, f64::max)
}

/// Height of `value` on a linear scale where `max` fills `extent`.
pub fn scaled_height(value: f64, max: f64, extent: f64) -> f64 {
    value / max * extent
}

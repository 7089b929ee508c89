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

//! Commands that read benchmark data.

use crate::commands::{self, RenderOptions};
use crate::error::CliError;
use benchboard_render::{Viewport, DEFAULT_TITLE};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Where to find benchmark data.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Site directory (containing data/bench.js or data/bench.json) or a data file
    ///
    /// Defaults to the current directory.
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum DashboardCommands {
    /// Render the dashboard as a standalone HTML page
    ///
    /// If no benchmark data can be loaded the page is still written and
    /// shows a notice instead of the charts.
    Render {
        #[command(flatten)]
        data: DataArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Run chart width in CSS pixels
        #[arg(long, default_value_t = 900.0)]
        width: f64,

        /// Run chart height in CSS pixels
        #[arg(long, default_value_t = 360.0)]
        height: f64,

        /// Device pixel ratio for the run chart backing store
        #[arg(long, default_value_t = 1.0)]
        dpr: f64,

        /// Page title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
    },

    /// Print per-version statistics for each payload size
    Summary {
        #[command(flatten)]
        data: DataArgs,

        /// Only show this payload size
        #[arg(short, long)]
        size: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check that benchmark data can be loaded
    Validate {
        #[command(flatten)]
        data: DataArgs,
    },
}

impl DashboardCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            DashboardCommands::Render {
                data,
                output,
                width,
                height,
                dpr,
                title,
            } => commands::render(
                data.data.as_deref(),
                output.as_deref(),
                &RenderOptions {
                    title: &title,
                    viewport: Viewport::new(width, height, dpr),
                },
            ),
            DashboardCommands::Summary { data, size, json } => {
                commands::summary(data.data.as_deref(), size.as_deref(), json)
            }
            DashboardCommands::Validate { data } => commands::validate(data.data.as_deref()),
        }
    }
}

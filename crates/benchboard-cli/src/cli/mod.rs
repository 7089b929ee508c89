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

//! CLI command definitions and argument parsing.
//!
//! - [`dashboard`]: commands that read benchmark data (render, summary, validate)
//! - [`utility`]: utility commands (completion)

mod dashboard;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use dashboard::{DashboardCommands, DataArgs};
pub use utility::UtilityCommands;

/// Benchboard - benchmark results dashboard
///
/// Turns a JSON snapshot of throughput measurements into a static HTML
/// dashboard, or summarizes it in the terminal.
///
/// # Examples
///
/// ```bash
/// # Render the dashboard for a site directory containing data/bench.json
/// benchboard render --data site -o site/index.html
///
/// # Print statistics for the 1M payload size
/// benchboard summary --data results.json --size 1M
/// ```
#[derive(Parser)]
#[command(name = "benchboard")]
#[command(author, version, about = "Benchboard - benchmark results dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Dashboard(DashboardCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if loading, rendering or writing output fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Dashboard(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}

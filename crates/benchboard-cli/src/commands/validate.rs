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

//! Validate command - Check that benchmark data loads

use super::loader_for;
use crate::error::CliError;
use benchboard_core::DataSource;
use colored::Colorize;
use std::path::Path;

/// Load the report and print where it came from and what it holds.
///
/// # Errors
///
/// Returns `Err` with the load failure when no report can be obtained.
pub fn validate(data: Option<&Path>) -> Result<(), CliError> {
    let (report, source) = loader_for(data).try_load()?;

    let source = match source {
        DataSource::Injected(_) => "injected value".to_string(),
        DataSource::Script(path) | DataSource::File(path) => path.display().to_string(),
    };
    let labels: Vec<&str> = report.versions().iter().map(|v| v.label).collect();

    println!("{} {}", "✓".green().bold(), source);
    println!("  Versions: {}", labels.join(", "));
    println!("  Sizes:    {}", report.sizes.join(", "));
    Ok(())
}

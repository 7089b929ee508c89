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

//! Render command - Write the dashboard as a standalone HTML page

use super::{loader_for, write_output};
use crate::error::CliError;
use benchboard_render::{export_html, host_document, Dashboard, Viewport};
use std::path::Path;
use tracing::info;

/// Page options for [`render`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions<'a> {
    pub title: &'a str,
    pub viewport: Viewport,
}

/// Load benchmark data and write the dashboard page.
///
/// Missing or invalid data is not an error: the page is still written,
/// showing only the "data unavailable" notice.
///
/// # Errors
///
/// Returns `Err` if the output cannot be written.
pub fn render(
    data: Option<&Path>,
    output: Option<&Path>,
    options: &RenderOptions<'_>,
) -> Result<(), CliError> {
    let report = loader_for(data).load();
    let available = report.is_some();

    let dashboard = Dashboard::mount(host_document(options.title), report, options.viewport);
    let html = export_html(&dashboard);
    write_output(&html, output)?;

    match output {
        Some(path) => info!(
            path = %path.display(),
            bytes = html.len(),
            data = available,
            "wrote dashboard"
        ),
        None => info!(bytes = html.len(), data = available, "wrote dashboard to stdout"),
    }
    Ok(())
}

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

//! CLI command implementations

mod completion;
mod render;
mod summary;
mod validate;

pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use render::{render, RenderOptions};
pub use summary::summary;
pub use validate::validate;

use crate::error::CliError;
use benchboard_core::Loader;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Build a loader for `--data`.
///
/// A directory is treated as a dashboard site root (`data/bench.js`, then
/// `data/bench.json` beneath it); a file is loaded directly. Without a path
/// the current directory is the site root.
pub fn loader_for(data: Option<&Path>) -> Loader {
    match data {
        Some(path) if path.is_dir() => Loader::for_site(path),
        Some(path) => Loader::new(path),
        None => Loader::default(),
    }
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))?;
            }
            fs::write(p, content).map_err(|e| CliError::io_error(p, e))
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("-", e)),
    }
}

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

//! Benchboard command-line interface.
//!
//! # Commands
//!
//! - **render**: write the dashboard as a standalone HTML page
//! - **summary**: print per-version, per-size statistics
//! - **validate**: check that benchmark data can be loaded
//! - **completion**: generate shell completion scripts
//!
//! # Configuration
//!
//! - `RUST_LOG` controls log output on stderr (default `benchboard=info`)
//! - `BENCHBOARD_MAX_FILE_SIZE` caps the size of data files read, in bytes
//!
//! # Example
//!
//! ```no_run
//! use benchboard_cli::commands::{render, RenderOptions};
//! use benchboard_render::Viewport;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchboard_cli::error::CliError> {
//! render(
//!     Some(Path::new("site")),
//!     Some(Path::new("site/index.html")),
//!     &RenderOptions { title: "Nightly", viewport: Viewport::default() },
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;

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

//! Structured error types for the Benchboard CLI.
//!
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting; `main` prints the message and exits with a failure code.

use benchboard_core::LoadError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Benchboard CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Benchmark data could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The output path, or `-` for stdout
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON format error: {0}")]
    JsonFormat(String),

    /// The requested size is not declared in the report.
    #[error("Unknown size '{size}'. Available sizes: {available}")]
    UnknownSize {
        /// The requested size label
        size: String,
        /// Comma-separated declared sizes
        available: String,
    },

    /// Completion requested for a shell clap_complete does not know.
    #[error("Unsupported shell: '{0}'. Supported shells: bash, zsh, fish, powershell, elvish")]
    UnsupportedShell(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an unknown-size error listing the sizes that exist.
    pub fn unknown_size(size: impl Into<String>, available: &[String]) -> Self {
        Self::UnknownSize {
            size: size.into(),
            available: available.join(", "),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat(err.to_string())
    }
}

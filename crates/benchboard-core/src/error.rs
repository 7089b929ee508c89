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

//! Error types for loading benchmark data.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Why a benchmark report could not be obtained.
///
/// Every variant is recoverable: the dashboard reacts to any of them by
/// showing the "data unavailable" notice instead of the charts.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    /// Neither an injected value nor a data file was available.
    #[error("No benchmark data found at '{path}'")]
    NotFound {
        /// The data file that was looked for
        path: PathBuf,
    },

    /// Reading a data file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Data file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
    },

    /// The payload is not a valid benchmark document.
    #[error("Invalid benchmark JSON: {0}")]
    Json(String),

    /// A `bench.js` data script does not assign a JSON value.
    #[error("Invalid data script: {0}")]
    InvalidScript(String),
}

impl LoadError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::NotFound { path: path.into() };
        }
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
        }
    }

    /// Create an invalid-script error.
    pub fn invalid_script(msg: impl Into<String>) -> Self {
        Self::InvalidScript(msg.into())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguished_from_io() {
        let err = LoadError::io_error(
            "data/bench.json",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("data/bench.json"));

        let err = LoadError::io_error(
            "data/bench.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = LoadError::file_too_large("big.json", 2048, 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.json"));
        assert!(msg.contains("2048 bytes"));
        assert!(msg.contains("1024 bytes"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::Json(_)));
    }
}

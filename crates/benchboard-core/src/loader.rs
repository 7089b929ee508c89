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

//! Benchmark data loading.
//!
//! A dashboard page can receive its data two ways: a data script
//! (`data/bench.js`) that assigns the report to `window.BENCH_DATA`, or a
//! plain `data/bench.json` file next to the page. The [`Loader`] mirrors
//! that lookup order. An injected value, when present, always wins.
//!
//! Loading never aborts rendering. [`Loader::load`] collapses every failure
//! into `None` after logging the cause; [`Loader::try_load`] keeps the cause
//! for callers that want to report it.

use crate::error::{LoadError, LoadResult};
use crate::report::BenchmarkReport;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Data file read relative to the dashboard root.
pub const DEFAULT_DATA_PATH: &str = "data/bench.json";

/// Data script read relative to the dashboard root.
pub const DEFAULT_SCRIPT_PATH: &str = "data/bench.js";

/// Global the data script assigns.
pub const INJECTED_GLOBAL: &str = "window.BENCH_DATA";

/// Default maximum data file size (64 MB).
/// Can be overridden via the `BENCHBOARD_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "BENCHBOARD_MAX_FILE_SIZE";

/// Read the maximum file size from the environment, falling back to the default.
pub fn max_file_size_from_env() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Where a report came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// A value handed over by the host page.
    Injected(Value),
    /// A `bench.js` data script.
    Script(PathBuf),
    /// A `bench.json` data file.
    File(PathBuf),
}

/// Resolves a [`BenchmarkReport`] from the configured sources.
#[derive(Debug, Clone)]
pub struct Loader {
    injected: Option<Value>,
    script_path: Option<PathBuf>,
    data_path: PathBuf,
    max_file_size: u64,
}

impl Loader {
    /// Load from a single data file. A `.js` extension is read as a data script.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        let data_path = data_path.into();
        let is_script = data_path.extension().is_some_and(|ext| ext == "js");
        Self {
            injected: None,
            script_path: is_script.then(|| data_path.clone()),
            data_path,
            max_file_size: max_file_size_from_env(),
        }
    }

    /// Load the way a dashboard page rooted at `root` would: the data script
    /// first, then the data file.
    pub fn for_site(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            injected: None,
            script_path: Some(root.join(DEFAULT_SCRIPT_PATH)),
            data_path: root.join(DEFAULT_DATA_PATH),
            max_file_size: max_file_size_from_env(),
        }
    }

    /// Supply an in-memory value that takes precedence over any file.
    pub fn with_injected(mut self, value: Value) -> Self {
        self.injected = Some(value);
        self
    }

    /// Override the maximum accepted file size.
    pub fn with_max_file_size(mut self, max: u64) -> Self {
        self.max_file_size = max;
        self
    }

    /// The data file this loader falls back to.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Load the report, or `None` if no source yields a valid document.
    pub fn load(&self) -> Option<BenchmarkReport> {
        match self.try_load() {
            Ok((report, source)) => {
                debug!(source = %source_name(&source), "loaded benchmark report");
                Some(report)
            }
            Err(err) => {
                warn!("benchmark data unavailable: {}", err);
                None
            }
        }
    }

    /// Load the report and report which source supplied it.
    ///
    /// The data file is read fresh on every call.
    pub fn try_load(&self) -> LoadResult<(BenchmarkReport, DataSource)> {
        if let Some(value) = self.injected.as_ref().filter(|v| is_truthy(v)) {
            match BenchmarkReport::from_value(value.clone()) {
                Ok(report) => return Ok((report, DataSource::Injected(value.clone()))),
                Err(err) => debug!("ignoring injected value: {}", err),
            }
        }

        if let Some(script) = &self.script_path {
            match self.load_script(script) {
                Ok(Some(report)) => return Ok((report, DataSource::Script(script.clone()))),
                Ok(None) => {}
                // An explicitly requested script has nothing to fall back to.
                Err(err) if script == &self.data_path => return Err(err),
                Err(err) => debug!("ignoring data script: {}", err),
            }
            if script == &self.data_path {
                return Err(LoadError::NotFound {
                    path: script.clone(),
                });
            }
        }

        let content = read_data_file(&self.data_path, self.max_file_size)?;
        let report = BenchmarkReport::from_json_str(&content)?;
        Ok((report, DataSource::File(self.data_path.clone())))
    }

    fn load_script(&self, path: &Path) -> LoadResult<Option<BenchmarkReport>> {
        let source = match read_data_file(path, self.max_file_size) {
            Ok(source) => source,
            Err(LoadError::NotFound { .. }) => return Ok(None),
            Err(err) => return Err(err),
        };
        let value = parse_data_script(&source)?;
        if !is_truthy(&value) {
            return Ok(None);
        }
        BenchmarkReport::from_value(value).map(Some)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::for_site(".")
    }
}

/// Read a data file with size validation.
pub fn read_data_file(path: &Path, max_file_size: u64) -> LoadResult<String> {
    let metadata = fs::metadata(path).map_err(|e| LoadError::io_error(path, e))?;
    if metadata.len() > max_file_size {
        return Err(LoadError::file_too_large(path, metadata.len(), max_file_size));
    }
    fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))
}

/// Extract the JSON value assigned by a data script.
///
/// Accepts `window.BENCH_DATA = {...};` with optional `var`/`const`
/// spellings of the global and a trailing semicolon.
pub fn parse_data_script(source: &str) -> LoadResult<Value> {
    let trimmed = source.trim();
    let start = trimmed
        .find("BENCH_DATA")
        .ok_or_else(|| LoadError::invalid_script(format!("no assignment to {}", INJECTED_GLOBAL)))?;
    let rest = &trimmed[start + "BENCH_DATA".len()..];
    let rest = rest
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| LoadError::invalid_script("expected '=' after BENCH_DATA"))?;
    let body = rest.trim().trim_end_matches(';').trim_end();
    serde_json::from_str(body).map_err(|e| LoadError::invalid_script(e.to_string()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn source_name(source: &DataSource) -> String {
    match source {
        DataSource::Injected(_) => "injected".to_string(),
        DataSource::Script(path) | DataSource::File(path) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    const REPORT: &str = r#"{"runs": 3, "sizes": ["1K"], "versions": {"ref_c": {"label": "Ref C", "sizes": {"1K": [1, 2, 3]}}}}"#;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        dir
    }

    #[test]
    fn test_loads_json_file() {
        let dir = site();
        fs::write(dir.path().join(DEFAULT_DATA_PATH), REPORT).unwrap();

        let (report, source) = Loader::for_site(dir.path()).try_load().unwrap();
        assert_eq!(report.versions().len(), 1);
        assert!(matches!(source, DataSource::File(_)));
    }

    #[test]
    fn test_script_takes_precedence_over_file() {
        let dir = site();
        fs::write(dir.path().join(DEFAULT_DATA_PATH), "{}").unwrap();
        fs::write(
            dir.path().join(DEFAULT_SCRIPT_PATH),
            format!("window.BENCH_DATA = {};\n", REPORT),
        )
        .unwrap();

        let (report, source) = Loader::for_site(dir.path()).try_load().unwrap();
        assert_eq!(report.versions().len(), 1);
        assert!(matches!(source, DataSource::Script(_)));
    }

    #[test]
    fn test_injected_takes_precedence() {
        let dir = site();
        fs::write(dir.path().join(DEFAULT_DATA_PATH), REPORT).unwrap();

        let loader = Loader::for_site(dir.path()).with_injected(json!({ "runs": 9 }));
        let (report, source) = loader.try_load().unwrap();
        assert!(report.versions().is_empty());
        assert!(matches!(source, DataSource::Injected(_)));
    }

    #[test]
    fn test_null_injected_falls_through() {
        let dir = site();
        fs::write(dir.path().join(DEFAULT_DATA_PATH), REPORT).unwrap();

        let loader = Loader::for_site(dir.path()).with_injected(Value::Null);
        let (_, source) = loader.try_load().unwrap();
        assert!(matches!(source, DataSource::File(_)));
    }

    #[test]
    fn test_missing_data_yields_none() {
        let dir = site();
        let loader = Loader::for_site(dir.path());
        assert!(matches!(loader.try_load(), Err(LoadError::NotFound { .. })));
        assert!(loader.load().is_none());
    }

    #[test]
    fn test_invalid_json_yields_none() {
        let dir = site();
        fs::write(dir.path().join(DEFAULT_DATA_PATH), "<html>404</html>").unwrap();
        let loader = Loader::for_site(dir.path());
        assert!(matches!(loader.try_load(), Err(LoadError::Json(_))));
        assert!(loader.load().is_none());
    }

    #[test]
    fn test_file_too_large() {
        let dir = site();
        fs::write(dir.path().join(DEFAULT_DATA_PATH), REPORT).unwrap();
        let loader = Loader::for_site(dir.path()).with_max_file_size(8);
        assert!(matches!(
            loader.try_load(),
            Err(LoadError::FileTooLarge { max: 8, .. })
        ));
    }

    #[test]
    fn test_explicit_script_path() {
        let dir = site();
        let path = dir.path().join("custom.js");
        fs::write(&path, format!("window.BENCH_DATA={}", REPORT)).unwrap();
        let (_, source) = Loader::new(&path).try_load().unwrap();
        assert_eq!(source, DataSource::Script(path.clone()));

        fs::write(&path, "console.log('nothing here');").unwrap();
        assert!(matches!(
            Loader::new(&path).try_load(),
            Err(LoadError::InvalidScript(_))
        ));
    }

    #[test]
    fn test_parse_data_script() {
        let value = parse_data_script("const BENCH_DATA = {\"runs\": 2};").unwrap();
        assert_eq!(value, json!({ "runs": 2 }));
        assert!(parse_data_script("window.OTHER = {}").is_err());
        assert!(parse_data_script("window.BENCH_DATA {}").is_err());
    }
}

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

//! Benchmark report data model.
//!
//! Deserialization is deliberately forgiving: absent or malformed
//! substructures become empty values rather than errors, so a dashboard
//! renders whatever a snapshot contains and skips the rest. Only a payload
//! that is not a JSON object at all is rejected.

use crate::error::LoadResult;
use crate::versions::{color_for, VersionKey};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Size labels assumed when a report does not declare any.
pub const DEFAULT_SIZES: [&str; 3] = ["1K", "8K", "1M"];

/// A spec-grid value that may be written as a JSON number, string or bool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
    Flag(bool),
}

impl Scalar {
    /// Whether the value should be displayed as missing (`""`, `0`, `false`).
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Number(n) => n.as_f64() == Some(0.0),
            Scalar::Text(s) => s.is_empty(),
            Scalar::Flag(b) => !b,
        }
    }

    /// Render an optional value, falling back when it is absent or blank.
    pub fn display_or(value: Option<&Scalar>, fallback: &str) -> String {
        match value {
            Some(v) if !v.is_blank() => v.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Host machine the benchmarks ran on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Machine {
    #[serde(deserialize_with = "lenient")]
    pub os: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub cores: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub ram_gb: Option<Scalar>,
}

/// Compiler and tool versions used to build the benchmarked variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    #[serde(deserialize_with = "lenient")]
    pub go: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub goos: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub goarch: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub gomaxprocs: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub gcc: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub nasm: Option<Scalar>,
}

/// Samples recorded for one version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionEntry {
    /// Display name; the version key is used when absent or empty.
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    /// Size label to per-run throughput samples (MB/s), in run order.
    #[serde(deserialize_with = "sample_table")]
    pub sizes: BTreeMap<String, Vec<f64>>,
}

/// A benchmark results snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkReport {
    #[serde(deserialize_with = "lenient")]
    pub runs: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub generated_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub git_commit: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub machine: Machine,
    #[serde(deserialize_with = "lenient")]
    pub toolchain: Toolchain,
    #[serde(deserialize_with = "sizes_or_default")]
    pub sizes: Vec<String>,
    /// Entries for known version keys only; unknown keys are dropped.
    #[serde(deserialize_with = "known_versions")]
    pub versions: BTreeMap<String, VersionEntry>,
}

impl Default for BenchmarkReport {
    fn default() -> Self {
        Self {
            runs: None,
            generated_at: None,
            git_commit: None,
            machine: Machine::default(),
            toolchain: Toolchain::default(),
            sizes: DEFAULT_SIZES.iter().map(|s| s.to_string()).collect(),
            versions: BTreeMap::new(),
        }
    }
}

/// A present version, resolved against the declared version order.
#[derive(Debug, Clone, Copy)]
pub struct Version<'a> {
    pub key: VersionKey,
    pub label: &'a str,
    entry: &'a VersionEntry,
}

impl<'a> Version<'a> {
    /// Samples for `size`, empty when the version has none.
    pub fn samples(&self, size: &str) -> &'a [f64] {
        self.entry
            .sizes
            .get(size)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Palette colour for this version's label.
    pub fn color(&self) -> Option<&'static str> {
        color_for(self.label)
    }
}

impl BenchmarkReport {
    /// Parse a report from JSON text.
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a report from an already-parsed JSON value.
    pub fn from_value(value: Value) -> LoadResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Present versions in declared order.
    pub fn versions(&self) -> Vec<Version<'_>> {
        VersionKey::ALL
            .iter()
            .filter_map(|&key| self.version(key))
            .collect()
    }

    /// Look up a single version by key.
    pub fn version(&self, key: VersionKey) -> Option<Version<'_>> {
        let entry = self.versions.get(key.as_str())?;
        let label = match entry.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => key.as_str(),
        };
        Some(Version { key, label, entry })
    }

    /// The largest declared payload size.
    ///
    /// Sizes are compared by byte value when every label parses (see
    /// [`size_in_bytes`]); otherwise the last declared size wins.
    pub fn largest_size(&self) -> Option<&str> {
        let parsed: Option<Vec<u64>> = self.sizes.iter().map(|s| size_in_bytes(s)).collect();
        match parsed {
            Some(bytes) if !bytes.is_empty() => {
                let mut best = 0;
                for (i, &b) in bytes.iter().enumerate() {
                    if b > bytes[best] {
                        best = i;
                    }
                }
                Some(self.sizes[best].as_str())
            }
            _ => self.sizes.last().map(String::as_str),
        }
    }

    /// Longest sample sequence recorded for `size` across present versions.
    pub fn max_run_count(&self, size: &str) -> usize {
        self.versions()
            .iter()
            .map(|v| v.samples(size).len())
            .max()
            .unwrap_or(0)
    }

    /// First eight characters of the commit hash.
    pub fn short_commit(&self) -> Option<String> {
        self.git_commit
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| c.chars().take(8).collect())
    }
}

/// Parse a size label such as `"8K"`, `"1M"` or `"64B"` into bytes.
pub fn size_in_bytes(label: &str) -> Option<u64> {
    let label = label.trim().to_ascii_uppercase();
    let label = label.strip_suffix('B').unwrap_or(&label);
    let (number, multiplier) = match label.chars().last()? {
        'K' => (&label[..label.len() - 1], 1u64 << 10),
        'M' => (&label[..label.len() - 1], 1u64 << 20),
        'G' => (&label[..label.len() - 1], 1u64 << 30),
        _ => (label, 1),
    };
    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * multiplier as f64) as u64)
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn sizes_or_default<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let sizes = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => DEFAULT_SIZES.iter().map(|s| s.to_string()).collect(),
    };
    Ok(sizes)
}

fn sample_table<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(map
        .into_iter()
        .map(|(size, samples)| {
            let samples = match samples {
                // Non-numeric entries are kept as NaN so run indices stay aligned.
                Value::Array(items) => items
                    .iter()
                    .map(|v| v.as_f64().unwrap_or(f64::NAN))
                    .collect(),
                _ => Vec::new(),
            };
            (size, samples)
        })
        .collect())
}

fn known_versions<'de, D>(deserializer: D) -> Result<BTreeMap<String, VersionEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(map
        .into_iter()
        .filter(|(key, entry)| VersionKey::from_key(key).is_some() && !entry.is_null())
        .map(|(key, entry)| {
            let entry = serde_json::from_value(entry).unwrap_or_default();
            (key, entry)
        })
        .collect())
}

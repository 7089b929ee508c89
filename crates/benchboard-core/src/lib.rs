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

//! Data model, statistics and data loading for Benchboard.
//!
//! A Benchboard dashboard is drawn from a single JSON snapshot of throughput
//! measurements. This crate owns everything that happens before rendering:
//!
//! - [`BenchmarkReport`]: the tolerant data model for the snapshot
//! - [`VersionKey`] and the static palette: the fixed, ordered set of
//!   benchmarked implementation variants
//! - [`Stats`]: min/max/mean/population standard deviation over samples
//! - [`Loader`]: obtains a report from an injected value, a `bench.js`
//!   data script or a `bench.json` file
//!
//! # Examples
//!
//! ```
//! use benchboard_core::{BenchmarkReport, Stats};
//!
//! let report = BenchmarkReport::from_json_str(r#"{
//!     "sizes": ["1K"],
//!     "versions": { "ref_c": { "label": "Ref C", "sizes": { "1K": [2, 4, 4, 4, 5, 5, 7, 9] } } }
//! }"#).unwrap();
//!
//! let version = &report.versions()[0];
//! let stats = Stats::compute(version.samples("1K"));
//! assert_eq!(stats.avg, 5.0);
//! assert_eq!(stats.std, 2.0);
//! ```

mod error;
pub mod loader;
mod report;
mod stats;
mod versions;

pub use error::{LoadError, LoadResult};
pub use loader::{DataSource, Loader};
pub use report::{
    size_in_bytes, BenchmarkReport, Machine, Scalar, Toolchain, Version, VersionEntry,
    DEFAULT_SIZES,
};
pub use stats::Stats;
pub use versions::{color_for, VersionKey, PALETTE};

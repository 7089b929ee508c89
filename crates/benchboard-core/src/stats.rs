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

//! Descriptive statistics over throughput samples.

use serde::Serialize;

/// Summary statistics for one sample sequence.
///
/// Recomputed on every render; never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    /// Population standard deviation (divides by N).
    pub std: f64,
}

impl Stats {
    /// Compute statistics over the finite values in `samples`.
    ///
    /// Non-finite samples are ignored. When no finite sample remains every
    /// field is `0.0`.
    pub fn compute(samples: &[f64]) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for &value in samples.iter().filter(|v| v.is_finite()) {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return Self::default();
        }

        let n = count as f64;
        // Summation error can push the mean a hair past the extremes.
        let avg = (sum / n).clamp(min, max);
        let variance = samples
            .iter()
            .filter(|v| v.is_finite())
            .map(|v| (v - avg).powi(2))
            .sum::<f64>()
            / n;

        Self {
            min,
            max,
            avg,
            std: variance.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_std() {
        let stats = Stats::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.avg, 5.0);
        assert_eq!(stats.std, 2.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(Stats::compute(&[]), Stats::default());
        assert_eq!(
            Stats::compute(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]),
            Stats {
                min: 0.0,
                max: 0.0,
                avg: 0.0,
                std: 0.0
            }
        );
    }

    #[test]
    fn test_non_finite_filtered() {
        let stats = Stats::compute(&[f64::NAN, 10.0, f64::INFINITY, 20.0]);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 20.0);
        assert_eq!(stats.avg, 15.0);
        assert_eq!(stats.std, 5.0);
    }

    #[test]
    fn test_single_sample() {
        let stats = Stats::compute(&[812.5]);
        assert_eq!(stats.min, 812.5);
        assert_eq!(stats.max, 812.5);
        assert_eq!(stats.avg, 812.5);
        assert_eq!(stats.std, 0.0);
    }
}

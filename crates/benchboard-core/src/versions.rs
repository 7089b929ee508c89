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

//! The fixed set of benchmarked implementation variants.

/// Display label to colour mapping shared by every widget.
pub const PALETTE: [(&str, &str); 4] = [
    ("Ref C", "#1f7a8c"),
    ("Go asm", "#e07a5f"),
    ("Go purego", "#4a7c59"),
    ("FP C", "#f2cc8f"),
];

/// Look up the palette colour for a version label.
pub fn color_for(label: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
}

/// Known version keys, in dashboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VersionKey {
    /// The C reference implementation.
    RefC,
    /// Go with assembly kernels.
    GoAsm,
    /// Pure Go build.
    GoPurego,
    /// Optimized C build.
    FpC,
}

impl VersionKey {
    /// All keys in the order cards, legend entries, bars and rows appear.
    pub const ALL: [VersionKey; 4] = [
        VersionKey::RefC,
        VersionKey::GoAsm,
        VersionKey::GoPurego,
        VersionKey::FpC,
    ];

    /// The key as it appears in the `versions` object of a report.
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionKey::RefC => "ref_c",
            VersionKey::GoAsm => "go_asm",
            VersionKey::GoPurego => "go_purego",
            VersionKey::FpC => "fp_c",
        }
    }

    /// Parse a report key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for VersionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

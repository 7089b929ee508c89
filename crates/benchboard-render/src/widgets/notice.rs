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

//! Failure banner.

use crate::dom::{Document, Element};

pub const NOTICE_CLASS: &str = "notice";

/// Insert a notice with `message` at the top of `<main>`.
///
/// An existing notice is reused, so the page never shows more than one.
/// Returns `false` when the document has no `<main>`.
pub fn show_notice(doc: &mut Document, message: &str) -> bool {
    let Some(main) = doc.main_mut() else {
        return false;
    };
    if let Some(existing) = main
        .child_elements_mut()
        .find(|e| e.has_class(NOTICE_CLASS))
    {
        existing.set_text(message);
        return true;
    }
    main.prepend(
        Element::new("div")
            .with_class(NOTICE_CLASS)
            .with_attr("role", "alert")
            .with_text(message),
    );
    true
}

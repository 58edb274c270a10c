// Copyright 2025 ReplayLens (https://github.com/replaylens)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Event Category Taxonomy
//!
//! Closed set of categories a replay telemetry event classifies into.
//! Classification is total: every frame resolves to exactly one category,
//! with `Unknown` as the catch-all.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a classified replay telemetry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// A completed user click.
    Click,
    /// A click whose triggered action never completed in time.
    DeadClick,
    /// A dead click repeated in frustration.
    RageClick,
    /// A page navigation.
    Navigation,
    /// A console log entry.
    Console,
    /// The tab lost focus.
    UiBlur,
    /// The tab regained focus.
    UiFocus,
    /// A network request issued through `fetch`.
    ResourceFetch,
    /// A network request issued through `XMLHttpRequest`.
    ResourceXhr,
    /// Largest-contentful-paint web vital.
    Lcp,
    /// First-contentful-paint web vital.
    Fcp,
    /// A client-side hydration failure.
    HydrationError,
    /// A burst of DOM mutations.
    Mutations,
    /// Anything the classifier does not recognize.
    Unknown,
    /// A user-submitted feedback form.
    Feedback,
}

impl EventCategory {
    /// All categories, in classification order.
    pub fn all() -> Vec<EventCategory> {
        vec![
            EventCategory::Click,
            EventCategory::DeadClick,
            EventCategory::RageClick,
            EventCategory::Navigation,
            EventCategory::Console,
            EventCategory::UiBlur,
            EventCategory::UiFocus,
            EventCategory::ResourceFetch,
            EventCategory::ResourceXhr,
            EventCategory::Lcp,
            EventCategory::Fcp,
            EventCategory::HydrationError,
            EventCategory::Mutations,
            EventCategory::Unknown,
            EventCategory::Feedback,
        ]
    }

    /// Categories that never contribute a summary line.
    pub fn is_suppressed(&self) -> bool {
        matches!(self, EventCategory::ResourceXhr | EventCategory::Mutations)
    }

    /// String representation for storage/indexing.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Click => "click",
            EventCategory::DeadClick => "dead_click",
            EventCategory::RageClick => "rage_click",
            EventCategory::Navigation => "navigation",
            EventCategory::Console => "console",
            EventCategory::UiBlur => "ui_blur",
            EventCategory::UiFocus => "ui_focus",
            EventCategory::ResourceFetch => "resource_fetch",
            EventCategory::ResourceXhr => "resource_xhr",
            EventCategory::Lcp => "lcp",
            EventCategory::Fcp => "fcp",
            EventCategory::HydrationError => "hydration_error",
            EventCategory::Mutations => "mutations",
            EventCategory::Unknown => "unknown",
            EventCategory::Feedback => "feedback",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

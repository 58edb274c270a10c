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

//! Replay Event Classification
//!
//! Maps a telemetry frame onto its [`EventCategory`]. Rules run in order and
//! the first match wins; breadcrumbs dispatch on `category`, spans on `op`.
//! Classification is a pure function of the frame and never fails.

use serde_json::Value;

use crate::category::EventCategory;
use crate::config::{SlowClickConfig, SLOW_CLICK_TARGET_TAGS};
use crate::frame::{BreadcrumbFrame, ReplayFrame, SpanFrame};

/// Classify a frame using the default slow-click thresholds.
pub fn classify(frame: &ReplayFrame) -> EventCategory {
    classify_with(frame, &SlowClickConfig::default())
}

/// Classify a frame with explicit slow-click thresholds.
pub fn classify_with(frame: &ReplayFrame, config: &SlowClickConfig) -> EventCategory {
    match frame {
        ReplayFrame::Breadcrumb(breadcrumb) => classify_breadcrumb(breadcrumb, config),
        ReplayFrame::Span(span) => classify_span(span),
    }
}

fn classify_breadcrumb(frame: &BreadcrumbFrame, config: &SlowClickConfig) -> EventCategory {
    match frame.category.as_str() {
        "ui.click" => EventCategory::Click,
        "ui.slowClickDetected" => classify_slow_click(frame, config),
        "navigation" => EventCategory::Navigation,
        "console" => EventCategory::Console,
        "ui.blur" => EventCategory::UiBlur,
        "ui.focus" => EventCategory::UiFocus,
        "replay.hydrate-error" => EventCategory::HydrationError,
        "replay.mutations" => EventCategory::Mutations,
        "sentry.feedback" => EventCategory::Feedback,
        _ => EventCategory::Unknown,
    }
}

/// A slow click counts as dead only when the recorder gave up waiting
/// (`endReason: "timeout"`) on an interactive target and the wait cleared the
/// configured threshold. A failed candidate resolves straight to `Unknown`;
/// no later rule applies.
fn classify_slow_click(frame: &BreadcrumbFrame, config: &SlowClickConfig) -> EventCategory {
    let timed_out = frame.data_str("endReason") == Some("timeout");
    let interactive_target = frame
        .data_field("node")
        .and_then(|node| node.get("tagName"))
        .and_then(Value::as_str)
        .map_or(false, |tag| SLOW_CLICK_TARGET_TAGS.contains(&tag));
    let wait_ms = frame.data_number(&["timeAfterClickMs", "timeafterclickms"]);

    if timed_out && interactive_target && wait_ms >= config.timeout_ms {
        let clicks = frame.data_number(&["clickCount", "clickcount"]);
        if clicks >= config.rage_click_count {
            EventCategory::RageClick
        } else {
            EventCategory::DeadClick
        }
    } else {
        EventCategory::Unknown
    }
}

fn classify_span(frame: &SpanFrame) -> EventCategory {
    match frame.op.as_str() {
        "resource.fetch" => EventCategory::ResourceFetch,
        "resource.xhr" => EventCategory::ResourceXhr,
        "web-vital" => match frame.description.as_deref() {
            Some("largest-contentful-paint") => EventCategory::Lcp,
            Some("first-contentful-paint") => EventCategory::Fcp,
            _ => EventCategory::Unknown,
        },
        _ => EventCategory::Unknown,
    }
}

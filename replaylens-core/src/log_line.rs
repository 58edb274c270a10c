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

//! Log Line Rendering
//!
//! Renders a classified frame as a single human-readable log line for the
//! summarization backend. Not every frame produces a line: network XHR spans
//! and mutation bursts are suppressed outright, and unclassified spans render
//! nothing while unclassified breadcrumbs render an empty line. Hosts filter
//! the `None` entries and submit the rest in order.

use url::Url;

use serde_json::Value;

use crate::category::EventCategory;
use crate::classify::classify_with;
use crate::config::SlowClickConfig;
use crate::frame::{ReplayFrame, SpanFrame};

/// Line emitted for feedback submissions.
const FEEDBACK_LINE: &str =
    "The user filled out a feedback form describing their experience using the application.";

/// Render a frame as a log line using the default slow-click thresholds.
///
/// `None` means the frame contributes no summary text. An empty string is a
/// valid line: unclassified breadcrumbs keep their (empty) slot so callers
/// can tell "nothing to say" apart from "not summarizable".
pub fn render_log_line(frame: &ReplayFrame) -> Option<String> {
    render_log_line_with(frame, &SlowClickConfig::default())
}

/// Render a frame as a log line with explicit slow-click thresholds.
pub fn render_log_line_with(frame: &ReplayFrame, config: &SlowClickConfig) -> Option<String> {
    let timestamp = frame.timestamp_ms();

    match classify_with(frame, config) {
        EventCategory::Click => Some(format!(
            "User clicked on {} at {}",
            breadcrumb_message(frame),
            timestamp
        )),
        EventCategory::DeadClick => Some(format!(
            "User clicked on {} but the triggered action was slow to complete at {}",
            breadcrumb_message(frame),
            timestamp
        )),
        EventCategory::RageClick => Some(format!(
            "User rage clicked on {} but the triggered action was slow to complete at {}",
            breadcrumb_message(frame),
            timestamp
        )),
        EventCategory::Navigation => Some(format!(
            "User navigated to: {} at {}",
            breadcrumb_data(frame, "to"),
            timestamp
        )),
        EventCategory::Console => Some(format!(
            "Logged: {} at {}",
            breadcrumb_message(frame),
            timestamp
        )),
        EventCategory::UiBlur => Some(format!("User looked away from the tab at {}.", timestamp)),
        EventCategory::UiFocus => Some(format!("User returned to tab at {}.", timestamp)),
        EventCategory::HydrationError => Some(format!(
            "There was a hydration error on the page at {}.",
            timestamp
        )),
        EventCategory::Feedback => Some(FEEDBACK_LINE.to_string()),
        EventCategory::ResourceFetch => match frame {
            ReplayFrame::Span(span) => render_fetch(span, timestamp),
            ReplayFrame::Breadcrumb(_) => None,
        },
        EventCategory::Lcp => web_vital_line(frame, "largest"),
        EventCategory::Fcp => web_vital_line(frame, "first"),
        EventCategory::ResourceXhr | EventCategory::Mutations => None,
        EventCategory::Unknown => match frame {
            ReplayFrame::Breadcrumb(_) => Some(String::new()),
            ReplayFrame::Span(_) => None,
        },
    }
}

/// Render a template field. Missing fields render as the literal `undefined`,
/// the form the summarization backend already tolerates in interaction logs.
fn field_display(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn breadcrumb_message(frame: &ReplayFrame) -> String {
    match frame {
        ReplayFrame::Breadcrumb(breadcrumb) => breadcrumb
            .message
            .clone()
            .unwrap_or_else(|| "undefined".to_string()),
        ReplayFrame::Span(_) => "undefined".to_string(),
    }
}

fn breadcrumb_data(frame: &ReplayFrame, key: &str) -> String {
    match frame {
        ReplayFrame::Breadcrumb(breadcrumb) => field_display(breadcrumb.data_field(key)),
        ReplayFrame::Span(_) => field_display(None),
    }
}

/// Fetch lines are best effort: an unparseable request URL drops the line
/// rather than failing the whole batch.
fn render_fetch(span: &SpanFrame, timestamp: f64) -> Option<String> {
    let raw_url = span.description.as_deref().unwrap_or("");
    let parsed = match Url::parse(raw_url) {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!("dropping fetch log line, request url failed to parse: {}", err);
            return None;
        }
    };

    let path = format!("{}?{}", parsed.path(), parsed.query().unwrap_or(""));
    let method = field_display(span.data_field("method"));
    let status_code = field_display(span.data_field("statusCode"));
    let size = field_display(
        span.data_field("response")
            .and_then(|response| response.get("size")),
    );

    Some(format!(
        "Application initiated request: \"{} {} HTTP/2.0\" {} {}; took {} milliseconds at {}",
        method,
        path,
        status_code,
        size,
        span.duration_ms(),
        timestamp
    ))
}

fn web_vital_line(frame: &ReplayFrame, label: &str) -> Option<String> {
    match frame {
        ReplayFrame::Span(span) => {
            let duration = field_display(span.data_field("size"));
            let rating = field_display(span.data_field("rating"));
            Some(format!(
                "Application {} contentful paint: {} ms and has a {} rating",
                label, duration, rating
            ))
        }
        ReplayFrame::Breadcrumb(_) => None,
    }
}

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

//! Attachment Pre-filtering and Reshaping
//!
//! The raw replay attachment stream mixes DOM snapshots, recorder options and
//! telemetry events. Only custom telemetry envelopes feed the summarizer, and
//! their payloads are stripped of fields that add tokens without meaning
//! before classification sees them.
//!
//! Envelopes look like:
//!
//! ```json
//! {"type": 5, "timestamp": 1719000000000, "data": {"tag": "breadcrumb", "payload": {...}}}
//! ```

use serde_json::{Map, Value};

use replaylens_core::{render_log_line, ReplayFrame};

/// Envelope kind carrying custom telemetry payloads. Other kinds hold DOM
/// snapshots and incremental mutations.
pub const CUSTOM_EVENT_KIND: u64 = 5;

/// Filter and reshape a raw attachment stream into summarizer payloads.
///
/// Keeps custom telemetry envelopes, drops recorder options and all
/// performance spans except fetch/xhr network calls, then strips each kept
/// payload down to its meaningful fields.
pub fn reshape_attachments(events: &[Value]) -> Vec<Value> {
    let reshaped: Vec<Value> = events
        .iter()
        .filter(|event| is_custom_event(event))
        .filter(|event| is_summary_relevant(event))
        .filter_map(|event| reshape_event(event))
        .collect();

    tracing::debug!(
        "reshaped {} of {} replay attachments for summarization",
        reshaped.len(),
        events.len()
    );
    reshaped
}

/// Convert reshaped payloads into typed frames, skipping payloads that are
/// neither breadcrumbs nor spans.
pub fn frames_from_attachments(events: &[Value]) -> Vec<ReplayFrame> {
    reshape_attachments(events)
        .into_iter()
        .filter_map(|payload| match ReplayFrame::from_value(payload) {
            Ok(frame) => Some(frame),
            Err(err) => {
                tracing::warn!("skipping unrecognized telemetry payload: {}", err);
                None
            }
        })
        .collect()
}

/// The ordered log batch for the summarization backend.
///
/// Suppressed events drop out. Unclassified breadcrumbs keep their empty
/// line, matching the renderer's contract.
pub fn summarization_logs(events: &[Value]) -> Vec<String> {
    frames_from_attachments(events)
        .iter()
        .filter_map(render_log_line)
        .collect()
}

fn is_custom_event(event: &Value) -> bool {
    event.get("type").and_then(Value::as_u64) == Some(CUSTOM_EVENT_KIND)
}

fn event_tag(event: &Value) -> Option<&str> {
    event
        .get("data")
        .and_then(|data| data.get("tag"))
        .and_then(Value::as_str)
}

fn event_payload(event: &Value) -> Option<&Value> {
    event.get("data").and_then(|data| data.get("payload"))
}

/// Recorder options are settings, not telemetry. Performance spans are mostly
/// rendering noise; only fetch/xhr network calls stay.
fn is_summary_relevant(event: &Value) -> bool {
    match event_tag(event) {
        Some("options") => false,
        Some("performanceSpan") => {
            let op = event_payload(event)
                .and_then(|payload| payload.get("op"))
                .and_then(Value::as_str)
                .unwrap_or("");
            !(op.starts_with("resource") || op == "memory")
                || op == "resource.xhr"
                || op == "resource.fetch"
        }
        _ => true,
    }
}

fn reshape_event(event: &Value) -> Option<Value> {
    let payload = event_payload(event)?.as_object()?.clone();
    let category = payload
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or("");
    let op = payload.get("op").and_then(Value::as_str).unwrap_or("");

    if category == "ui.click" || category == "ui.input" {
        return Some(Value::Object(without_keys(payload, &["message", "type"])));
    }
    if category == "console" {
        return Some(Value::Object(without_keys(payload, &["type", "data"])));
    }
    if op == "resource.xhr" || op == "resource.fetch" {
        return Some(reshape_network_payload(payload));
    }
    Some(reshape_default_payload(payload, event))
}

/// Network payloads lose their start timestamp in favor of a plain
/// `timestamp` and keep only the request method and status code of the
/// nested `data` object.
fn reshape_network_payload(payload: Map<String, Value>) -> Value {
    let start = payload.get("startTimestamp").cloned();
    let network_data = payload.get("data").cloned();

    let mut reshaped = without_keys(payload, &["type", "data", "startTimestamp"]);
    if !reshaped.contains_key("timestamp") {
        if let Some(start) = start {
            reshaped.insert("timestamp".to_string(), start);
        }
    }

    let mut collapsed = Map::new();
    if let Some(data) = network_data {
        if let Some(method) = data.get("method") {
            collapsed.insert("method".to_string(), method.clone());
        }
        if let Some(status_code) = data.get("statusCode") {
            collapsed.insert("statusCode".to_string(), status_code.clone());
        }
    }
    reshaped.insert("data".to_string(), Value::Object(collapsed));

    Value::Object(reshaped)
}

/// All other payloads gain a resolved `timestamp`: the payload's own value
/// when present, else its start timestamp, else the envelope time.
fn reshape_default_payload(payload: Map<String, Value>, event: &Value) -> Value {
    let mut reshaped = payload;
    if !reshaped.contains_key("timestamp") {
        let resolved = reshaped
            .get("startTimestamp")
            .cloned()
            .or_else(|| event.get("timestamp").cloned());
        if let Some(timestamp) = resolved {
            reshaped.insert("timestamp".to_string(), timestamp);
        }
    }
    Value::Object(reshaped)
}

fn without_keys(mut payload: Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    for key in keys {
        payload.remove(*key);
    }
    payload
}

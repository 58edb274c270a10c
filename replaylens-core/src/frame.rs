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

//! Replay Frame Data Model
//!
//! Telemetry recorded during a session replay arrives as one of two payload
//! shapes: breadcrumbs (discrete UI, console and lifecycle events) and spans
//! (timed operations such as network calls and paint metrics). A payload is
//! exactly one of the two, discriminated by which fields it carries.
//!
//! # Wire Format
//!
//! Payloads are camelCase JSON:
//!
//! ```json
//! {"category": "ui.click", "message": "Submit", "timestampMs": 1004.5}
//! {"op": "resource.fetch", "description": "https://...", "startTimestamp": 0, "endTimestamp": 50}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ReplaylensError, Result};

/// A discrete UI, console or lifecycle event recorded during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbFrame {
    /// Recorder category, e.g. `ui.click` or `navigation`.
    pub category: String,

    /// Human-readable payload, when the recorder attached one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Event time in milliseconds; 0 when the recorder omitted it.
    #[serde(default)]
    pub timestamp_ms: f64,

    /// Category-specific payload fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl BreadcrumbFrame {
    /// Look up a top-level `data` field.
    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }

    /// Look up a top-level `data` field as a string.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data_field(key).and_then(Value::as_str)
    }

    /// Resolve a numeric `data` field from a priority-ordered key list.
    ///
    /// The first *present* key wins, even when its value is 0; a present but
    /// non-numeric value resolves to the 0 default rather than falling back
    /// to a later key.
    pub fn data_number(&self, keys: &[&str]) -> f64 {
        keys.iter()
            .find_map(|key| self.data_field(key))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

/// A timed operation (network call, paint metric) recorded during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanFrame {
    /// Operation name, e.g. `resource.fetch` or `web-vital`.
    pub op: String,

    /// Operation subject: a request URL for network spans, a metric name for
    /// web vitals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Operation start; 0 when omitted.
    #[serde(default)]
    pub start_timestamp: f64,

    /// Operation end, when the operation completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<f64>,

    /// Event time in milliseconds; 0 when the recorder omitted it.
    #[serde(default)]
    pub timestamp_ms: f64,

    /// Operation-specific payload fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl SpanFrame {
    /// Look up a top-level `data` field.
    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }

    /// Elapsed time between start and end, treating a missing end as 0.
    pub fn duration_ms(&self) -> f64 {
        self.end_timestamp.unwrap_or(0.0) - self.start_timestamp
    }
}

/// A single replay telemetry record.
///
/// Deserialization discriminates on field presence: a payload carrying
/// `category` is a breadcrumb, otherwise a payload carrying `op` is a span.
/// A payload carrying both resolves as a breadcrumb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplayFrame {
    /// Discrete event.
    Breadcrumb(BreadcrumbFrame),
    /// Timed operation.
    Span(SpanFrame),
}

impl ReplayFrame {
    /// Parse a frame from a raw JSON payload.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|err| ReplaylensError::InvalidFrame(err.to_string()))
    }

    /// Parse a frame from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// True for discrete breadcrumb events.
    pub fn is_breadcrumb(&self) -> bool {
        matches!(self, ReplayFrame::Breadcrumb(_))
    }

    /// True for timed operations.
    pub fn is_span(&self) -> bool {
        matches!(self, ReplayFrame::Span(_))
    }

    /// Event time in milliseconds; 0 when the recorder omitted it.
    pub fn timestamp_ms(&self) -> f64 {
        match self {
            ReplayFrame::Breadcrumb(frame) => frame.timestamp_ms,
            ReplayFrame::Span(frame) => frame.timestamp_ms,
        }
    }
}

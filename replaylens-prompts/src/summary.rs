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

//! Summarization Exchange Payloads
//!
//! Wire shapes for the replay summarization endpoint. Transport, retries and
//! request signing belong to the host; only the data shapes live here.

use serde::{Deserialize, Serialize};

use crate::PromptError;

/// Batch body submitted for summarization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Ordered interaction log lines.
    pub logs: Vec<String>,
}

impl SummaryRequest {
    /// Create a request from an ordered log batch.
    pub fn new(logs: Vec<String>) -> Self {
        Self { logs }
    }

    /// JSON body as submitted to the endpoint.
    pub fn to_json(&self) -> Result<String, PromptError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Summarizer response: a narrative plus coarse time ranges of the replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Replay-level headline.
    pub title: String,
    /// Narrative summary of the session.
    pub summary: String,
    /// Periods the summarizer split the session into.
    pub time_ranges: Vec<TimeRange>,
}

impl SummaryResponse {
    /// Decode a response body.
    pub fn from_json(json: &str) -> Result<Self, PromptError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A coarse period of the replay, bounded in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Period headline.
    pub period_title: String,
    /// Period start, seconds since epoch.
    pub period_start: f64,
    /// Period end, seconds since epoch.
    pub period_end: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = SummaryRequest::new(vec![
            "User clicked on Buy at 1".to_string(),
            String::new(),
        ]);
        let body = request.to_json().unwrap();
        assert_eq!(body, r#"{"logs":["User clicked on Buy at 1",""]}"#);
    }

    #[test]
    fn test_response_round_trip() {
        let body = r#"{
            "title": "Checkout session",
            "summary": "The user browsed and bought a widget.",
            "time_ranges": [
                {"period_title": "Browsing", "period_start": 1719000000.0, "period_end": 1719000060.0}
            ]
        }"#;

        let response = SummaryResponse::from_json(body).unwrap();
        assert_eq!(response.title, "Checkout session");
        assert_eq!(response.time_ranges.len(), 1);
        assert_eq!(response.time_ranges[0].period_title, "Browsing");

        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["time_ranges"][0]["period_start"], 1719000000.0);
    }

    #[test]
    fn test_malformed_response_is_an_error() {
        let err = SummaryResponse::from_json("{\"title\": 1}").unwrap_err();
        assert!(matches!(err, PromptError::Serialization(_)));
    }
}

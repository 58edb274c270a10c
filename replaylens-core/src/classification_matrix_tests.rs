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

//! Cross-module classification/rendering matrix.
//!
//! Walks one representative frame per category and checks that classification
//! and rendering agree end to end.

use serde_json::json;

use crate::category::EventCategory;
use crate::classify::classify;
use crate::frame::ReplayFrame;
use crate::log_line::render_log_line;

struct MatrixCase {
    payload: serde_json::Value,
    category: EventCategory,
    /// Expected line; `None` for suppressed frames. `Some(None)` marks lines
    /// checked only for presence (free-form content).
    line: Option<Option<&'static str>>,
}

fn matrix() -> Vec<MatrixCase> {
    vec![
        MatrixCase {
            payload: json!({"category": "ui.click", "message": "Buy", "timestampMs": 1.0}),
            category: EventCategory::Click,
            line: Some(Some("User clicked on Buy at 1")),
        },
        MatrixCase {
            payload: json!({
                "category": "ui.slowClickDetected",
                "message": "Buy",
                "timestampMs": 2.0,
                "data": {
                    "endReason": "timeout",
                    "node": {"tagName": "button"},
                    "timeAfterClickMs": 8000.0,
                    "clickCount": 2.0,
                },
            }),
            category: EventCategory::DeadClick,
            line: Some(Some(
                "User clicked on Buy but the triggered action was slow to complete at 2",
            )),
        },
        MatrixCase {
            payload: json!({
                "category": "ui.slowClickDetected",
                "message": "Buy",
                "timestampMs": 3.0,
                "data": {
                    "endReason": "timeout",
                    "node": {"tagName": "button"},
                    "timeAfterClickMs": 8000.0,
                    "clickCount": 6.0,
                },
            }),
            category: EventCategory::RageClick,
            line: Some(Some(
                "User rage clicked on Buy but the triggered action was slow to complete at 3",
            )),
        },
        MatrixCase {
            payload: json!({"category": "navigation", "timestampMs": 4.0, "data": {"to": "/cart"}}),
            category: EventCategory::Navigation,
            line: Some(Some("User navigated to: /cart at 4")),
        },
        MatrixCase {
            payload: json!({"category": "console", "message": "boom", "timestampMs": 5.0}),
            category: EventCategory::Console,
            line: Some(Some("Logged: boom at 5")),
        },
        MatrixCase {
            payload: json!({"category": "ui.blur", "timestampMs": 6.0}),
            category: EventCategory::UiBlur,
            line: Some(Some("User looked away from the tab at 6.")),
        },
        MatrixCase {
            payload: json!({"category": "ui.focus", "timestampMs": 7.0}),
            category: EventCategory::UiFocus,
            line: Some(Some("User returned to tab at 7.")),
        },
        MatrixCase {
            payload: json!({
                "op": "resource.fetch",
                "description": "https://api.x.com/v1/users?id=1",
                "startTimestamp": 0.0,
                "endTimestamp": 50.0,
                "data": {"method": "GET", "statusCode": 200, "response": {"size": 512}},
            }),
            category: EventCategory::ResourceFetch,
            line: Some(None),
        },
        MatrixCase {
            payload: json!({"op": "resource.xhr", "startTimestamp": 0.0}),
            category: EventCategory::ResourceXhr,
            line: None,
        },
        MatrixCase {
            payload: json!({
                "op": "web-vital",
                "description": "largest-contentful-paint",
                "data": {"size": 2400, "rating": "poor"},
            }),
            category: EventCategory::Lcp,
            line: Some(Some(
                "Application largest contentful paint: 2400 ms and has a poor rating",
            )),
        },
        MatrixCase {
            payload: json!({
                "op": "web-vital",
                "description": "first-contentful-paint",
                "data": {"size": 180, "rating": "good"},
            }),
            category: EventCategory::Fcp,
            line: Some(Some(
                "Application first contentful paint: 180 ms and has a good rating",
            )),
        },
        MatrixCase {
            payload: json!({"category": "replay.hydrate-error", "timestampMs": 8.0}),
            category: EventCategory::HydrationError,
            line: Some(Some("There was a hydration error on the page at 8.")),
        },
        MatrixCase {
            payload: json!({"category": "replay.mutations", "timestampMs": 9.0}),
            category: EventCategory::Mutations,
            line: None,
        },
        MatrixCase {
            payload: json!({"category": "app.custom", "timestampMs": 10.0}),
            category: EventCategory::Unknown,
            line: Some(Some("")),
        },
        MatrixCase {
            payload: json!({"category": "sentry.feedback", "timestampMs": 11.0}),
            category: EventCategory::Feedback,
            line: Some(None),
        },
    ]
}

#[test]
fn test_every_category_is_reachable_and_renders_as_expected() {
    let cases = matrix();
    let covered: Vec<EventCategory> = cases.iter().map(|case| case.category).collect();
    for category in EventCategory::all() {
        assert!(covered.contains(&category), "matrix misses {}", category);
    }

    for case in cases {
        let frame = ReplayFrame::from_value(case.payload.clone()).unwrap();
        assert_eq!(classify(&frame), case.category, "payload {}", case.payload);

        let line = render_log_line(&frame);
        match case.line {
            None => assert_eq!(line, None, "expected suppression for {}", case.category),
            Some(None) => assert!(line.is_some(), "expected a line for {}", case.category),
            Some(Some(expected)) => {
                assert_eq!(line.as_deref(), Some(expected), "line for {}", case.category)
            }
        }
    }
}

#[test]
fn test_suppressed_categories_match_renderer() {
    for case in matrix() {
        let frame = ReplayFrame::from_value(case.payload).unwrap();
        let category = classify(&frame);
        if category.is_suppressed() {
            assert_eq!(render_log_line(&frame), None);
        }
    }
}

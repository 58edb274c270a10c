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

//! Chapter Grouping
//!
//! The summarizer returns coarse time ranges; frames are grouped into those
//! ranges for display alongside the summary text.

use serde::{Deserialize, Serialize};

use replaylens_core::ReplayFrame;

use crate::summary::TimeRange;

/// A titled slice of the replay with the frames that occurred inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter headline from the summarizer.
    pub title: String,
    /// Chapter start, milliseconds.
    pub start_ms: f64,
    /// Chapter end, milliseconds.
    pub end_ms: f64,
    /// Frames whose timestamp falls inside the chapter.
    pub frames: Vec<ReplayFrame>,
}

/// Partition frames into summarizer time ranges.
///
/// Ranges arrive in seconds and bound membership inclusively on both ends.
/// Empty chapters are kept so the display order matches the summary; a frame
/// may land in more than one chapter when ranges overlap.
pub fn assign_chapters(time_ranges: &[TimeRange], frames: &[ReplayFrame]) -> Vec<Chapter> {
    time_ranges
        .iter()
        .map(|range| {
            let start_ms = range.period_start * 1000.0;
            let end_ms = range.period_end * 1000.0;
            let members = frames
                .iter()
                .filter(|frame| {
                    frame.timestamp_ms() >= start_ms && frame.timestamp_ms() <= end_ms
                })
                .cloned()
                .collect();

            Chapter {
                title: range.period_title.clone(),
                start_ms,
                end_ms,
                frames: members,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn breadcrumb_at(timestamp_ms: f64) -> ReplayFrame {
        ReplayFrame::from_value(json!({
            "category": "ui.click",
            "timestampMs": timestamp_ms,
        }))
        .unwrap()
    }

    fn range(title: &str, start_s: f64, end_s: f64) -> TimeRange {
        TimeRange {
            period_title: title.to_string(),
            period_start: start_s,
            period_end: end_s,
        }
    }

    #[test]
    fn test_frames_land_in_their_range() {
        let frames = vec![breadcrumb_at(500.0), breadcrumb_at(800.0), breadcrumb_at(1500.0)];
        let ranges = vec![range("First", 0.0, 1.0), range("Second", 1.0, 2.0)];

        let chapters = assign_chapters(&ranges, &frames);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "First");
        assert_eq!(chapters[0].frames.len(), 2);
        assert_eq!(chapters[1].frames.len(), 1);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let frames = vec![breadcrumb_at(1000.0), breadcrumb_at(2000.0)];
        let chapters = assign_chapters(&[range("Edge", 1.0, 2.0)], &frames);
        assert_eq!(chapters[0].frames.len(), 2);
    }

    #[test]
    fn test_empty_chapters_are_preserved_in_order() {
        let frames = vec![breadcrumb_at(5000.0)];
        let ranges = vec![range("Quiet", 0.0, 1.0), range("Busy", 4.0, 6.0)];

        let chapters = assign_chapters(&ranges, &frames);
        assert_eq!(chapters.len(), 2);
        assert!(chapters[0].frames.is_empty());
        assert_eq!(chapters[1].frames.len(), 1);
        assert_eq!(chapters[1].start_ms, 4000.0);
        assert_eq!(chapters[1].end_ms, 6000.0);
    }

    #[test]
    fn test_no_ranges_no_chapters() {
        let frames = vec![breadcrumb_at(1.0)];
        assert!(assign_chapters(&[], &frames).is_empty());
    }
}

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

//! ReplayLens Prompts
//!
//! Summarization-prompt construction for session replays: turns the raw
//! replay attachment stream into the ordered log batch submitted to the
//! summarization backend, and maps the backend's response onto display
//! chapters. Fetching, signing and display belong to the host.

pub mod attachments;
pub mod chapters;
pub mod summary;


use serde_json::Value;
use thiserror::Error;

pub use attachments::{
    frames_from_attachments, reshape_attachments, summarization_logs, CUSTOM_EVENT_KIND,
};
pub use chapters::{assign_chapters, Chapter};
pub use summary::{SummaryRequest, SummaryResponse, TimeRange};

/// Errors raised while building or decoding summarization payloads.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Build the summarization request body for a raw attachment stream.
pub fn build_summary_request(events: &[Value]) -> SummaryRequest {
    SummaryRequest::new(summarization_logs(events))
}

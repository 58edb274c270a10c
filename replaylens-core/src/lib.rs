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

//! ReplayLens Core
//!
//! Frame data model, event classification and log-line rendering for session
//! replay telemetry. The pipeline is pure and synchronous: a frame goes in,
//! a category and an optional human-readable log line come out. Transport,
//! storage and display belong to the host.

pub mod category;
pub mod classify;
pub mod config;
pub mod error;
pub mod frame;
pub mod log_line;

#[cfg(test)]
mod classification_matrix_tests;

pub use category::EventCategory;
pub use classify::{classify, classify_with};
pub use config::{
    SlowClickConfig, DEFAULT_RAGE_CLICK_COUNT, DEFAULT_SLOW_CLICK_TIMEOUT_MS,
    SLOW_CLICK_TARGET_TAGS,
};
pub use error::{ReplaylensError, Result};
pub use frame::{BreadcrumbFrame, ReplayFrame, SpanFrame};
pub use log_line::{render_log_line, render_log_line_with};

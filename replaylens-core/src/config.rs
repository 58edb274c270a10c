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

//! Configuration for slow-click classification
//!
//! Thresholds that decide when a `ui.slowClickDetected` breadcrumb counts as
//! a dead click and when a dead click escalates to a rage click.

use serde::{Deserialize, Serialize};

/// Default minimum wait after a click, in milliseconds, before the
/// interaction counts as dead.
pub const DEFAULT_SLOW_CLICK_TIMEOUT_MS: f64 = 7_000.0;

/// Default minimum click count before a dead click counts as a rage click.
pub const DEFAULT_RAGE_CLICK_COUNT: f64 = 5.0;

/// Tag names eligible for dead/rage click detection. Clicks on
/// non-interactive elements are expected to do nothing and never count.
pub const SLOW_CLICK_TARGET_TAGS: [&str; 3] = ["a", "button", "input"];

/// Thresholds for dead/rage click classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlowClickConfig {
    /// Minimum wait after the click, in milliseconds.
    pub timeout_ms: f64,

    /// Minimum click count for rage-click escalation.
    pub rage_click_count: f64,
}

impl Default for SlowClickConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_SLOW_CLICK_TIMEOUT_MS,
            rage_click_count: DEFAULT_RAGE_CLICK_COUNT,
        }
    }
}

impl SlowClickConfig {
    /// Create a config with custom thresholds.
    pub fn custom(timeout_ms: f64, rage_click_count: f64) -> Self {
        Self {
            timeout_ms,
            rage_click_count,
        }
    }
}

// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crossterm::style::Color;

use crate::common::config::AppConfig;
use crate::ui::constants::FILLED_CELL;
use crate::ui::line::Line;

/// One of four fixed usage ranges, each with inclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageBand {
    Low,      // u <= 25
    Medium,   // 25 < u <= 50
    High,     // 50 < u <= 75
    Critical, // u > 75
}

impl UsageBand {
    pub fn from_usage(usage: f64) -> Self {
        if usage <= AppConfig::LOW_THRESHOLD {
            UsageBand::Low
        } else if usage <= AppConfig::MEDIUM_THRESHOLD {
            UsageBand::Medium
        } else if usage <= AppConfig::HIGH_THRESHOLD {
            UsageBand::High
        } else {
            UsageBand::Critical
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UsageBand::Low => "low",
            UsageBand::Medium => "medium",
            UsageBand::High => "high",
            UsageBand::Critical => "critical",
        }
    }
}

/// Number of filled cells for `usage` percent in a bar of `inner` cells.
///
/// The usage value is not clamped first. A bar always shows at least one
/// filled cell so idle threads stay visible, and never more than `inner`.
pub fn bar_width(usage: f64, inner: usize) -> usize {
    let raw = ((usage / 100.0) * inner as f64) as i64;
    let width = if raw < 1 { 1 } else { raw as usize };
    width.min(inner)
}

/// The bar content line: filled run, then spaces up to `inner` cells.
pub fn usage_bar(usage: f64, inner: usize, color: Option<Color>) -> Line {
    let filled = bar_width(usage, inner);
    let mut line = Line::new();
    line.push_colored(FILLED_CELL.to_string().repeat(filled), color);
    line.push_str(&" ".repeat(inner - filled));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(UsageBand::from_usage(0.0), UsageBand::Low);
        assert_eq!(UsageBand::from_usage(25.0), UsageBand::Low);
        assert_eq!(UsageBand::from_usage(25.0001), UsageBand::Medium);
        assert_eq!(UsageBand::from_usage(50.0), UsageBand::Medium);
        assert_eq!(UsageBand::from_usage(50.0001), UsageBand::High);
        assert_eq!(UsageBand::from_usage(75.0), UsageBand::High);
        assert_eq!(UsageBand::from_usage(75.0001), UsageBand::Critical);
        assert_eq!(UsageBand::from_usage(100.0), UsageBand::Critical);
        assert_eq!(UsageBand::from_usage(250.0), UsageBand::Critical);
        assert_eq!(UsageBand::from_usage(-5.0), UsageBand::Low);
    }

    #[test]
    fn test_band_names() {
        assert_eq!(UsageBand::Low.name(), "low");
        assert_eq!(UsageBand::Critical.name(), "critical");
    }

    #[test]
    fn test_bar_width_minimum_and_maximum() {
        assert_eq!(bar_width(0.0, 22), 1);
        assert_eq!(bar_width(100.0, 8), 8);
        assert_eq!(bar_width(150.0, 8), 8);
        assert_eq!(bar_width(-20.0, 8), 1);
        assert_eq!(bar_width(f64::NAN, 8), 1);
    }

    #[test]
    fn test_bar_width_truncates() {
        assert_eq!(bar_width(50.0, 8), 4);
        assert_eq!(bar_width(75.0, 8), 6);
        assert_eq!(bar_width(10.0, 8), 1);
        assert_eq!(bar_width(20.3, 22), 4);
    }

    #[test]
    fn test_bar_width_stays_in_range() {
        for inner in 1..30 {
            let mut usage = 0.0;
            while usage <= 100.0 {
                let width = bar_width(usage, inner);
                assert!((1..=inner).contains(&width), "usage {usage} inner {inner}");
                usage += 0.5;
            }
        }
    }

    #[test]
    fn test_bar_width_zero_inner() {
        assert_eq!(bar_width(50.0, 0), 0);
    }

    #[test]
    fn test_usage_bar_layout() {
        let bar = usage_bar(50.0, 8, Some(Color::DarkYellow));
        assert_eq!(bar.plain(), "████    ");
        assert_eq!(bar.width(), 8);
        assert_eq!(bar.spans()[0].color, Some(Color::DarkYellow));

        let full = usage_bar(100.0, 8, None);
        assert_eq!(full.plain(), "████████");
        assert_eq!(full.spans().len(), 1);
    }
}

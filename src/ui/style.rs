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

use crate::common::config::ThemeConfig;
use crate::ui::constants::{
    CORE_WIDTH, LEGACY_CORE_WIDTH, LEGACY_PANEL_WIDTH, LEGACY_THREAD_WIDTH, PANEL_WIDTH,
    THREAD_WIDTH,
};
use crate::ui::widgets::UsageBand;

/// Maps a usage band to the color of the filled bar run.
pub type BandPalette = fn(UsageBand) -> Color;

/// Whether thread boxes carry a usage bar, and how it is colored.
#[derive(Debug, Clone, Copy)]
pub enum BarMode {
    /// Thread boxes are border, label, border.
    Hidden,
    /// A bar line sits under the label; `None` leaves the run uncolored.
    Shown { palette: Option<BandPalette> },
}

/// Fixed widths and bar mode shared by every renderer of one panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelStyle {
    pub panel_width: usize,
    pub core_width: usize,
    pub thread_width: usize,
    pub bars: BarMode,
}

impl PanelStyle {
    /// Usage bars colored by the four usage bands.
    pub fn standard() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            core_width: CORE_WIDTH,
            thread_width: THREAD_WIDTH,
            bars: BarMode::Shown {
                palette: Some(ThemeConfig::band_color),
            },
        }
    }

    /// Usage bars without color attributes.
    pub fn monochrome() -> Self {
        Self {
            bars: BarMode::Shown { palette: None },
            ..Self::standard()
        }
    }

    /// The narrow bar-less layout.
    pub fn legacy() -> Self {
        Self {
            panel_width: LEGACY_PANEL_WIDTH,
            core_width: LEGACY_CORE_WIDTH,
            thread_width: LEGACY_THREAD_WIDTH,
            bars: BarMode::Hidden,
        }
    }

    /// Standard style on a terminal, monochrome when output is redirected.
    pub fn for_output(is_terminal: bool) -> Self {
        if is_terminal {
            Self::standard()
        } else {
            Self::monochrome()
        }
    }

    pub fn shows_bars(&self) -> bool {
        matches!(self.bars, BarMode::Shown { .. })
    }

    /// Color of the filled run for `band`, if this style colors bars at all.
    pub fn bar_color(&self, band: UsageBand) -> Option<Color> {
        match self.bars {
            BarMode::Shown {
                palette: Some(palette),
            } => Some(palette(band)),
            _ => None,
        }
    }
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self::standard()
    }
}

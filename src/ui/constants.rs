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

//! Box-drawing glyphs and the fixed widths of the three nested box levels.

pub const TOP_LEFT: char = '┌';
pub const TOP_RIGHT: char = '┐';
pub const BOTTOM_LEFT: char = '└';
pub const BOTTOM_RIGHT: char = '┘';
pub const VERTICAL: char = '│';
pub const HORIZONTAL: char = '─';
pub const FILLED_CELL: char = '█';

// Widths with usage bars
pub const PANEL_WIDTH: usize = 61;
pub const CORE_WIDTH: usize = 28;
pub const THREAD_WIDTH: usize = 24;

// Narrower widths of the bar-less layout
pub const LEGACY_PANEL_WIDTH: usize = 49;
pub const LEGACY_CORE_WIDTH: usize = 22;
pub const LEGACY_THREAD_WIDTH: usize = 16;

pub const CORES_PER_ROW: usize = 2;

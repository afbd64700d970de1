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

use crate::ui::constants::{CORES_PER_ROW, VERTICAL};
use crate::ui::line::{Block, Line};
use crate::ui::renderers::core_renderer::render_core_box;
use crate::ui::style::PanelStyle;

/// Lays out up to [`CORES_PER_ROW`] core boxes side by side inside the panel.
///
/// Each output line is the panel's left border, a space, the core lines
/// joined by a space, right-padding, then ` │`. The padding is applied at
/// the end of the line, so a lone core in the last row is left-aligned.
/// A core whose box has run out of lines simply stops contributing.
pub fn render_core_row(
    row: usize,
    cores_in_row: usize,
    threads_per_core: usize,
    usage: &[f64],
    style: &PanelStyle,
) -> Block {
    let core_boxes: Vec<Block> = (0..cores_in_row)
        .map(|i| render_core_box(row * CORES_PER_ROW + i, threads_per_core, usage, style))
        .collect();
    let max_height = core_boxes.iter().map(Vec::len).max().unwrap_or(0);
    let content_width = style.panel_width.saturating_sub(2);

    (0..max_height)
        .map(|line_num| {
            let mut line = Line::new();
            line.push_char(VERTICAL);
            for (i, core_box) in core_boxes.iter().enumerate() {
                if let Some(core_line) = core_box.get(line_num) {
                    if i == 0 {
                        line.push_str(" ");
                    }
                    line.append(core_line);
                    if i + 1 < cores_in_row {
                        line.push_str(" ");
                    }
                }
            }
            line.pad_to(content_width);
            line.push_str(" ");
            line.push_char(VERTICAL);
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_cores_fill_panel_width() {
        let style = PanelStyle::standard();
        let usage = [10.0, 20.0, 90.0, 45.0];
        let block = render_core_row(0, 2, 2, &usage, &style);

        assert_eq!(block.len(), 3 + 2 * 4);
        for line in &block {
            assert_eq!(line.width(), style.panel_width);
            let plain = line.plain();
            assert!(plain.starts_with("│ "));
            assert!(plain.ends_with(" │"));
        }
        assert_eq!(
            block[0].plain(),
            format!("│ ┌{0}┐ ┌{0}┐ │", "─".repeat(26))
        );
    }

    #[test]
    fn test_lone_core_is_left_aligned() {
        let style = PanelStyle::standard();
        let usage = vec![5.0; 5];
        let block = render_core_row(2, 1, 1, &usage, &style);

        assert_eq!(block.len(), 7);
        assert_eq!(
            block[1].plain(),
            format!("│ │{:^26}│{} │", "Core 4", " ".repeat(29))
        );
        assert!(block.iter().all(|line| line.width() == style.panel_width));
    }

    #[test]
    fn test_second_row_core_indices() {
        let usage = vec![0.0; 4];
        let block = render_core_row(1, 2, 1, &usage, &PanelStyle::standard());
        let label = block[1].plain();
        assert!(label.contains("Core 2"));
        assert!(label.contains("Core 3"));
        assert!(block[3].plain().contains("Thread 2"));
        assert!(block[3].plain().contains("Thread 3"));
    }

    #[test]
    fn test_legacy_row_width() {
        let style = PanelStyle::legacy();
        let usage = vec![0.0; 4];
        let block = render_core_row(0, 2, 2, &usage, &style);
        assert!(block.iter().all(|line| line.width() == style.panel_width));
    }

    #[test]
    fn test_row_keeps_bar_colors() {
        let style = PanelStyle::standard();
        let block = render_core_row(0, 2, 1, &[10.0, 80.0], &style);
        let colors: Vec<_> = block[4].spans().iter().filter_map(|s| s.color).collect();
        assert_eq!(colors.len(), 2);
        assert_ne!(colors[0], colors[1]);
    }
}

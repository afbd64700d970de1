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

use std::io::Write;

use crate::device::Snapshot;
use crate::ui::chrome::{bottom_border, label_line, top_border};
use crate::ui::constants::CORES_PER_ROW;
use crate::ui::line::Block;
use crate::ui::renderers::row_renderer::render_core_row;
use crate::ui::style::PanelStyle;

/// Renders the whole topology panel for one snapshot.
pub struct PanelRenderer {
    style: PanelStyle,
}

impl Default for PanelRenderer {
    fn default() -> Self {
        Self::new(PanelStyle::standard())
    }
}

impl PanelRenderer {
    pub fn new(style: PanelStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    pub fn render(&self, snapshot: &Snapshot) -> Block {
        render_panel(snapshot, &self.style)
    }

    /// Writes the panel line by line, each terminated by `\n`.
    pub fn write<W: Write>(&self, writer: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
        for line in self.render(snapshot) {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

/// Outer panel: name and clock header, then every row of cores.
pub fn render_panel(snapshot: &Snapshot, style: &PanelStyle) -> Block {
    let width = style.panel_width;
    let mut block = vec![
        top_border(width),
        label_line(snapshot.name(), width),
        label_line(&format_clock(snapshot.clock_mhz()), width),
    ];

    let core_count = snapshot.core_count();
    let rows = core_count.div_ceil(CORES_PER_ROW);
    for row in 0..rows {
        let cores_in_row = (core_count - row * CORES_PER_ROW).min(CORES_PER_ROW);
        block.extend(render_core_row(
            row,
            cores_in_row,
            snapshot.threads_per_core(),
            snapshot.usage(),
            style,
        ));
    }

    block.push(bottom_border(width));
    block
}

/// Clock speed rounded to whole megahertz, e.g. `3600MHz`.
pub fn format_clock(clock_mhz: f64) -> String {
    format!("{clock_mhz:2.0}MHz")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::line::plain_lines;

    fn i7_snapshot() -> Snapshot {
        Snapshot::new("Intel Core i7-9700K", 3600.0, 2, 1, vec![10.5, 20.3])
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(3600.0), "3600MHz");
        assert_eq!(format_clock(2394.6), "2395MHz");
        assert_eq!(format_clock(5.0), " 5MHz");
    }

    #[test]
    fn test_two_core_panel() {
        let style = PanelStyle::standard();
        let block = render_panel(&i7_snapshot(), &style);
        let lines = plain_lines(&block);

        // header (3) + one row of 1-thread cores (7) + bottom border
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], format!("┌{}┐", "─".repeat(59)));
        assert_eq!(lines[1], format!("│{:^59}│", "Intel Core i7-9700K"));
        assert_eq!(lines[2], format!("│{:^59}│", "3600MHz"));
        assert_eq!(lines[10], format!("└{}┘", "─".repeat(59)));
        assert!(lines[4].contains("Core 0") && lines[4].contains("Core 1"));
        assert!(block.iter().all(|line| line.width() == style.panel_width));

        // 10.5% and 20.3% of 22 cells: 2 and 4 cells, both in the low band
        let bar_line = &lines[7];
        assert!(bar_line.contains(&format!("│██{}│", " ".repeat(20))));
        assert!(bar_line.contains(&format!("│████{}│", " ".repeat(18))));
    }

    #[test]
    fn test_five_cores_make_three_rows() {
        let style = PanelStyle::standard();
        let snapshot = Snapshot::new("Test CPU", 2000.0, 5, 1, vec![50.0; 5]);
        let lines = plain_lines(&render_panel(&snapshot, &style));

        assert_eq!(lines.len(), 3 + 3 * 7 + 1);
        let last_row_label = &lines[3 + 2 * 7 + 1];
        assert!(last_row_label.starts_with(&format!("│ │{:^26}│", "Core 4")));
        assert!(last_row_label.ends_with(&format!("{} │", " ".repeat(29))));
    }

    #[test]
    fn test_zero_threads_per_core() {
        let snapshot = Snapshot::new("Test CPU", 1000.0, 3, 0, Vec::new());
        let lines = plain_lines(&render_panel(&snapshot, &PanelStyle::standard()));
        assert_eq!(lines.len(), 3 + 2 * 3 + 1);
        assert!(!lines.iter().any(|line| line.contains("Thread")));
    }

    #[test]
    fn test_long_name_overflows() {
        let name = "X".repeat(70);
        let snapshot = Snapshot::new(name.clone(), 1000.0, 1, 1, vec![1.0]);
        let lines = plain_lines(&render_panel(&snapshot, &PanelStyle::standard()));
        assert_eq!(lines[1], format!("│{name}│"));
    }

    #[test]
    fn test_write_panel() {
        let renderer = PanelRenderer::new(PanelStyle::monochrome());
        let mut writer = Vec::new();
        renderer.write(&mut writer, &i7_snapshot()).unwrap();

        let output = String::from_utf8(writer).unwrap();
        assert_eq!(output.lines().count(), 11);
        assert!(output.ends_with("┘\n"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_write_panel_with_colors() {
        let renderer = PanelRenderer::default();
        let mut writer = Vec::new();
        renderer.write(&mut writer, &i7_snapshot()).unwrap();
        assert!(String::from_utf8(writer).unwrap().contains('\u{1b}'));
    }
}

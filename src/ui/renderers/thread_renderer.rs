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

use crate::ui::chrome::{bottom_border, framed, label_line, top_border};
use crate::ui::line::Block;
use crate::ui::style::{BarMode, PanelStyle};
use crate::ui::widgets::{usage_bar, UsageBand};

/// Builds the box for one hardware thread.
///
/// With bars shown the box has four lines: top border, `Thread <index>`
/// label, usage bar, bottom border. The bar-less layout drops the bar line.
/// A label wider than `width - 2` is kept whole, so that line may be longer
/// than the borders.
pub fn render_thread_box(thread_index: usize, width: usize, usage: f64, style: &PanelStyle) -> Block {
    let inner = width.saturating_sub(2);
    let mut block = Vec::with_capacity(4);

    block.push(top_border(width));
    block.push(label_line(&format!("Thread {thread_index}"), width));

    if let BarMode::Shown { .. } = style.bars {
        let color = style.bar_color(UsageBand::from_usage(usage));
        block.push(framed(&usage_bar(usage, inner, color), 0));
    }

    block.push(bottom_border(width));
    block
}

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
use crate::ui::renderers::thread_renderer::render_thread_box;
use crate::ui::style::PanelStyle;

/// Builds the box for one physical core with its thread boxes stacked inside.
///
/// Thread `t` of core `c` reads `usage[c * threads_per_core + t]`.
///
/// # Panics
///
/// Panics if `usage` is shorter than `(core_index + 1) * threads_per_core`.
/// [`crate::device::Snapshot`] guarantees the length by construction.
pub fn render_core_box(
    core_index: usize,
    threads_per_core: usize,
    usage: &[f64],
    style: &PanelStyle,
) -> Block {
    let width = style.core_width;
    let padding = width.saturating_sub(style.thread_width + 2) / 2;

    let mut block = Vec::with_capacity(3 + threads_per_core * 4);
    block.push(top_border(width));
    block.push(label_line(&format!("Core {core_index}"), width));

    for t in 0..threads_per_core {
        let thread_index = core_index * threads_per_core + t;
        let thread_usage = usage.get(thread_index).copied().unwrap_or_else(|| {
            panic!(
                "usage has {} entries but thread {thread_index} of core {core_index} was requested",
                usage.len()
            )
        });
        let thread_box = render_thread_box(thread_index, style.thread_width, thread_usage, style);
        block.extend(thread_box.iter().map(|line| framed(line, padding)));
    }

    block.push(bottom_border(width));
    block
}

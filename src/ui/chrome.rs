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

//! Border pieces shared by the thread, core and panel boxes.

use crate::ui::constants::{
    BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, TOP_LEFT, TOP_RIGHT, VERTICAL,
};
use crate::ui::line::Line;
use crate::ui::text::{center_text, horizontal_rule};

/// `┌───┐` spanning `width` columns in total.
pub fn top_border(width: usize) -> Line {
    rule_line(TOP_LEFT, width, TOP_RIGHT)
}

/// `└───┘` spanning `width` columns in total.
pub fn bottom_border(width: usize) -> Line {
    rule_line(BOTTOM_LEFT, width, BOTTOM_RIGHT)
}

/// `│label│` with the label centered between the side borders.
pub fn label_line(label: &str, width: usize) -> Line {
    Line::raw(format!(
        "{VERTICAL}{}{VERTICAL}",
        center_text(label, width.saturating_sub(2))
    ))
}

/// Wraps `content` in side borders with `padding` spaces on each side.
pub fn framed(content: &Line, padding: usize) -> Line {
    let pad = " ".repeat(padding);
    let mut line = Line::new();
    line.push_char(VERTICAL);
    line.push_str(&pad);
    line.append(content);
    line.push_str(&pad);
    line.push_char(VERTICAL);
    line
}

fn rule_line(left: char, width: usize, right: char) -> Line {
    Line::raw(format!(
        "{left}{}{right}",
        horizontal_rule(width.saturating_sub(2), HORIZONTAL)
    ))
}

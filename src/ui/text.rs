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

use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Centers `text` in a field of `width` columns.
///
/// Text at least as wide as the field is returned untouched and may overflow
/// the surrounding border. Odd leftover space goes to the right.
pub fn center_text(text: &str, width: usize) -> String {
    let text_len = display_width(text);
    if text_len >= width {
        return text.to_string();
    }
    let left_pad = (width - text_len) / 2;
    let right_pad = width - text_len - left_pad;
    format!("{}{text}{}", " ".repeat(left_pad), " ".repeat(right_pad))
}

/// `glyph` repeated `width` times.
pub fn horizontal_rule(width: usize, glyph: char) -> String {
    glyph.to_string().repeat(width)
}

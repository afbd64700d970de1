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

use std::fmt;

use crossterm::style::{style, Color, Stylize};

use crate::ui::text::display_width;

/// A run of text sharing one optional foreground color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub color: Option<Color>,
}

/// One terminal line built from spans.
///
/// Width arithmetic always works on the uncolored text, so wrapping a run in
/// a color never changes how the line is measured or padded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

/// A rendered rectangle: lines ordered top to bottom.
pub type Block = Vec<Line>;

impl Line {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push_str(&text.into());
        line
    }

    /// Appends uncolored text, merging with a trailing uncolored span.
    pub fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.color.is_none() => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                color: None,
            }),
        }
    }

    pub fn push_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.push_str(c.encode_utf8(&mut buf));
    }

    pub fn push_colored(&mut self, text: String, color: Option<Color>) {
        match color {
            None => self.push_str(&text),
            Some(_) if text.is_empty() => {}
            Some(_) => self.spans.push(Span { text, color }),
        }
    }

    /// Appends every span of `other`, keeping its colors.
    pub fn append(&mut self, other: &Line) {
        for span in &other.spans {
            self.push_colored(span.text.clone(), span.color);
        }
    }

    /// Right-pads with spaces until the uncolored width reaches `width`.
    pub fn pad_to(&mut self, width: usize) {
        let current = self.width();
        if current < width {
            self.push_str(&" ".repeat(width - current));
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }

    /// Text without any color attributes.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            match span.color {
                Some(color) => write!(f, "{}", style(span.text.as_str()).with(color))?,
                None => f.write_str(&span.text)?,
            }
        }
        Ok(())
    }
}

/// Uncolored text of every line in a block.
pub fn plain_lines(block: &[Line]) -> Vec<String> {
    block.iter().map(Line::plain).collect()
}

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

use std::io::stdout;

use crossterm::{cursor, execute};

/// Hides the cursor for a watch session and restores it when dropped,
/// including when the loop ends on Ctrl-C or an error.
pub struct TerminalManager {
    initialized: bool,
}

impl TerminalManager {
    pub fn new() -> Self {
        let initialized = execute!(stdout(), cursor::Hide).is_ok();
        Self { initialized }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.initialized {
            let _ = execute!(stdout(), cursor::Show);
        }
    }
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}

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

pub mod core_renderer;
pub mod panel_renderer;
pub mod row_renderer;
pub mod thread_renderer;

pub use core_renderer::render_core_box;
pub use panel_renderer::{format_clock, render_panel, PanelRenderer};
pub use row_renderer::render_core_row;
pub use thread_renderer::render_thread_box;

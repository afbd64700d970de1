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

//! coreview draws the physical topology of the local processor (package,
//! cores, hardware threads) as nested boxes, with a usage bar in every
//! hardware thread's box.
//!
//! The rendering engine in [`ui`] is pure: it turns a [`device::Snapshot`]
//! into lines. Readings come from a [`device::MetricsSource`], and [`view`]
//! drives one-shot and watch modes.

pub mod cli;
pub mod device;
pub mod error;
pub mod mock;
pub mod ui;
pub mod view;

pub mod common {
    pub mod config;
}

pub use error::{Error, Result};

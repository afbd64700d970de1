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

//! Error types for coreview.
//!
//! Only two conditions are reported to the user: the CPU metrics could not
//! be read, or the command line asked for something out of range. Both end
//! the run; there is no degraded rendering mode.

use thiserror::Error;

/// The main error type for coreview operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Topology or utilization query failed, or returned no logical units.
    ///
    /// Fatal to the whole run: no partial panel is ever drawn.
    #[error("Failed to fetch CPU metrics: {0}")]
    MetricsUnavailable(String),

    /// A command-line value was outside its accepted range.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// Writing the panel to the terminal failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for coreview operations.
pub type Result<T> = std::result::Result<T, Error>;

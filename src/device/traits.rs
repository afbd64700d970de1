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

use std::time::Duration;

use async_trait::async_trait;

use crate::device::CpuTopology;
use crate::error::Result;

/// Source of CPU topology and utilization readings.
///
/// The renderer never talks to the OS directly; it only sees snapshots built
/// from a source, so tests can substitute a fixed one.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Model name, clock speed and per-logical-unit core IDs.
    ///
    /// Fails with `MetricsUnavailable` if the query fails or reports no units.
    async fn describe_topology(&self) -> Result<CpuTopology>;

    /// Utilization percentages averaged over `interval`.
    ///
    /// With `per_unit` one value per logical unit is returned, in topology
    /// order; otherwise a single system-wide value.
    async fn sample_utilization(&self, interval: Duration, per_unit: bool) -> Result<Vec<f64>>;
}

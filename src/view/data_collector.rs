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

use tracing::debug;

use crate::common::config::EnvConfig;
use crate::device::{MetricsSource, Snapshot};
use crate::error::{Error, Result};

/// Reads a fresh topology and a per-unit utilization sample, then derives
/// the snapshot for one tick. Blocks for the sampling interval.
pub async fn collect_snapshot(source: &dyn MetricsSource) -> Result<Snapshot> {
    let topology = source.describe_topology().await?;
    if topology.core_ids.is_empty() {
        return Err(Error::MetricsUnavailable(
            "no logical processors reported".to_string(),
        ));
    }

    let usage = source
        .sample_utilization(EnvConfig::sample_interval(), true)
        .await?;

    debug!(
        "{}: {} cores x {} threads, {} usage samples",
        topology.model_name,
        topology.physical_cores(),
        topology.threads_per_core(),
        usage.len()
    );
    Ok(Snapshot::from_topology(topology, usage))
}

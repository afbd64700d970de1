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
use sysinfo::{CpuRefreshKind, System, MINIMUM_CPU_UPDATE_INTERVAL};
use tokio::sync::Mutex;
use tracing::debug;

use crate::device::cpu_linux::{read_core_ids, PROC_CPUINFO};
use crate::device::{CpuTopology, MetricsSource};
use crate::error::{Error, Result};

/// Reads topology and utilization of the local machine through `sysinfo`.
pub struct SysinfoMetricsSource {
    system: Mutex<System>,
}

impl Default for SysinfoMetricsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoMetricsSource {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_specifics(CpuRefreshKind::everything());
        Self {
            system: Mutex::new(system),
        }
    }
}

#[async_trait]
impl MetricsSource for SysinfoMetricsSource {
    async fn describe_topology(&self) -> Result<CpuTopology> {
        let mut system = self.system.lock().await;
        system.refresh_cpu_specifics(CpuRefreshKind::nothing().with_frequency());

        let cpus = system.cpus();
        let Some(first) = cpus.first() else {
            return Err(Error::MetricsUnavailable(
                "no logical processors reported".to_string(),
            ));
        };

        let logical_units = cpus.len();
        let core_ids = local_core_ids(logical_units);
        debug!(
            "{logical_units} logical units, {} core IDs from the OS",
            core_ids.len()
        );

        Ok(CpuTopology {
            model_name: first.brand().trim().to_string(),
            clock_mhz: first.frequency() as f64,
            core_ids,
        })
    }

    async fn sample_utilization(&self, interval: Duration, per_unit: bool) -> Result<Vec<f64>> {
        let mut system = self.system.lock().await;

        // Usage is the delta between two refreshes at least this far apart
        system.refresh_cpu_usage();
        tokio::time::sleep(interval.max(MINIMUM_CPU_UPDATE_INTERVAL)).await;
        system.refresh_cpu_usage();

        if system.cpus().is_empty() {
            return Err(Error::MetricsUnavailable(
                "utilization sample returned no logical processors".to_string(),
            ));
        }

        if per_unit {
            Ok(system
                .cpus()
                .iter()
                .map(|cpu| cpu.cpu_usage() as f64)
                .collect())
        } else {
            Ok(vec![system.global_cpu_usage() as f64])
        }
    }
}

/// Core ID of every logical unit: from `/proc/cpuinfo` where available,
/// otherwise consecutive units are grouped onto the physical core count.
fn local_core_ids(logical_units: usize) -> Vec<String> {
    if cfg!(target_os = "linux") {
        if let Some(ids) = read_core_ids(PROC_CPUINFO) {
            if ids.len() == logical_units {
                return ids;
            }
            debug!(
                "{PROC_CPUINFO} lists {} units, sysinfo {logical_units}; grouping instead",
                ids.len()
            );
        }
    }
    synthesize_core_ids(logical_units, num_cpus::get_physical())
}

/// Assigns `logical_units` evenly to `physical_cores` cores in order.
pub fn synthesize_core_ids(logical_units: usize, physical_cores: usize) -> Vec<String> {
    let physical_cores = physical_cores.clamp(1, logical_units.max(1));
    let per_core = logical_units.div_ceil(physical_cores).max(1);
    (0..logical_units)
        .map(|unit| (unit / per_core).to_string())
        .collect()
}

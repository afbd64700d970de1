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

use tracing::warn;

/// Processor identity plus the core each logical unit belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTopology {
    pub model_name: String,
    pub clock_mhz: f64,
    pub core_ids: Vec<String>, // One entry per logical unit, OS order
}

impl CpuTopology {
    pub fn logical_units(&self) -> usize {
        self.core_ids.len()
    }

    /// Number of distinct core IDs.
    pub fn physical_cores(&self) -> usize {
        let mut ids: Vec<&str> = self.core_ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Logical units divided evenly across physical cores, truncating.
    pub fn threads_per_core(&self) -> usize {
        match self.physical_cores() {
            0 => 0,
            cores => self.logical_units() / cores,
        }
    }
}

/// Everything one panel render needs, captured at a single tick.
///
/// `usage[core * threads_per_core + thread]` is the utilization of that
/// hardware thread. The constructor guarantees the sequence covers every
/// thread box that will be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    name: String,
    clock_mhz: f64,
    core_count: usize,
    threads_per_core: usize,
    usage: Vec<f64>,
}

impl Snapshot {
    /// Builds a snapshot, padding `usage` with idle (0%) entries if it is
    /// shorter than `core_count * threads_per_core`.
    pub fn new(
        name: impl Into<String>,
        clock_mhz: f64,
        core_count: usize,
        threads_per_core: usize,
        mut usage: Vec<f64>,
    ) -> Self {
        let required = core_count * threads_per_core;
        if usage.len() < required {
            warn!(
                "utilization covers {} of {required} hardware threads, treating the rest as idle",
                usage.len()
            );
            usage.resize(required, 0.0);
        }
        Self {
            name: name.into(),
            clock_mhz,
            core_count,
            threads_per_core,
            usage,
        }
    }

    /// Derives core and thread counts from a topology and pairs them with
    /// a per-unit utilization sample.
    pub fn from_topology(topology: CpuTopology, usage: Vec<f64>) -> Self {
        let core_count = topology.physical_cores();
        let threads_per_core = topology.threads_per_core();
        Self::new(
            topology.model_name,
            topology.clock_mhz,
            core_count,
            threads_per_core,
            usage,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clock_mhz(&self) -> f64 {
        self.clock_mhz
    }

    pub fn core_count(&self) -> usize {
        self.core_count
    }

    pub fn threads_per_core(&self) -> usize {
        self.threads_per_core
    }

    pub fn usage(&self) -> &[f64] {
        &self.usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topology(core_ids: &[&str]) -> CpuTopology {
        CpuTopology {
            model_name: "Test CPU".to_string(),
            clock_mhz: 2400.0,
            core_ids: core_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_counts_with_hyperthreading() {
        let topo = topology(&["0", "1", "2", "3", "0", "1", "2", "3"]);
        assert_eq!(topo.logical_units(), 8);
        assert_eq!(topo.physical_cores(), 4);
        assert_eq!(topo.threads_per_core(), 2);
    }

    #[test]
    fn test_uneven_topology_truncates() {
        // 6 P-core threads + 4 E-cores: 10 units over 7 cores
        let topo = topology(&["0", "0", "1", "1", "2", "2", "3", "4", "5", "6"]);
        assert_eq!(topo.physical_cores(), 7);
        assert_eq!(topo.threads_per_core(), 1);
    }

    #[test]
    fn test_empty_topology() {
        let topo = topology(&[]);
        assert_eq!(topo.physical_cores(), 0);
        assert_eq!(topo.threads_per_core(), 0);
    }

    #[test]
    fn test_snapshot_from_topology() {
        let snapshot = Snapshot::from_topology(topology(&["0", "1"]), vec![10.5, 20.3]);
        assert_eq!(snapshot.name(), "Test CPU");
        assert_eq!(snapshot.clock_mhz(), 2400.0);
        assert_eq!(snapshot.core_count(), 2);
        assert_eq!(snapshot.threads_per_core(), 1);
        assert_eq!(snapshot.usage(), &[10.5, 20.3]);
    }

    #[test]
    fn test_short_usage_is_padded() {
        let snapshot = Snapshot::new("Test CPU", 1000.0, 2, 2, vec![40.0]);
        assert_eq!(snapshot.usage(), &[40.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_long_usage_is_kept() {
        let snapshot = Snapshot::new("Test CPU", 1000.0, 1, 1, vec![1.0, 2.0, 3.0]);
        assert_eq!(snapshot.usage().len(), 3);
    }
}

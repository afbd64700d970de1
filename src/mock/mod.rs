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

//! Fixed metrics source for tests and demos.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::device::{CpuTopology, MetricsSource};
use crate::error::{Error, Result};

/// Returns the same topology and utilization on every call, never sleeping.
pub struct MockMetricsSource {
    topology: Option<CpuTopology>,
    usage: Option<Vec<f64>>,
    samples: AtomicUsize,
}

impl MockMetricsSource {
    pub fn new(topology: CpuTopology, usage: Vec<f64>) -> Self {
        Self {
            topology: Some(topology),
            usage: Some(usage),
            samples: AtomicUsize::new(0),
        }
    }

    /// Two single-thread cores of an i7-9700K at 3600 MHz.
    pub fn i7_9700k() -> Self {
        Self::new(
            CpuTopology {
                model_name: "Intel Core i7-9700K".to_string(),
                clock_mhz: 3600.0,
                core_ids: vec!["0".to_string(), "1".to_string()],
            },
            vec![10.5, 20.3],
        )
    }

    /// Topology query fails.
    pub fn without_topology() -> Self {
        Self {
            topology: None,
            usage: Some(Vec::new()),
            samples: AtomicUsize::new(0),
        }
    }

    /// Topology succeeds but sampling fails.
    pub fn without_samples(topology: CpuTopology) -> Self {
        Self {
            topology: Some(topology),
            usage: None,
            samples: AtomicUsize::new(0),
        }
    }

    /// How many times utilization has been sampled.
    pub fn sample_count(&self) -> usize {
        self.samples.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MetricsSource for MockMetricsSource {
    async fn describe_topology(&self) -> Result<CpuTopology> {
        match &self.topology {
            Some(topology) if !topology.core_ids.is_empty() => Ok(topology.clone()),
            Some(_) => Err(Error::MetricsUnavailable(
                "no logical processors reported".to_string(),
            )),
            None => Err(Error::MetricsUnavailable(
                "mock topology query failed".to_string(),
            )),
        }
    }

    async fn sample_utilization(&self, _interval: Duration, per_unit: bool) -> Result<Vec<f64>> {
        self.samples.fetch_add(1, Ordering::Relaxed);
        let usage = self.usage.as_ref().ok_or_else(|| {
            Error::MetricsUnavailable("mock utilization sample failed".to_string())
        })?;
        if per_unit {
            Ok(usage.clone())
        } else if usage.is_empty() {
            Ok(vec![0.0])
        } else {
            Ok(vec![usage.iter().sum::<f64>() / usage.len() as f64])
        }
    }
}

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

use clap::Parser;

use crate::common::config::{AppConfig, EnvConfig};
use crate::error::{Error, Result};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Refresh the CPU panel continuously instead of drawing it once.
    #[arg(short, long)]
    pub watch: bool,
    /// Refresh rate in seconds (1-10).
    #[arg(
        short,
        long,
        default_value_t = AppConfig::DEFAULT_REFRESH_SECS as i64,
        allow_negative_numbers = true
    )]
    pub rate: i64,
}

impl Cli {
    /// Delay between watch-mode ticks, rejecting rates outside 1-10 seconds.
    pub fn refresh_interval(&self) -> Result<Duration> {
        EnvConfig::validate_refresh_secs(self.rate)
            .map(Duration::from_secs)
            .map_err(Error::InvalidConfiguration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["coreview"]).unwrap();
        assert!(!cli.watch);
        assert_eq!(cli.rate, 2);
        assert_eq!(cli.refresh_interval().unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_watch_with_rate() {
        let cli = Cli::try_parse_from(["coreview", "--watch", "--rate", "10"]).unwrap();
        assert!(cli.watch);
        assert_eq!(cli.refresh_interval().unwrap(), Duration::from_secs(10));

        let cli = Cli::try_parse_from(["coreview", "-w", "-r", "1"]).unwrap();
        assert!(cli.watch);
        assert_eq!(cli.refresh_interval().unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn test_rate_out_of_range() {
        for rate in ["0", "11", "-1"] {
            let cli = Cli::try_parse_from(["coreview", "--rate", rate]).unwrap();
            match cli.refresh_interval() {
                Err(Error::InvalidConfiguration(msg)) => {
                    assert!(msg.contains(&format!("Invalid refresh rate: {rate}.")));
                }
                other => panic!("expected InvalidConfiguration for {rate}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["coreview", "--theme", "dark"]).is_err());
    }
}

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

use std::fs;
use std::path::Path;

use tracing::debug;

pub const PROC_CPUINFO: &str = "/proc/cpuinfo";

/// Reads per-logical-unit core IDs from a cpuinfo file.
///
/// Returns `None` when the file cannot be read or does not carry a core ID
/// for every processor (common on ARM kernels).
pub fn read_core_ids(path: impl AsRef<Path>) -> Option<Vec<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => parse_core_ids(&content),
        Err(e) => {
            debug!("cannot read {}: {e}", path.display());
            None
        }
    }
}

/// Extracts the `core id` of every `processor` block, in file order.
pub fn parse_core_ids(content: &str) -> Option<Vec<String>> {
    let mut units: Vec<Option<String>> = Vec::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim() {
            "processor" => units.push(None),
            "core id" => {
                if let Some(unit) = units.last_mut() {
                    *unit = Some(value.trim().to_string());
                }
            }
            _ => {}
        }
    }

    if units.is_empty() {
        return None;
    }
    units.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_CORES_HT: &str = "\
processor\t: 0
model name\t: Intel(R) Core(TM) i5-7200U CPU @ 2.50GHz
cpu MHz\t\t: 2700.000
physical id\t: 0
core id\t\t: 0

processor\t: 1
model name\t: Intel(R) Core(TM) i5-7200U CPU @ 2.50GHz
cpu MHz\t\t: 2700.000
physical id\t: 0
core id\t\t: 1

processor\t: 2
model name\t: Intel(R) Core(TM) i5-7200U CPU @ 2.50GHz
physical id\t: 0
core id\t\t: 0

processor\t: 3
model name\t: Intel(R) Core(TM) i5-7200U CPU @ 2.50GHz
physical id\t: 0
core id\t\t: 1
";

    #[test]
    fn test_parse_core_ids() {
        let ids = parse_core_ids(TWO_CORES_HT).unwrap();
        assert_eq!(ids, vec!["0", "1", "0", "1"]);
    }

    #[test]
    fn test_parse_without_core_ids() {
        let arm = "processor\t: 0\nBogoMIPS\t: 48.00\n\nprocessor\t: 1\nBogoMIPS\t: 48.00\n";
        assert_eq!(parse_core_ids(arm), None);
    }

    #[test]
    fn test_parse_partial_core_ids() {
        let partial = "processor\t: 0\ncore id\t\t: 0\n\nprocessor\t: 1\n";
        assert_eq!(parse_core_ids(partial), None);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_core_ids(""), None);
    }

    #[test]
    fn test_read_core_ids_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_CORES_HT.as_bytes()).unwrap();
        assert_eq!(read_core_ids(file.path()).unwrap().len(), 4);
    }

    #[test]
    fn test_read_core_ids_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_core_ids(dir.path().join("cpuinfo")), None);
    }
}

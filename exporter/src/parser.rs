// Copyright 2024 RustFS Team
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

//! Parsers for the text captured from the cluster.
//!
//! All functions here are pure; deciding what a parse failure means for the
//! published metrics is left to the collector.

use crate::error::ParseError;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static GROUP_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*group count\s*[:=]\s*(\d+)\s*$").expect("group count pattern is valid"));

// `ip_addr = 10.0.0.2 (storage0)  ACTIVE`; the host name in parentheses is optional.
static STORAGE_STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*ip_addr\s*=\s*\S+(?:\s+\([^)]*\))?\s+([A-Z_]+)\s*$").expect("storage status pattern is valid")
});

/// Cluster topology document stored next to the storage daemon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    #[serde(rename = "node_Hosts")]
    pub node_hosts: Vec<String>,
    #[serde(rename = "nginx_IP")]
    pub nginx_ip: String,
    #[serde(rename = "tracker_Server_Num")]
    pub tracker_server_num: u64,
    #[serde(rename = "group_Num")]
    pub group_num: u64,
    #[serde(rename = "storage_Num")]
    pub storage_num: u64,
    #[serde(rename = "fastDfs_Data")]
    pub fastdfs_data: u64,
}

/// Decode the cluster topology document.
///
/// Absent fields default to zero; empty or malformed input is an error.
pub fn parse_cluster_config(raw: &str) -> Result<ClusterConfig, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

/// Parse the single integer a helper script prints.
///
/// Exactly one trailing line break is removed before parsing.
pub fn parse_helper_output(output: &str) -> Result<u64, ParseError> {
    let line = output
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(output);

    line.parse::<u64>().map_err(|_| ParseError::Integer(output.to_string()))
}

/// Storage node counts per status, as listed by the diagnostic report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageStates {
    pub init: u64,
    pub wait_sync: u64,
    pub syncing: u64,
    pub deleted: u64,
    pub offline: u64,
    pub online: u64,
    pub active: u64,
    /// Statuses without a dedicated gauge (IP_CHANGED, RECOVERY, NONE, ...)
    pub other: u64,
}

impl StorageStates {
    fn count(&mut self, status: &str) {
        let slot = match status {
            "INIT" => &mut self.init,
            "WAIT_SYNC" => &mut self.wait_sync,
            "SYNCING" => &mut self.syncing,
            "DELETED" => &mut self.deleted,
            "OFFLINE" => &mut self.offline,
            "ONLINE" => &mut self.online,
            "ACTIVE" => &mut self.active,
            _ => &mut self.other,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u64 {
        self.init + self.wait_sync + self.syncing + self.deleted + self.offline + self.online + self.active + self.other
    }
}

/// What the collector reads out of the diagnostic report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorReport {
    pub group_count: Option<u64>,
    pub storages: StorageStates,
}

pub fn parse_monitor_report(report: &str) -> MonitorReport {
    let group_count = GROUP_COUNT_RE
        .captures(report)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok());

    let mut storages = StorageStates::default();
    for caps in STORAGE_STATUS_RE.captures_iter(report) {
        if let Some(status) = caps.get(1) {
            storages.count(status.as_str());
        }
    }

    MonitorReport { group_count, storages }
}

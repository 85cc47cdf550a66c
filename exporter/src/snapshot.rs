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

//! Per-scrape status record.

use std::time::Duration;

/// Whether a value was actually collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectStatus {
    Ok,
    #[default]
    Failed,
}

impl CollectStatus {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// A collected count together with how it was obtained.
///
/// A failed reading always carries zero, so a published zero is only
/// meaningful next to its status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reading {
    pub value: u64,
    pub status: CollectStatus,
}

impl Reading {
    pub fn ok(value: u64) -> Self {
        Self {
            value,
            status: CollectStatus::Ok,
        }
    }

    pub fn failed() -> Self {
        Self::default()
    }

    /// `Some` becomes an ok reading, `None` a failed zero.
    pub fn from_option(value: Option<u64>) -> Self {
        value.map_or_else(Self::failed, Self::ok)
    }
}

/// Independent collection steps run for every scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectorStep {
    Monitor,
    Config,
    GroupCount,
    Active,
    WaitSync,
}

impl CollectorStep {
    pub const ALL: [CollectorStep; 5] = [Self::Monitor, Self::Config, Self::GroupCount, Self::Active, Self::WaitSync];

    /// Value of the `collector` label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monitor => "monitor",
            Self::Config => "config",
            Self::GroupCount => "group_count",
            Self::Active => "active",
            Self::WaitSync => "wait_sync",
        }
    }
}

/// Every gauge derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gauge {
    ConfigGroupNum,
    ConfigStorageNum,
    ConfigTrackerServerNum,
    ConfigNodeHosts,
    GroupCount,
    InitState,
    SyncState,
    WaitSyncState,
    ActiveState,
    DeletedState,
    OfflineState,
    OnlineState,
}

impl Gauge {
    pub const ALL: [Gauge; 12] = [
        Self::ConfigGroupNum,
        Self::ConfigStorageNum,
        Self::ConfigTrackerServerNum,
        Self::ConfigNodeHosts,
        Self::GroupCount,
        Self::InitState,
        Self::SyncState,
        Self::WaitSyncState,
        Self::ActiveState,
        Self::DeletedState,
        Self::OfflineState,
        Self::OnlineState,
    ];
}

/// StatusSnapshot - the values gathered by one scrape.
///
/// Built from scratch by every collection and never shared between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    pub config_group_num: Reading,
    pub config_storage_num: Reading,
    pub config_tracker_server_num: Reading,
    pub config_node_hosts: Reading,
    pub group_count: Reading,
    pub init_state: Reading,
    pub sync_state: Reading,
    pub wait_sync_state: Reading,
    pub active_state: Reading,
    pub deleted_state: Reading,
    pub offline_state: Reading,
    pub online_state: Reading,
    pub steps: Vec<(CollectorStep, CollectStatus)>,
    pub duration: Duration,
}

impl StatusSnapshot {
    pub fn reading(&self, gauge: Gauge) -> Reading {
        match gauge {
            Gauge::ConfigGroupNum => self.config_group_num,
            Gauge::ConfigStorageNum => self.config_storage_num,
            Gauge::ConfigTrackerServerNum => self.config_tracker_server_num,
            Gauge::ConfigNodeHosts => self.config_node_hosts,
            Gauge::GroupCount => self.group_count,
            Gauge::InitState => self.init_state,
            Gauge::SyncState => self.sync_state,
            Gauge::WaitSyncState => self.wait_sync_state,
            Gauge::ActiveState => self.active_state,
            Gauge::DeletedState => self.deleted_state,
            Gauge::OfflineState => self.offline_state,
            Gauge::OnlineState => self.online_state,
        }
    }

    pub fn record_step(&mut self, step: CollectorStep, status: CollectStatus) {
        self.steps.push((step, status));
    }

    /// Outcome of `step`; a step that never ran counts as failed.
    pub fn step_status(&self, step: CollectorStep) -> CollectStatus {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, status)| *status)
            .unwrap_or_default()
    }

    /// True when every step succeeded.
    pub fn is_complete(&self) -> bool {
        CollectorStep::ALL.iter().all(|step| self.step_status(*step).is_ok())
    }
}

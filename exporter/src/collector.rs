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

//! Scrape-time collection of FastDFS status.
//!
//! [`FastDfsCollector`] is built once at startup. Each call to
//! [`FastDfsCollector::collect`] runs the inspection steps one after another
//! and returns a fresh [`StatusSnapshot`]; a failing step is logged and leaves
//! its readings at a failed zero without affecting the other steps.

use crate::config::{RuntimeConfig, VERSION};
use crate::error::CollectError;
use crate::inspector::{CommandRunner, Inspector};
use crate::parser::{parse_cluster_config, parse_helper_output, parse_monitor_report};
use crate::snapshot::{CollectStatus, CollectorStep, Gauge, Reading, StatusSnapshot};
use fastdfs_config::{ACTIVE_SCRIPT, APP_NAME, GROUP_COUNT_SCRIPT, METRICS_NAMESPACE, WAIT_SYNC_SCRIPT};
use fastdfs_metrics::{MetricDescriptor, MetricSample, render_metrics};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

const NODE_LABEL: &str = "node";
const COLLECTOR_LABEL: &str = "collector";
const VERSION_LABEL: &str = "version";

type ReadingSlot = fn(&mut StatusSnapshot) -> &mut Reading;

/// Helper scripts, each with the snapshot field it fills.
const HELPER_STEPS: [(CollectorStep, &str, ReadingSlot); 3] = [
    (CollectorStep::GroupCount, GROUP_COUNT_SCRIPT, |s| &mut s.group_count),
    (CollectorStep::Active, ACTIVE_SCRIPT, |s| &mut s.active_state),
    (CollectorStep::WaitSync, WAIT_SYNC_SCRIPT, |s| &mut s.wait_sync_state),
];

/// Descriptors for every family the exporter publishes.
#[derive(Debug, Clone)]
pub struct DescriptorTable {
    gauges: Vec<(Gauge, MetricDescriptor)>,
    up: MetricDescriptor,
    step_success: MetricDescriptor,
    scrape_duration: MetricDescriptor,
    build_info: MetricDescriptor,
}

impl DescriptorTable {
    pub fn new(namespace: &str) -> Self {
        let node = &[NODE_LABEL];
        let gauge = |g: Gauge, name: &str, help: &'static str| (g, MetricDescriptor::gauge(namespace, name, help, node));

        Self {
            gauges: vec![
                gauge(Gauge::ConfigGroupNum, "config_group_count", "How many groups are declared in the cluster config file."),
                gauge(Gauge::ConfigStorageNum, "config_storage_num", "How many storage nodes are declared in the cluster config file."),
                gauge(
                    Gauge::ConfigTrackerServerNum,
                    "config_tracker_server_num",
                    "How many tracker servers are declared in the cluster config file.",
                ),
                gauge(Gauge::ConfigNodeHosts, "config_node_hosts", "How many node hosts are listed in the cluster config file."),
                gauge(Gauge::GroupCount, "group_count", "How many groups were up at the last query."),
                gauge(Gauge::InitState, "init_state", "How many storage nodes were in INIT state at the last query."),
                gauge(Gauge::SyncState, "sync_state", "How many storage nodes were in SYNCING state at the last query."),
                gauge(Gauge::WaitSyncState, "wait_sync_state", "How many storage nodes were in WAIT_SYNC state at the last query."),
                gauge(Gauge::ActiveState, "active_state", "How many storage nodes were in ACTIVE state at the last query."),
                gauge(Gauge::DeletedState, "deleted_state", "How many storage nodes were in DELETED state at the last query."),
                gauge(Gauge::OfflineState, "offline_state", "How many storage nodes were in OFFLINE state at the last query."),
                gauge(Gauge::OnlineState, "online_state", "How many storage nodes were in ONLINE state at the last query."),
            ],
            up: MetricDescriptor::gauge(namespace, "up", "Whether every collection step of the last query succeeded.", node),
            step_success: MetricDescriptor::gauge(
                namespace,
                "scrape_collector_success",
                "Whether a collection step of the last query succeeded.",
                &[NODE_LABEL, COLLECTOR_LABEL],
            ),
            scrape_duration: MetricDescriptor::gauge(
                namespace,
                "scrape_duration_seconds",
                "How long the last query took, in seconds.",
                node,
            ),
            build_info: MetricDescriptor::gauge(
                "",
                &format!("{APP_NAME}_build_info"),
                "Exporter build information; the value is always 1.",
                &[VERSION_LABEL],
            ),
        }
    }

    pub fn gauge(&self, gauge: Gauge) -> Option<&MetricDescriptor> {
        self.gauges.iter().find(|(g, _)| *g == gauge).map(|(_, desc)| desc)
    }
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self::new(METRICS_NAMESPACE)
    }
}

#[derive(Debug)]
pub struct FastDfsCollector {
    config: Arc<RuntimeConfig>,
    inspector: Inspector,
    descriptors: DescriptorTable,
}

impl FastDfsCollector {
    pub fn new(config: Arc<RuntimeConfig>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            inspector: Inspector::new(config.clone(), runner),
            config,
            descriptors: DescriptorTable::default(),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Collect, render and return the exposition text for one scrape.
    pub async fn scrape(&self) -> String {
        let snapshot = self.collect().await;
        render_metrics(&self.metrics(&snapshot))
    }

    #[instrument(level = "debug", skip(self), fields(node = %self.config.pod_name))]
    pub async fn collect(&self) -> StatusSnapshot {
        let started = Instant::now();
        let mut snapshot = StatusSnapshot::default();

        let status = match self.inspector.inspect().await {
            Ok(report) => {
                let report = parse_monitor_report(&report);
                let states = report.storages;
                snapshot.init_state = Reading::ok(states.init);
                snapshot.sync_state = Reading::ok(states.syncing);
                snapshot.deleted_state = Reading::ok(states.deleted);
                snapshot.offline_state = Reading::ok(states.offline);
                snapshot.online_state = Reading::ok(states.online);
                debug!(
                    group_count = ?report.group_count,
                    storages = states.total(),
                    "Parsed diagnostic report"
                );
                CollectStatus::Ok
            }
            Err(e) => log_failure(CollectorStep::Monitor, &e),
        };
        snapshot.record_step(CollectorStep::Monitor, status);

        let config = self
            .inspector
            .fetch_cluster_config()
            .await
            .and_then(|raw| parse_cluster_config(&raw).map_err(CollectError::from));
        let status = match config {
            Ok(config) => {
                snapshot.config_group_num = Reading::ok(config.group_num);
                snapshot.config_storage_num = Reading::ok(config.storage_num);
                snapshot.config_tracker_server_num = Reading::ok(config.tracker_server_num);
                snapshot.config_node_hosts = Reading::ok(config.node_hosts.len() as u64);
                CollectStatus::Ok
            }
            Err(e) => log_failure(CollectorStep::Config, &e),
        };
        snapshot.record_step(CollectorStep::Config, status);

        for (step, script, field) in HELPER_STEPS {
            let (reading, status) = self.helper_reading(step, script).await;
            *field(&mut snapshot) = reading;
            snapshot.record_step(step, status);
        }

        snapshot.duration = started.elapsed();
        snapshot
    }

    async fn helper_reading(&self, step: CollectorStep, script: &str) -> (Reading, CollectStatus) {
        let value = self
            .inspector
            .run_helper(script)
            .await
            .and_then(|output| parse_helper_output(&output).map_err(CollectError::from));

        match value {
            Ok(value) => (Reading::ok(value), CollectStatus::Ok),
            Err(e) => (Reading::failed(), log_failure(step, &e)),
        }
    }

    /// Map a snapshot onto samples, one per family, labelled with the target pod.
    pub fn metrics(&self, snapshot: &StatusSnapshot) -> Vec<MetricSample> {
        let node = self.config.pod_name.as_str();
        let d = &self.descriptors;
        let mut metrics = Vec::with_capacity(Gauge::ALL.len() + CollectorStep::ALL.len() + 3);

        for gauge in Gauge::ALL {
            if let Some(desc) = d.gauge(gauge) {
                metrics.push(desc.sample(snapshot.reading(gauge).value as f64, &[node]));
            }
        }

        metrics.push(d.up.sample(if snapshot.is_complete() { 1.0 } else { 0.0 }, &[node]));
        for step in CollectorStep::ALL {
            let value = if snapshot.step_status(step).is_ok() { 1.0 } else { 0.0 };
            metrics.push(d.step_success.sample(value, &[node, step.as_str()]));
        }
        metrics.push(d.scrape_duration.sample(snapshot.duration.as_secs_f64(), &[node]));
        metrics.push(d.build_info.sample(1.0, &[VERSION]));

        metrics
    }
}

fn log_failure(step: CollectorStep, error: &CollectError) -> CollectStatus {
    warn!(target: "fastdfs::collector", collector = step.as_str(), error = %error, "Collection step failed");
    CollectStatus::Failed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_names() {
        let table = DescriptorTable::default();
        let names: Vec<&str> = Gauge::ALL
            .iter()
            .filter_map(|g| table.gauge(*g))
            .map(|d| d.name.as_str())
            .collect();

        assert_eq!(names.len(), Gauge::ALL.len());
        assert!(names.contains(&"fastdfs_config_group_count"));
        assert!(names.contains(&"fastdfs_config_storage_num"));
        assert!(names.contains(&"fastdfs_group_count"));
        assert!(names.contains(&"fastdfs_wait_sync_state"));
        assert!(names.contains(&"fastdfs_active_state"));
        assert_eq!(table.build_info.name, "fastdfs_exporter_build_info");
    }

    #[test]
    fn test_metrics_from_snapshot() {
        let collector = FastDfsCollector::new(Arc::new(RuntimeConfig::default()), Arc::new(crate::inspector::ProcessRunner));
        let mut snapshot = StatusSnapshot {
            group_count: Reading::ok(3),
            config_group_num: Reading::ok(2),
            ..Default::default()
        };
        snapshot.record_step(CollectorStep::GroupCount, CollectStatus::Ok);

        let metrics = collector.metrics(&snapshot);
        let find = |name: &str| metrics.iter().find(|m| m.name == name).map(|m| m.value);

        assert_eq!(find("fastdfs_group_count"), Some(3.0));
        assert_eq!(find("fastdfs_config_group_count"), Some(2.0));
        assert_eq!(find("fastdfs_active_state"), Some(0.0));
        assert_eq!(find("fastdfs_up"), Some(0.0));
        assert_eq!(find("fastdfs_exporter_build_info"), Some(1.0));

        let group_count = metrics.iter().find(|m| m.name == "fastdfs_group_count").unwrap();
        assert_eq!(group_count.labels, vec![("node", "fastdfs-group0-storage0-0".to_string())]);

        let step_ok = metrics
            .iter()
            .find(|m| m.name == "fastdfs_scrape_collector_success" && m.label("collector") == Some("group_count"))
            .unwrap();
        assert_eq!(step_ok.value, 1.0);
    }
}

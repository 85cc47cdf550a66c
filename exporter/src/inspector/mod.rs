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

//! Remote inspection of the storage cluster.
//!
//! Every call runs exactly one external command, bounded by the configured
//! timeout and never retried.

mod runner;

pub use runner::{CommandRunner, CommandSpec, ProcessRunner};

use crate::config::RuntimeConfig;
use crate::error::CollectError;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Inspector {
    config: Arc<RuntimeConfig>,
    runner: Arc<dyn CommandRunner>,
}

impl Inspector {
    pub fn new(config: Arc<RuntimeConfig>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    /// Run the diagnostic binary inside the target pod and return its report.
    ///
    /// The report is also written to the audit file. The audit file is
    /// truncated when the diagnostic fails, so it never shows a stale report.
    pub async fn inspect(&self) -> Result<String, CollectError> {
        let spec = self.monitor_command();
        let result = self.run(&spec).await;

        let audit = match &result {
            Ok(report) => report.as_bytes(),
            Err(_) => &[][..],
        };
        if let Err(e) = tokio::fs::write(&self.config.audit_file, audit).await {
            warn!(
                target: "fastdfs::inspector",
                path = %self.config.audit_file.display(),
                error = %e,
                "Failed to write diagnostic audit file"
            );
        }

        result
    }

    /// Read the raw cluster topology document from the target pod.
    pub async fn fetch_cluster_config(&self) -> Result<String, CollectError> {
        let spec = self.kubectl_exec(["cat", self.config.cluster_config_path.as_str()]);
        self.run(&spec).await
    }

    /// Run a helper script from the scripts directory with no arguments.
    pub async fn run_helper(&self, script: &str) -> Result<String, CollectError> {
        let spec = CommandSpec::new(&self.config.shell)
            .arg(script)
            .current_dir(&self.config.scripts_dir);
        self.run(&spec).await
    }

    pub fn monitor_command(&self) -> CommandSpec {
        self.kubectl_exec([self.config.monitor_bin.as_str(), self.config.monitor_conf.as_str()])
    }

    /// `kubectl [--server S] [-n NS] exec POD -- <remote...>`
    fn kubectl_exec<'a>(&self, remote: impl IntoIterator<Item = &'a str>) -> CommandSpec {
        let mut spec = CommandSpec::new(&self.config.kubectl);
        if let Some(server) = &self.config.api_server {
            spec = spec.args(["--server", server.as_str()]);
        }
        if let Some(namespace) = &self.config.namespace {
            spec = spec.args(["-n", namespace.as_str()]);
        }
        spec.args(["exec", self.config.pod_name.as_str(), "--"]).args(remote)
    }

    async fn run(&self, spec: &CommandSpec) -> Result<String, CollectError> {
        debug!(target: "fastdfs::inspector", command = %spec, "Running command");
        let stdout = self.runner.run(spec, self.config.command_timeout).await?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every command and answers with a fixed result.
    #[derive(Debug, Default)]
    struct RecordingRunner {
        fail: bool,
        seen: Mutex<Vec<CommandSpec>>,
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, spec: &CommandSpec, timeout: Duration) -> Result<Vec<u8>, CollectError> {
            self.seen.lock().unwrap().push(spec.clone());
            if self.fail {
                Err(CollectError::Timeout {
                    command: spec.to_string(),
                    timeout,
                })
            } else {
                Ok(b"group count: 1\n".to_vec())
            }
        }
    }

    fn inspector(config: RuntimeConfig, runner: Arc<RecordingRunner>) -> Inspector {
        Inspector::new(Arc::new(config), runner)
    }

    #[test]
    fn test_monitor_command_defaults() {
        let inspector = inspector(RuntimeConfig::default(), Arc::default());
        assert_eq!(
            inspector.monitor_command().to_string(),
            "kubectl exec fastdfs-group0-storage0-0 -- /usr/bin/fdfs_monitor /etc/fdfs/storage.conf"
        );
    }

    #[test]
    fn test_monitor_command_with_namespace_and_server() {
        let config = RuntimeConfig {
            namespace: Some("storage".into()),
            api_server: Some("https://10.0.0.1:6443".into()),
            ..Default::default()
        };
        let inspector = inspector(config, Arc::default());
        assert_eq!(
            inspector.monitor_command().args,
            vec![
                "--server",
                "https://10.0.0.1:6443",
                "-n",
                "storage",
                "exec",
                "fastdfs-group0-storage0-0",
                "--",
                "/usr/bin/fdfs_monitor",
                "/etc/fdfs/storage.conf"
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_cluster_config_and_helper_commands() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Arc::new(RecordingRunner::default());
        let config = RuntimeConfig {
            scripts_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let inspector = inspector(config, runner.clone());

        inspector.fetch_cluster_config().await.unwrap();
        inspector.run_helper("groupcount.sh").await.unwrap();

        let seen = runner.seen.lock().unwrap();
        assert_eq!(seen[0].to_string(), "kubectl exec fastdfs-group0-storage0-0 -- cat /etc/fdfs/FastDFS.json");
        assert_eq!(seen[1].program, "bash");
        assert_eq!(seen[1].args, vec!["groupcount.sh"]);
        assert_eq!(seen[1].current_dir.as_deref(), Some(dir.path()));
    }

    #[tokio::test]
    async fn test_inspect_writes_audit_file() {
        let dir = tempfile::tempdir().unwrap();
        let audit_file = dir.path().join("out.txt");
        let config = RuntimeConfig {
            audit_file: audit_file.clone(),
            ..Default::default()
        };
        let inspector = inspector(config, Arc::default());

        let report = inspector.inspect().await.unwrap();
        assert_eq!(report, "group count: 1\n");
        assert_eq!(std::fs::read_to_string(&audit_file).unwrap(), report);
    }

    #[tokio::test]
    async fn test_inspect_failure_truncates_audit_file() {
        let dir = tempfile::tempdir().unwrap();
        let audit_file = dir.path().join("out.txt");
        std::fs::write(&audit_file, "stale report").unwrap();
        let config = RuntimeConfig {
            audit_file: audit_file.clone(),
            ..Default::default()
        };
        let runner = Arc::new(RecordingRunner {
            fail: true,
            ..Default::default()
        });
        let inspector = inspector(config, runner);

        assert!(matches!(inspector.inspect().await, Err(CollectError::Timeout { .. })));
        assert_eq!(std::fs::read_to_string(&audit_file).unwrap(), "");
    }

    #[tokio::test]
    async fn test_inspect_survives_unwritable_audit_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            audit_file: dir.path().join("missing").join("out.txt"),
            ..Default::default()
        };
        let inspector = inspector(config, Arc::default());
        assert!(inspector.inspect().await.is_ok());
    }
}

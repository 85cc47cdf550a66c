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

#![allow(dead_code)]

use async_trait::async_trait;
use fastdfs_exporter::config::RuntimeConfig;
use fastdfs_exporter::error::CollectError;
use fastdfs_exporter::inspector::{CommandRunner, CommandSpec};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

pub const MONITOR_REPORT: &str = "\
tracker server is 10.0.0.10:22122

group count: 1

Group 1:
group name = group1
\tStorage 1:
\t\tip_addr = 10.0.0.11 (fastdfs-group0-storage0-0)  ACTIVE
\tStorage 2:
\t\tip_addr = 10.0.0.12  INIT
\tStorage 3:
\t\tip_addr = 10.0.0.13  OFFLINE
";

pub const CLUSTER_CONFIG: &str = r#"{"node_Hosts":["n1","n2"],"nginx_IP":"10.0.0.20","tracker_Server_Num":1,"group_Num":2,"storage_Num":4,"fastDfs_Data":0}"#;

/// Answers commands by their last argument: the monitor config path, the
/// cluster config path, or the helper script name.
#[derive(Debug, Default)]
pub struct StubRunner {
    responses: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl StubRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every step succeeds: 3 groups, 1 active, 0 waiting.
    pub fn healthy() -> Self {
        Self::new()
            .respond("/etc/fdfs/storage.conf", MONITOR_REPORT)
            .respond("/etc/fdfs/FastDFS.json", CLUSTER_CONFIG)
            .respond("groupcount.sh", "3\n")
            .respond("active.sh", "1\n")
            .respond("wait.sh", "0\n")
    }

    pub fn respond(mut self, key: &str, output: &str) -> Self {
        self.responses.insert(key.to_string(), output.to_string());
        self
    }

    /// Unregistered keys fail with a non-zero exit.
    pub fn without(mut self, key: &str) -> Self {
        self.responses.remove(key);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for StubRunner {
    async fn run(&self, spec: &CommandSpec, _timeout: Duration) -> Result<Vec<u8>, CollectError> {
        self.calls.lock().unwrap().push(spec.to_string());
        let key = spec.args.last().cloned().unwrap_or_default();
        match self.responses.get(&key) {
            Some(output) => Ok(output.clone().into_bytes()),
            None => Err(CollectError::ExitStatus {
                command: spec.to_string(),
                code: Some(1),
                stderr: "stubbed failure".to_string(),
            }),
        }
    }
}

pub fn test_config(dir: &Path) -> RuntimeConfig {
    RuntimeConfig {
        audit_file: dir.join("out.txt"),
        scripts_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

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

/// Default storage pod that diagnostics are run against
/// Environment variable: FASTDFS_EXPORTER_PODNAME
/// Command line argument: --podname
pub const DEFAULT_PODNAME: &str = "fastdfs-group0-storage0-0";

/// Default namespace of the storage pod
/// Empty means the orchestration CLI picks its own current namespace.
/// Environment variable: FASTDFS_EXPORTER_NAMESPACE
pub const DEFAULT_NAMESPACE: &str = "";

/// Default API server endpoint
/// Empty means the orchestration CLI uses its kubeconfig endpoint.
/// Environment variable: FASTDFS_EXPORTER_API_SERVER
pub const DEFAULT_API_SERVER: &str = "";

/// Default orchestration CLI used to exec into the storage pod
/// Environment variable: FASTDFS_EXPORTER_KUBECTL
pub const DEFAULT_KUBECTL: &str = "kubectl";

/// Default diagnostic binary inside the storage pod
/// Environment variable: FASTDFS_EXPORTER_MONITOR_BIN
pub const DEFAULT_MONITOR_BIN: &str = "/usr/bin/fdfs_monitor";

/// Default config file passed to the diagnostic binary
/// Environment variable: FASTDFS_EXPORTER_MONITOR_CONF
pub const DEFAULT_MONITOR_CONF: &str = "/etc/fdfs/storage.conf";

/// Default path of the cluster topology document inside the storage pod
/// Environment variable: FASTDFS_EXPORTER_CLUSTER_CONFIG
pub const DEFAULT_CLUSTER_CONFIG: &str = "/etc/fdfs/FastDFS.json";

/// Default directory holding the helper scripts
/// Environment variable: FASTDFS_EXPORTER_SCRIPTS_DIR
pub const DEFAULT_SCRIPTS_DIR: &str = ".";

/// Default shell used to run the helper scripts
/// Environment variable: FASTDFS_EXPORTER_SHELL
pub const DEFAULT_HELPER_SHELL: &str = "bash";

/// Helper script printing the number of groups
pub const GROUP_COUNT_SCRIPT: &str = "groupcount.sh";

/// Helper script printing the number of ACTIVE storage nodes
pub const ACTIVE_SCRIPT: &str = "active.sh";

/// Helper script printing the number of WAIT_SYNC storage nodes
pub const WAIT_SYNC_SCRIPT: &str = "wait.sh";

/// Default path of the local copy of the latest diagnostic report
/// Overwritten on every scrape.
/// Environment variable: FASTDFS_EXPORTER_AUDIT_FILE
pub const DEFAULT_AUDIT_FILE: &str = "./out.txt";

/// Default timeout applied to every external command, in seconds
/// Environment variable: FASTDFS_EXPORTER_COMMAND_TIMEOUT
/// Default value: 30
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;

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

use const_str::concat;

pub const ENV_PREFIX: &str = "FASTDFS_EXPORTER_";

pub const ENV_LISTEN_ADDRESS: &str = concat!(ENV_PREFIX, "LISTEN_ADDRESS");
pub const ENV_METRICS_PATH: &str = concat!(ENV_PREFIX, "METRICS_PATH");

pub const ENV_PODNAME: &str = concat!(ENV_PREFIX, "PODNAME");
pub const ENV_NAMESPACE: &str = concat!(ENV_PREFIX, "NAMESPACE");
pub const ENV_API_SERVER: &str = concat!(ENV_PREFIX, "API_SERVER");
pub const ENV_KUBECTL: &str = concat!(ENV_PREFIX, "KUBECTL");
pub const ENV_MONITOR_BIN: &str = concat!(ENV_PREFIX, "MONITOR_BIN");
pub const ENV_MONITOR_CONF: &str = concat!(ENV_PREFIX, "MONITOR_CONF");
pub const ENV_CLUSTER_CONFIG: &str = concat!(ENV_PREFIX, "CLUSTER_CONFIG");

pub const ENV_SCRIPTS_DIR: &str = concat!(ENV_PREFIX, "SCRIPTS_DIR");
pub const ENV_SHELL: &str = concat!(ENV_PREFIX, "SHELL");
pub const ENV_AUDIT_FILE: &str = concat!(ENV_PREFIX, "AUDIT_FILE");

/// Timeout applied to each external command, in seconds
pub const ENV_COMMAND_TIMEOUT: &str = concat!(ENV_PREFIX, "COMMAND_TIMEOUT");

pub const ENV_LOG_LEVEL: &str = concat!(ENV_PREFIX, "LOG_LEVEL");
pub const ENV_LOG_JSON: &str = concat!(ENV_PREFIX, "LOG_JSON");

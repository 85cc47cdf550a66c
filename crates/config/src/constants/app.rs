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

/// Application name
/// Used in the landing page title, the build info metric and log output.
/// Default value: fastdfs_exporter
pub const APP_NAME: &str = "fastdfs_exporter";

/// Metric namespace
/// Every metric published by the exporter is prefixed with this namespace.
/// Default value: fastdfs
pub const METRICS_NAMESPACE: &str = "fastdfs";

/// Default port for the exporter
/// This is the port the HTTP server binds to when no address is given.
/// Default value: 10000
pub const DEFAULT_PORT: u16 = 10000;

/// Default listen address for the exporter
/// Environment variable: FASTDFS_EXPORTER_LISTEN_ADDRESS
/// Command line argument: --web.listen-address
/// Example: FASTDFS_EXPORTER_LISTEN_ADDRESS=127.0.0.1:10000
/// Example: --web.listen-address :10000
pub const DEFAULT_LISTEN_ADDRESS: &str = concat!("0.0.0.0:", DEFAULT_PORT);

/// Default path under which metrics are exposed
/// Environment variable: FASTDFS_EXPORTER_METRICS_PATH
/// Command line argument: --web.path
/// Default value: /metrics
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Path of the landing page
pub const LANDING_PATH: &str = "/";

/// Path of the liveness endpoint
pub const HEALTH_PATH: &str = "/health";

/// Content type of the Prometheus text exposition format
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Default log level
/// Environment variable: FASTDFS_EXPORTER_LOG_LEVEL
/// Command line argument: --log-level
/// Default value: info
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default structured logging toggle
/// When enabled, logs are written as JSON lines.
/// Environment variable: FASTDFS_EXPORTER_LOG_JSON
/// Command line argument: --log-json
/// Default value: false
pub const DEFAULT_LOG_JSON: bool = false;

/// Grace period for in-flight scrapes once a shutdown signal arrives, in seconds
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;

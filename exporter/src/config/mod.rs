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

use crate::error::ConfigError;
use clap::Parser;
use fastdfs_config::*;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

#[cfg(test)]
mod config_test;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Parser)]
#[command(name = "fastdfs-exporter", version = VERSION, about = "Prometheus exporter for FastDFS storage clusters")]
pub struct Opt {
    /// Address on which to expose metrics and web interface.
    #[arg(long = "web.listen-address", env = ENV_LISTEN_ADDRESS, default_value = DEFAULT_LISTEN_ADDRESS)]
    pub listen_address: String,

    /// Path under which to expose metrics.
    #[arg(long = "web.path", env = ENV_METRICS_PATH, default_value = DEFAULT_METRICS_PATH)]
    pub metrics_path: String,

    /// Pod name for FastDFS.
    #[arg(long, env = ENV_PODNAME, default_value = DEFAULT_PODNAME)]
    pub podname: String,

    /// Namespace of the FastDFS pod; the CLI's current namespace when empty.
    #[arg(long, env = ENV_NAMESPACE, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Kubernetes API server endpoint; the kubeconfig endpoint when empty.
    #[arg(long = "api-server", env = ENV_API_SERVER, default_value = DEFAULT_API_SERVER)]
    pub api_server: String,

    /// Orchestration CLI used to exec into the pod.
    #[arg(long, env = ENV_KUBECTL, default_value = DEFAULT_KUBECTL)]
    pub kubectl: String,

    /// Diagnostic binary run inside the pod.
    #[arg(long = "monitor-bin", env = ENV_MONITOR_BIN, default_value = DEFAULT_MONITOR_BIN)]
    pub monitor_bin: String,

    /// Config file handed to the diagnostic binary.
    #[arg(long = "monitor-conf", env = ENV_MONITOR_CONF, default_value = DEFAULT_MONITOR_CONF)]
    pub monitor_conf: String,

    /// Cluster topology document read from the pod.
    #[arg(long = "cluster-config", env = ENV_CLUSTER_CONFIG, default_value = DEFAULT_CLUSTER_CONFIG)]
    pub cluster_config: String,

    /// Directory containing groupcount.sh, active.sh and wait.sh.
    #[arg(long = "scripts-dir", env = ENV_SCRIPTS_DIR, default_value = DEFAULT_SCRIPTS_DIR)]
    pub scripts_dir: PathBuf,

    /// Shell used to run the helper scripts.
    #[arg(long, env = ENV_SHELL, default_value = DEFAULT_HELPER_SHELL)]
    pub shell: String,

    /// Local file receiving the latest raw diagnostic report.
    #[arg(long = "audit-file", env = ENV_AUDIT_FILE, default_value = DEFAULT_AUDIT_FILE)]
    pub audit_file: PathBuf,

    /// Timeout in seconds for every external command.
    #[arg(long = "command-timeout", env = ENV_COMMAND_TIMEOUT, default_value_t = DEFAULT_COMMAND_TIMEOUT_SECS)]
    pub command_timeout: u64,

    /// Log level or comma-separated tracing filter directives, used when RUST_LOG is unset.
    #[arg(long = "log-level", env = ENV_LOG_LEVEL, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long = "log-json", env = ENV_LOG_JSON, default_value_t = DEFAULT_LOG_JSON)]
    pub log_json: bool,
}

/// Process-wide settings, fixed at startup and shared read-only by every scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub listen_address: SocketAddr,
    pub metrics_path: String,
    pub pod_name: String,
    pub namespace: Option<String>,
    pub api_server: Option<String>,
    pub kubectl: String,
    pub monitor_bin: String,
    pub monitor_conf: String,
    pub cluster_config_path: String,
    pub scripts_dir: PathBuf,
    pub shell: String,
    pub audit_file: PathBuf,
    pub command_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            listen_address: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            metrics_path: DEFAULT_METRICS_PATH.to_string(),
            pod_name: DEFAULT_PODNAME.to_string(),
            namespace: None,
            api_server: None,
            kubectl: DEFAULT_KUBECTL.to_string(),
            monitor_bin: DEFAULT_MONITOR_BIN.to_string(),
            monitor_conf: DEFAULT_MONITOR_CONF.to_string(),
            cluster_config_path: DEFAULT_CLUSTER_CONFIG.to_string(),
            scripts_dir: PathBuf::from(DEFAULT_SCRIPTS_DIR),
            shell: DEFAULT_HELPER_SHELL.to_string(),
            audit_file: PathBuf::from(DEFAULT_AUDIT_FILE),
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
        }
    }
}

impl TryFrom<Opt> for RuntimeConfig {
    type Error = ConfigError;

    fn try_from(opt: Opt) -> Result<Self, Self::Error> {
        let listen_address = parse_listen_address(&opt.listen_address)?;
        validate_metrics_path(&opt.metrics_path)?;
        if opt.command_timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            listen_address,
            metrics_path: opt.metrics_path,
            pod_name: opt.podname,
            namespace: non_empty(opt.namespace),
            api_server: non_empty(opt.api_server),
            kubectl: opt.kubectl,
            monitor_bin: opt.monitor_bin,
            monitor_conf: opt.monitor_conf,
            cluster_config_path: opt.cluster_config,
            scripts_dir: opt.scripts_dir,
            shell: opt.shell,
            audit_file: opt.audit_file,
            command_timeout: Duration::from_secs(opt.command_timeout),
        })
    }
}

impl RuntimeConfig {
    /// Logs the effective configuration at startup.
    pub fn print_summary(&self) {
        tracing::info!("=== Exporter Configuration ===");
        tracing::info!("Listen address: {}", self.listen_address);
        tracing::info!("Metrics path: {}", self.metrics_path);
        tracing::info!("Target pod: {}", self.pod_name);
        tracing::info!("Namespace: {}", self.namespace.as_deref().unwrap_or("<current>"));
        tracing::info!("API server: {}", self.api_server.as_deref().unwrap_or("<kubeconfig>"));
        tracing::info!("Command timeout: {:?}", self.command_timeout);
        tracing::debug!(
            kubectl = %self.kubectl,
            monitor_bin = %self.monitor_bin,
            monitor_conf = %self.monitor_conf,
            cluster_config = %self.cluster_config_path,
            scripts_dir = %self.scripts_dir.display(),
            shell = %self.shell,
            audit_file = %self.audit_file.display(),
            "Collection commands"
        );
    }
}

/// Parses `HOST:PORT`, `IP:PORT` or `:PORT` (all interfaces).
pub fn parse_listen_address(addr: &str) -> Result<SocketAddr, ConfigError> {
    let addr = addr.trim();
    let candidate = if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    };

    if let Ok(socket_addr) = candidate.parse::<SocketAddr>() {
        return Ok(socket_addr);
    }

    candidate
        .to_socket_addrs()
        .map_err(|e| ConfigError::InvalidListenAddress(addr.to_string(), e.to_string()))?
        .next()
        .ok_or_else(|| ConfigError::InvalidListenAddress(addr.to_string(), "no address resolved".to_string()))
}

fn validate_metrics_path(path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::InvalidMetricsPath(path.to_string(), "must start with '/'"));
    }
    if path == LANDING_PATH || path == HEALTH_PATH {
        return Err(ConfigError::InvalidMetricsPath(path.to_string(), "collides with a built-in route"));
    }
    // The router reads these as captures or wildcards and refuses the old `:`/`*` forms.
    if path.contains(['{', '}']) {
        return Err(ConfigError::InvalidMetricsPath(path.to_string(), "must not contain '{' or '}'"));
    }
    if path.split('/').any(|segment| segment.starts_with([':', '*'])) {
        return Err(ConfigError::InvalidMetricsPath(path.to_string(), "segments must not start with ':' or '*'"));
    }
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

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

use std::time::Duration;

pub type Result<T, E = ExporterError> = std::result::Result<T, E>;

/// Errors that stop the exporter from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ExporterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid listen address {0}: {1}")]
    InvalidListenAddress(String, String),

    #[error("Invalid metrics path {0}: {1}")]
    InvalidMetricsPath(String, &'static str),

    #[error("Command timeout must be greater than zero")]
    ZeroTimeout,
}

/// A single collection step that could not produce a value.
///
/// These never reach the HTTP client; the collector logs them and reports a
/// zero reading with a failed status instead.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to capture output of `{command}`: {source}")]
    Capture {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}", .code.map_or_else(|| "signal".to_string(), |c| format!("status {c}")))]
    ExitStatus {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("`{command}` timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed cluster config: {0}")]
    ClusterConfig(#[from] serde_json::Error),

    #[error("not a non-negative integer: {0:?}")]
    Integer(String),
}

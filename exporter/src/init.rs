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

use crate::error::{ExporterError, Result};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` is used as a full filter, so
/// `info` and `fastdfs=debug,info` both work. With `json` set, every event is
/// written as one JSON object per line.
pub fn init_logging(level: &str, json: bool) -> Result<()> {
    let filter = build_env_filter(level)?;

    let registry = tracing_subscriber::registry().with(filter).with(ErrorLayer::default());
    let result = if json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
    result.map_err(|e| ExporterError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

pub(crate) fn build_env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| ExporterError::Logging(format!("invalid log filter {level:?}: {e}")))
}

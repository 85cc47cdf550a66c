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

use clap::Parser;
use fastdfs_config::APP_NAME;
use fastdfs_exporter::config::{Opt, RuntimeConfig, VERSION};
use fastdfs_exporter::error::Result;
use fastdfs_exporter::inspector::ProcessRunner;
use fastdfs_exporter::server::{AppState, build_router, serve, shutdown_signal};
use fastdfs_exporter::{FastDfsCollector, init};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

fn main() -> Result<()> {
    let opt = Opt::parse();

    init::init_logging(&opt.log_level, opt.log_json)?;

    run(opt)
}

#[tokio::main]
async fn run(opt: Opt) -> Result<()> {
    debug!("opt: {:?}", &opt);
    info!("Starting {} v{}", APP_NAME, VERSION);

    let config = Arc::new(RuntimeConfig::try_from(opt)?);
    config.print_summary();

    let collector = Arc::new(FastDfsCollector::new(config.clone(), Arc::new(ProcessRunner)));
    let router = build_router(AppState { collector });

    let listener = TcpListener::bind(config.listen_address).await?;
    serve(listener, router, shutdown_signal()).await?;

    info!("{} is stopped", APP_NAME);
    Ok(())
}

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

//! HTTP surface: landing page, metrics endpoint and liveness probe.

mod handlers;

use crate::collector::FastDfsCollector;
use axum::{Router, routing::get};
use fastdfs_config::{DEFAULT_SHUTDOWN_GRACE_SECS, HEALTH_PATH, LANDING_PATH};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::{conn::auto::Builder as ConnBuilder, graceful::GracefulShutdown},
    service::TowerToHyperService,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub struct AppState {
    pub collector: Arc<FastDfsCollector>,
}

pub fn build_router(state: AppState) -> Router {
    let metrics_path = state.collector.config().metrics_path.clone();

    Router::new()
        .route(LANDING_PATH, get(handlers::landing))
        .route(HEALTH_PATH, get(handlers::health))
        .route(&metrics_path, get(handlers::metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// Connection errors, including a response that cannot be written back to
/// the client, are logged and never stop the server.
pub async fn serve(listener: TcpListener, router: Router, shutdown: impl Future<Output = ()>) -> std::io::Result<()> {
    let local_addr = listener.local_addr()?;
    let service = TowerToHyperService::new(router);
    let http_server = ConnBuilder::new(TokioExecutor::new());
    let graceful = GracefulShutdown::new();
    let mut shutdown = std::pin::pin!(shutdown);

    info!(target: "fastdfs::server", "Listening on http://{local_addr}");

    loop {
        let (socket, peer) = tokio::select! {
            res = listener.accept() => {
                match res {
                    Ok(conn) => conn,
                    Err(err) => {
                        error!(target: "fastdfs::server", "error accepting connection: {err}");
                        continue;
                    }
                }
            }
            _ = shutdown.as_mut() => {
                break;
            }
        };

        let conn = http_server.serve_connection(TokioIo::new(socket), service.clone());
        let conn = graceful.watch(conn.into_owned());
        tokio::spawn(async move {
            if let Err(err) = conn.await {
                warn!(target: "fastdfs::server", peer = %peer, error = %err, "Failed to serve connection");
            }
        });
    }

    tokio::select! {
        () = graceful.shutdown() => {
            debug!(target: "fastdfs::server", "Gracefully shutdown!");
        },
        () = tokio::time::sleep(Duration::from_secs(DEFAULT_SHUTDOWN_GRACE_SECS)) => {
            debug!(target: "fastdfs::server", "Waited {DEFAULT_SHUTDOWN_GRACE_SECS} seconds for graceful shutdown, aborting...");
        }
    }

    info!(target: "fastdfs::server", "Server stopped");
    Ok(())
}

/// Resolves on ctrl-c, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

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

//! # FastDFS Exporter
//!
//! Publishes FastDFS cluster health as Prometheus gauges. Every scrape runs
//! `fdfs_monitor` inside a storage pod, reads the cluster topology document
//! and calls the local helper scripts, then renders the result.

pub mod collector;
pub mod config;
pub mod error;
pub mod init;
pub mod inspector;
pub mod parser;
pub mod server;
pub mod snapshot;

pub use collector::FastDfsCollector;
pub use config::{Opt, RuntimeConfig};
pub use error::{CollectError, ExporterError};
pub use snapshot::{CollectStatus, Reading, StatusSnapshot};

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

//! Prometheus text exposition primitives.
//!
//! Collectors describe each metric family once with a [`MetricDescriptor`],
//! turn readings into [`MetricSample`]s and hand them to
//! [`render_metrics`].
//!
//! ```
//! use fastdfs_metrics::{MetricDescriptor, render_metrics};
//!
//! let desc = MetricDescriptor::gauge("fastdfs", "group_count", "How many groups were up at the last query.", &["node"]);
//! let output = render_metrics(&[desc.sample(3.0, &["storage0"])]);
//! assert!(output.contains("fastdfs_group_count{node=\"storage0\"} 3"));
//! ```

mod descriptor;
mod format;
mod metric_type;

pub use descriptor::{MetricDescriptor, MetricSample, build_fq_name};
pub use format::render_metrics;
pub use metric_type::MetricType;

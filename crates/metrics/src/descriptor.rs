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

use crate::MetricType;

/// MetricDescriptor - the fixed part of a metric family.
///
/// Descriptors are built once and turned into [`MetricSample`]s on
/// every scrape; the name, help text and label keys never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub name: String,
    pub metric_type: MetricType,
    pub help: &'static str,
    pub variable_labels: Vec<&'static str>,
}

impl MetricDescriptor {
    /// Create a descriptor whose full name is `<namespace>_<name>`.
    pub fn new(namespace: &str, name: &str, metric_type: MetricType, help: &'static str, variable_labels: &[&'static str]) -> Self {
        Self {
            name: build_fq_name(namespace, name),
            metric_type,
            help,
            variable_labels: variable_labels.to_vec(),
        }
    }

    /// Shorthand for a gauge descriptor.
    pub fn gauge(namespace: &str, name: &str, help: &'static str, variable_labels: &[&'static str]) -> Self {
        Self::new(namespace, name, MetricType::Gauge, help, variable_labels)
    }

    /// Build a sample of this family.
    ///
    /// `label_values` are matched positionally against `variable_labels`;
    /// surplus values on either side are ignored.
    pub fn sample(&self, value: f64, label_values: &[&str]) -> MetricSample {
        let labels = self
            .variable_labels
            .iter()
            .zip(label_values)
            .map(|(key, value)| (*key, (*value).to_string()))
            .collect();

        MetricSample {
            name: self.name.clone(),
            metric_type: self.metric_type,
            help: self.help,
            labels,
            value,
        }
    }
}

/// One labelled value of a family, as produced by [`MetricDescriptor::sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub name: String,
    pub metric_type: MetricType,
    pub help: &'static str,
    pub labels: Vec<(&'static str, String)>,
    pub value: f64,
}

impl MetricSample {
    /// Value of the label `key`, if the family declares it.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }
}

/// Join namespace and name with `_`, skipping an empty namespace.
pub fn build_fq_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}_{name}")
    }
}

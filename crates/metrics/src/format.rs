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

//! Prometheus text exposition format renderer.

use crate::MetricSample;
use std::collections::HashSet;
use std::fmt::Write;

/// Render metrics in Prometheus text exposition format.
///
/// `# HELP` and `# TYPE` are emitted once per metric name, before its first
/// sample. Samples of the same family should be adjacent in `metrics`.
pub fn render_metrics(metrics: &[MetricSample]) -> String {
    let mut output = String::with_capacity(metrics.len() * 96);
    let mut declared: HashSet<&str> = HashSet::new();

    for metric in metrics {
        if declared.insert(metric.name.as_str()) {
            let _ = writeln!(output, "# HELP {} {}", metric.name, escape_help(metric.help));
            let _ = writeln!(output, "# TYPE {} {}", metric.name, metric.metric_type);
        }

        output.push_str(&metric.name);
        if !metric.labels.is_empty() {
            output.push('{');
            for (i, (key, value)) in metric.labels.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                let _ = write!(output, "{}=\"{}\"", key, escape_label_value(value));
            }
            output.push('}');
        }
        let _ = writeln!(output, " {}", format_value(metric.value));
    }

    output
}

/// Escape label values: backslash, double quote and newline
fn escape_label_value(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape help text: backslash and newline
fn escape_help(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string()
    } else if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

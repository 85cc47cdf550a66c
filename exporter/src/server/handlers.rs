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

use super::AppState;
use crate::config::VERSION;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use fastdfs_config::{APP_NAME, PROMETHEUS_CONTENT_TYPE};
use serde_json::{Value, json};

/// Runs a full collection and returns the exposition text.
///
/// Always answers 200: failed steps only lower individual values to zero and
/// show up in `fastdfs_up` / `fastdfs_scrape_collector_success`.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.collector.scrape().await;
    ([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body)
}

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(landing_page(&state.collector.config().metrics_path))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": APP_NAME,
        "version": VERSION,
        "timestamp": jiff::Timestamp::now().to_string(),
    }))
}

pub(crate) fn landing_page(metrics_path: &str) -> String {
    let metrics_path = escape_html(metrics_path);
    format!(
        "<html>
<head><title>FastDFS Exporter v{VERSION}</title></head>
<body>
<h1>FastDFS Exporter v{VERSION}</h1>
<p><a href='{metrics_path}'>Metrics</a></p>
</body>
</html>
"
    )
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_links_metrics_path() {
        let page = landing_page("/probe/metrics");
        assert!(page.contains("<a href='/probe/metrics'>Metrics</a>"));
        assert!(page.contains(&format!("FastDFS Exporter v{VERSION}")));
    }

    #[test]
    fn test_landing_page_escapes_metrics_path() {
        let page = landing_page("/m'><script>&");
        assert!(page.contains("<a href='/m&#39;&gt;&lt;script&gt;&amp;'>Metrics</a>"));
        assert!(!page.contains("<script>"));
    }
}

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

use super::*;

const ALL_ENV_KEYS: [&str; 15] = [
    ENV_LISTEN_ADDRESS,
    ENV_METRICS_PATH,
    ENV_PODNAME,
    ENV_NAMESPACE,
    ENV_API_SERVER,
    ENV_KUBECTL,
    ENV_MONITOR_BIN,
    ENV_MONITOR_CONF,
    ENV_CLUSTER_CONFIG,
    ENV_SCRIPTS_DIR,
    ENV_SHELL,
    ENV_AUDIT_FILE,
    ENV_COMMAND_TIMEOUT,
    ENV_LOG_LEVEL,
    ENV_LOG_JSON,
];

fn parse(args: &[&str]) -> Opt {
    let mut argv = vec!["fastdfs-exporter"];
    argv.extend_from_slice(args);
    Opt::try_parse_from(argv).expect("arguments should parse")
}

#[test]
fn test_defaults_without_flags_or_env() {
    temp_env::with_vars_unset(ALL_ENV_KEYS, || {
        let opt = parse(&[]);
        assert_eq!(opt.listen_address, DEFAULT_LISTEN_ADDRESS);
        assert_eq!(opt.metrics_path, "/metrics");
        assert_eq!(opt.podname, "fastdfs-group0-storage0-0");
        assert_eq!(opt.command_timeout, 30);
        assert!(!opt.log_json);

        let config = RuntimeConfig::try_from(opt).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    });
}

#[test]
fn test_flags_override_defaults() {
    temp_env::with_vars_unset(ALL_ENV_KEYS, || {
        let opt = parse(&[
            "--web.listen-address",
            ":9188",
            "--web.path",
            "/probe",
            "--podname",
            "fastdfs-group1-storage0-0",
            "--namespace",
            "storage",
            "--api-server",
            "https://10.0.0.1:6443",
            "--command-timeout",
            "5",
        ]);
        let config = RuntimeConfig::try_from(opt).unwrap();

        assert_eq!(config.listen_address, "0.0.0.0:9188".parse().unwrap());
        assert_eq!(config.metrics_path, "/probe");
        assert_eq!(config.pod_name, "fastdfs-group1-storage0-0");
        assert_eq!(config.namespace.as_deref(), Some("storage"));
        assert_eq!(config.api_server.as_deref(), Some("https://10.0.0.1:6443"));
        assert_eq!(config.command_timeout, Duration::from_secs(5));
    });
}

#[test]
fn test_env_fallback() {
    temp_env::with_vars_unset(ALL_ENV_KEYS, || {
        temp_env::with_vars(
            [
                (ENV_PODNAME, Some("pod-from-env")),
                (ENV_NAMESPACE, Some("fdfs")),
                (ENV_COMMAND_TIMEOUT, Some("12")),
                (ENV_LOG_JSON, Some("true")),
            ],
            || {
                let opt = parse(&[]);
                assert!(opt.log_json);
                let config = RuntimeConfig::try_from(opt).unwrap();
                assert_eq!(config.pod_name, "pod-from-env");
                assert_eq!(config.namespace.as_deref(), Some("fdfs"));
                assert_eq!(config.command_timeout, Duration::from_secs(12));
            },
        );
    });
}

#[test]
fn test_blank_namespace_is_none() {
    temp_env::with_vars_unset(ALL_ENV_KEYS, || {
        let config = RuntimeConfig::try_from(parse(&["--namespace", "  "])).unwrap();
        assert_eq!(config.namespace, None);
    });
}

#[test]
fn test_zero_timeout_rejected() {
    temp_env::with_vars_unset(ALL_ENV_KEYS, || {
        let err = RuntimeConfig::try_from(parse(&["--command-timeout", "0"])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    });
}

#[test]
fn test_metrics_path_validation() {
    temp_env::with_vars_unset(ALL_ENV_KEYS, || {
        for path in ["metrics", "/", "/health"] {
            let err = RuntimeConfig::try_from(parse(&["--web.path", path])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidMetricsPath(..)), "{path} should be rejected");
        }
    });
}

#[test]
fn test_metrics_path_rejects_route_syntax() {
    temp_env::with_vars_unset(ALL_ENV_KEYS, || {
        for path in ["/stats/:node", "/stats/*rest", "/stats/{node}", "/stats/{", "/stats}", "/*"] {
            let err = RuntimeConfig::try_from(parse(&["--web.path", path])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidMetricsPath(..)), "{path} should be rejected");
        }

        for path in ["/stats/node:0", "/probe/metrics", "/metrics/"] {
            let config = RuntimeConfig::try_from(parse(&["--web.path", path])).unwrap();
            assert_eq!(config.metrics_path, path);
        }
    });
}

#[test]
fn test_parse_listen_address() {
    assert_eq!(parse_listen_address(":10000").unwrap(), "0.0.0.0:10000".parse().unwrap());
    assert_eq!(parse_listen_address("127.0.0.1:9000").unwrap(), "127.0.0.1:9000".parse().unwrap());
    assert_eq!(parse_listen_address("[::1]:9000").unwrap(), "[::1]:9000".parse().unwrap());
    assert!(parse_listen_address("localhost:8080").is_ok());
    assert!(matches!(
        parse_listen_address("not an address"),
        Err(ConfigError::InvalidListenAddress(..))
    ));
}

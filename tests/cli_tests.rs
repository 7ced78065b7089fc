use dashboard_etl::core::fetcher::DATA_ENDPOINT;
use httpmock::prelude::*;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dashboard-etl"))
        .args(args)
        // 開到最詳細，確認日誌不會混進 stdout
        .env("RUST_LOG", "dashboard_etl=trace")
        .output()
        .expect("failed to run dashboard-etl binary")
}

fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    format!("http://{}", listener.local_addr().unwrap())
}

#[test]
fn test_stdout_contains_only_the_view() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(DATA_ENDPOINT);
        then.status(200)
            .json_body(serde_json::json!([{"id": 1}, {"id": 2}]));
    });

    let output = run_cli(&["--base-url", server.base_url().as_str()]);

    api_mock.assert();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "<div>Dashboard</div>\n");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_json_logs_stay_off_stdout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(DATA_ENDPOINT);
        then.status(200)
            .json_body(serde_json::json!([{"id": 1}, {"id": 2}]));
    });

    let output = run_cli(&["--base-url", server.base_url().as_str(), "--json-logs", "--verbose"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "<div>Dashboard</div>\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.lines().any(|line| line.starts_with('{')));
}

#[test]
fn test_unreachable_server_exits_with_network_code() {
    let output = run_cli(&["--base-url", unused_base_url().as_str()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_server_error_exits_with_network_code() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(DATA_ENDPOINT);
        then.status(500);
    });

    let output = run_cli(&["--base-url", server.base_url().as_str()]);

    api_mock.assert();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_body_exits_with_parse_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(DATA_ENDPOINT);
        then.status(200).body("{\"id\": 1}");
    });

    let output = run_cli(&["--base-url", server.base_url().as_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_base_url_exits_with_config_code() {
    let output = run_cli(&["--base-url", "ftp://x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file_exits_with_system_code() {
    let output = run_cli(&["--config", "/definitely/missing/dashboard.toml"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_file_base_url_is_used() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(DATA_ENDPOINT);
        then.status(200).json_body(serde_json::json!([]));
    });

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "[server]\nbase_url = \"{}\"\n", server.base_url()).unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();

    let output = run_cli(&["--config", path.as_str()]);

    api_mock.assert();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "<div>Dashboard</div>\n");
}

//! End-to-end tests against a running server.

mod common;

use common::{sample_table, spawn_server};
use explaind::SymbolTable;

async fn get(addr: std::net::SocketAddr, path: &str) -> (u16, String, String) {
    let res = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    let status = res.status().as_u16();
    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = res.text().await.unwrap();
    (status, body, content_type)
}

#[tokio::test]
async fn test_value_lookup_round_trip() {
    let addr = spawn_server(sample_table()).await;

    let (status, body, content_type) = get(addr, "/explain/value/pi").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Circle constant.\n");
    assert_eq!(content_type, "text/plain; charset=utf-8");
}

#[tokio::test]
async fn test_function_lookup_round_trip() {
    let addr = spawn_server(sample_table()).await;

    let (status, body, _) = get(addr, "/explain/function/greet").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Greets someone.\n");
}

#[tokio::test]
async fn test_missing_name_is_400_on_every_lookup_endpoint() {
    let addr = spawn_server(sample_table()).await;

    for path in [
        "/explain/value",
        "/explain/value/",
        "/explain/function",
        "/explain/function/",
        "/explain/explain",
        "/explain/explain/",
    ] {
        let (status, body, _) = get(addr, path).await;
        assert_eq!(status, 400, "path: {path}");
        assert_eq!(body, "Request didn't contain a symbol name.\n");
    }
}

#[tokio::test]
async fn test_unknown_name_is_404_on_every_lookup_endpoint() {
    let addr = spawn_server(sample_table()).await;

    for path in [
        "/explain/value/nope",
        "/explain/function/nope",
        "/explain/explain/nope",
    ] {
        let (status, body, _) = get(addr, path).await;
        assert_eq!(status, 404, "path: {path}");
        assert_eq!(body, "nope is invalid.\n");
    }
}

#[tokio::test]
async fn test_known_but_undocumented_conflates_with_unknown() {
    let addr = spawn_server(sample_table()).await;

    let (status, body, _) = get(addr, "/explain/value/undocumented").await;
    assert_eq!(status, 404);
    assert_eq!(body, "undocumented is invalid.\n");
}

#[tokio::test]
async fn test_function_lookup_requires_callable_binding() {
    // value-only has docs as a value, but is not bound as a callable.
    let addr = spawn_server(sample_table()).await;

    let (status, body, _) = get(addr, "/explain/function/value-only").await;
    assert_eq!(status, 404);
    assert_eq!(body, "value-only is invalid.\n");
}

#[tokio::test]
async fn test_explain_with_both_docstrings() {
    let addr = spawn_server(sample_table()).await;

    let (status, body, _) = get(addr, "/explain/explain/both").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        "Value docstring is:\n> V\n\nFunction docstring is:\n> F\n"
    );
}

#[tokio::test]
async fn test_explain_with_value_only() {
    let addr = spawn_server(sample_table()).await;

    let (status, body, _) = get(addr, "/explain/explain/value-only").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Value docstring is:\n> V\n");
}

#[tokio::test]
async fn test_explain_indents_every_docstring_line() {
    let mut table = SymbolTable::new();
    table.define_value("multi", "A\nB");
    let addr = spawn_server(table).await;

    let (status, body, _) = get(addr, "/explain/explain/multi").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Value docstring is:\n> A\n> B\n");
}

#[tokio::test]
async fn test_help_is_fixed_and_stateless() {
    let empty = spawn_server(SymbolTable::new()).await;
    let full = spawn_server(sample_table()).await;

    let (status_a, body_a, content_type) = get(empty, "/explain/help").await;
    let (status_b, body_b, _) = get(full, "/explain/help").await;

    assert_eq!(status_a, 200);
    assert_eq!(status_b, 200);
    assert_eq!(body_a, body_b);
    assert!(body_a.ends_with('\n'));
    assert_eq!(content_type, "text/plain; charset=utf-8");
}

#[tokio::test]
async fn test_status_reports_version() {
    let addr = spawn_server(SymbolTable::new()).await;

    let res = reqwest::get(format!("http://{addr}/status")).await.unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let status: serde_json::Value = res.json().await.unwrap();
    assert_eq!(status["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(status["status"], "operational");
}

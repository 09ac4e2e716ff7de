//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use explaind::{HttpServer, ServerConfig, SymbolTable};

/// Spawn a real server on an ephemeral port, returning its address.
pub async fn spawn_server(table: SymbolTable) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(ServerConfig::default(), Arc::new(table));
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A table covering every docstring combination the endpoints distinguish.
pub fn sample_table() -> SymbolTable {
    let mut table = SymbolTable::new();
    table.define_value("pi", "Circle constant.");
    table.define_function("greet", "Greets someone.");
    table.define_value("both", "V");
    table.define_function("both", "F");
    table.define_value("value-only", "V");
    table.define_bare("undocumented");
    table
}

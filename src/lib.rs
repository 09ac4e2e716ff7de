//! Live docstring lookup server library.

pub mod config;
pub mod explain;
pub mod http;
pub mod observability;
pub mod source;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use source::{DocSource, SymbolTable};

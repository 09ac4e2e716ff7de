//! Axum handlers for the lookup endpoints.
//!
//! The three lookup handlers differ only in which docstring categories they
//! consult; validation and resolution are shared via [`run_lookup`].

use std::time::Instant;

use axum::extract::{Path, State};

use crate::explain::format;
use crate::explain::pipeline::{resolve, validate, Symbol};
use crate::explain::reply::{Reply, HELP_TEXT};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::source::DocSource;

/// Run the shared pipeline, then render the endpoint-specific body.
///
/// `render` returning `None` means the resolved symbol lacks the requested
/// documentation, which is reported with the same 404 as an unknown name.
fn run_lookup(
    docs: &dyn DocSource,
    raw: Option<String>,
    render: impl FnOnce(&Symbol<'_>) -> Option<String>,
) -> Reply {
    let name = match validate(raw) {
        Ok(name) => name,
        Err(reply) => return reply,
    };
    let symbol = match resolve(docs, &name) {
        Ok(symbol) => symbol,
        Err(reply) => return reply,
    };
    match render(&symbol) {
        Some(body) => Reply::ok(body),
        None => Reply::invalid(&name),
    }
}

fn record(endpoint: &'static str, raw: &Option<String>, reply: Reply, start: Instant) -> Reply {
    tracing::debug!(
        endpoint,
        name = raw.as_deref().unwrap_or(""),
        status = reply.status().as_u16(),
        "Docstring lookup"
    );
    metrics::record_request(endpoint, reply.status().as_u16(), start);
    reply
}

/// GET `/explain/value/{name}`: value docstring, verbatim.
pub async fn get_value_doc(
    State(state): State<AppState>,
    name: Option<Path<String>>,
) -> Reply {
    let start = Instant::now();
    let raw = name.map(|Path(n)| n);
    let reply = run_lookup(state.docs.as_ref(), raw.clone(), |sym| sym.value_doc());
    record("value", &raw, reply, start)
}

/// GET `/explain/function/{name}`: callable docstring, verbatim.
pub async fn get_function_doc(
    State(state): State<AppState>,
    name: Option<Path<String>>,
) -> Reply {
    let start = Instant::now();
    let raw = name.map(|Path(n)| n);
    let reply = run_lookup(state.docs.as_ref(), raw.clone(), |sym| sym.function_doc());
    record("function", &raw, reply, start)
}

/// GET `/explain/explain/{name}`: both categories, labelled sections.
pub async fn get_explain(
    State(state): State<AppState>,
    name: Option<Path<String>>,
) -> Reply {
    let start = Instant::now();
    let raw = name.map(|Path(n)| n);
    let reply = run_lookup(state.docs.as_ref(), raw.clone(), |sym| {
        format::combined(sym.value_doc().as_deref(), sym.function_doc().as_deref())
    });
    record("explain", &raw, reply, start)
}

/// GET `/explain/help`: fixed endpoint summary, consults no state.
pub async fn get_help() -> Reply {
    let start = Instant::now();
    record("help", &None, Reply::ok(HELP_TEXT), start)
}

//! Plain-text reply values.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// 400 body sent when the path carries no symbol name.
pub const MISSING_NAME: &str = "Request didn't contain a symbol name.";

/// Fixed body for `/explain/help`.
pub const HELP_TEXT: &str = "\
Symbol documentation lookup endpoints:

  GET /explain/value/:name      value docstring for :name, verbatim
  GET /explain/function/:name   function docstring for :name, verbatim
  GET /explain/explain/:name    value and function docstrings, labelled
  GET /explain/help             this summary

Lookups answer 404 when :name is not a known symbol or has no docstring
of the requested kind.";

/// A finished plain-text response.
///
/// The body is stored without its terminator; rendering appends exactly one
/// trailing newline regardless of the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    status: StatusCode,
    body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    /// 400: no symbol name was supplied.
    pub fn missing_name() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: MISSING_NAME.to_string(),
        }
    }

    /// 404: unknown symbol, or known but lacking the requested docstring.
    /// The two cases share one message on purpose.
    pub fn invalid(name: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: format!("{name} is invalid."),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self.body),
        )
            .into_response()
    }
}

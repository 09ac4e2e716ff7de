//! Docstring lookup core.
//!
//! # Data Flow
//! ```text
//! GET /explain/...
//!     → handlers.rs (extract path parameter)
//!     → pipeline.rs (validate name, resolve symbol)
//!     → format.rs (indent docstrings, compose sections)
//!     → reply.rs (status + text/plain body, one trailing newline)
//! ```
//!
//! Every failure path is an ordinary [`Reply`] value; nothing in this
//! module returns an error or panics on request data.

pub mod format;
pub mod handlers;
pub mod pipeline;
pub mod reply;

pub use reply::{Reply, HELP_TEXT};

//! Documentation sources.
//!
//! # Data Flow
//! ```text
//! host runtime / config file
//!     → DocSource (capability trait: is_known, is_callable, docs)
//!     → shared via Arc with every request handler
//! ```
//!
//! # Design Decisions
//! - Lookups are soft: a miss never interns a new symbol
//! - All queries are total functions returning Option, never errors
//! - The table is immutable once the server starts; no locking needed

pub mod table;

pub use table::SymbolTable;

/// Read-only introspection capability the lookup core depends on.
///
/// Backed in production by whatever the host runtime exposes (the bundled
/// binary uses a [`SymbolTable`] built from config) and in tests by a
/// [`SymbolTable`] built programmatically.
pub trait DocSource: Send + Sync {
    /// Whether `name` is a known symbol. Exact, case-sensitive match.
    fn is_known(&self, name: &str) -> bool;

    /// Whether `name` is bound as a callable definition.
    fn is_callable(&self, name: &str) -> bool;

    /// Documentation attached to `name` as a named value, if any.
    fn value_doc(&self, name: &str) -> Option<String>;

    /// Documentation attached to `name` as a callable, if any.
    ///
    /// A docstring can be reachable here even when the symbol is not bound
    /// as a callable; callers must gate on [`DocSource::is_callable`] first.
    fn callable_doc(&self, name: &str) -> Option<String>;
}

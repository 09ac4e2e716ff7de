//! Shared request pipeline: validate the raw name, then resolve it.
//!
//! Each stage either passes its result on or terminates the request with a
//! finished [`Reply`]; all three lookup endpoints run the same two stages.

use crate::explain::reply::Reply;
use crate::source::DocSource;

/// Check that a path parameter was supplied and is non-empty.
///
/// Purely structural: no identifier syntax rules are applied.
pub fn validate(raw: Option<String>) -> Result<String, Reply> {
    match raw {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(Reply::missing_name()),
    }
}

/// Soft lookup of `name` against the host's symbol table.
///
/// A miss yields the 404 reply; it never interns a new symbol.
pub fn resolve<'a>(docs: &'a dyn DocSource, name: &'a str) -> Result<Symbol<'a>, Reply> {
    if docs.is_known(name) {
        Ok(Symbol { name, docs })
    } else {
        Err(Reply::invalid(name))
    }
}

/// A name that resolved against the symbol table, with access to its
/// documentation categories.
pub struct Symbol<'a> {
    name: &'a str,
    docs: &'a dyn DocSource,
}

impl std::fmt::Debug for Symbol<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Symbol").field("name", &self.name).finish()
    }
}

impl Symbol<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn value_doc(&self) -> Option<String> {
        self.docs.value_doc(self.name)
    }

    /// Callable docstring, gated on the symbol actually being bound as a
    /// callable definition.
    pub fn function_doc(&self) -> Option<String> {
        if self.docs.is_callable(self.name) {
            self.docs.callable_doc(self.name)
        } else {
            None
        }
    }
}

//! In-memory symbol table backing [`DocSource`].

use std::collections::HashMap;

use crate::config::schema::SymbolConfig;
use crate::source::DocSource;

#[derive(Debug, Clone, Default)]
struct SymbolEntry {
    value_doc: Option<String>,
    callable_doc: Option<String>,
    callable: bool,
}

/// Fixed mapping of symbol names to their documentation.
///
/// Built once at startup (from config, or programmatically in tests) and
/// shared read-only across requests.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from the `[[symbols]]` section of the config file.
    pub fn from_config(symbols: &[SymbolConfig]) -> Self {
        let mut table = Self::new();
        for sym in symbols {
            table.entries.insert(
                sym.name.clone(),
                SymbolEntry {
                    value_doc: sym.value_doc.clone(),
                    callable_doc: sym.callable_doc.clone(),
                    callable: sym.callable,
                },
            );
        }
        table
    }

    /// Register a symbol with no documentation in either category.
    pub fn define_bare(&mut self, name: impl Into<String>) {
        self.entries.entry(name.into()).or_default();
    }

    /// Register (or update) a symbol with a value docstring.
    pub fn define_value(&mut self, name: impl Into<String>, doc: impl Into<String>) {
        self.entries.entry(name.into()).or_default().value_doc = Some(doc.into());
    }

    /// Register (or update) a symbol as a callable with a docstring.
    pub fn define_function(&mut self, name: impl Into<String>, doc: impl Into<String>) {
        let entry = self.entries.entry(name.into()).or_default();
        entry.callable_doc = Some(doc.into());
        entry.callable = true;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocSource for SymbolTable {
    fn is_known(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn is_callable(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.callable)
    }

    fn value_doc(&self, name: &str) -> Option<String> {
        self.entries.get(name)?.value_doc.clone()
    }

    fn callable_doc(&self, name: &str) -> Option<String> {
        self.entries.get(name)?.callable_doc.clone()
    }
}

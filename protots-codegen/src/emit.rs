//! Import bookkeeping toward the emission layer.
//!
//! The resolver references symbols; this module collects and deduplicates
//! the imports those references require. Rendering full declaration files
//! is the emission layer's job.

use crate::resolve::TypeExpr;
use std::collections::{BTreeMap, BTreeSet};

/// Deduplicated set of imports, grouped per module.
///
/// BTree containers keep the rendered output deterministic.
#[derive(Debug, Default)]
pub struct ImportSet {
    modules: BTreeMap<String, BTreeSet<String>>,
}

impl ImportSet {
    /// Creates an empty import set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every import a type expression requires.
    pub fn record(&mut self, expr: &TypeExpr) {
        match expr {
            TypeExpr::Imported { module, ident } => self.add(module.clone(), ident.clone()),
            TypeExpr::Nullable(inner) | TypeExpr::Array(inner) => self.record(inner),
            TypeExpr::Primitive(_) => {}
        }
    }

    /// Adds one import explicitly.
    pub fn add(&mut self, module: impl Into<String>, ident: impl Into<String>) {
        self.modules
            .entry(module.into())
            .or_default()
            .insert(ident.into());
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Returns the number of modules imported from.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Renders the import statements, one line per module, sorted by
    /// module and by identifier within each line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        for (module, idents) in &self.modules {
            let joined = idents.iter().cloned().collect::<Vec<_>>().join(", ");
            output.push_str(&format!("import {{ {joined} }} from \"./{module}\";\n"));
        }
        output
    }
}

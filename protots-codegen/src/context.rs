//! Generation context.
//!
//! Wraps the registry and the resolved options into one immutable value
//! that is threaded by shared reference into every resolution and policy
//! call. The registry build completes before the context exists, so no
//! call ever observes a partially built map.

use crate::options::GenOptions;
use crate::registry::TypeMap;

/// Immutable per-run state for resolution and policy calls.
#[derive(Debug)]
pub struct GenContext {
    /// The built type registry.
    pub type_map: TypeMap,
    /// Generator-wide options.
    pub options: GenOptions,
}

impl GenContext {
    /// Creates a context from a built registry and resolved options.
    #[must_use]
    pub fn new(type_map: TypeMap, options: GenOptions) -> Self {
        Self { type_map, options }
    }
}

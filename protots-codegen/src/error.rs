//! Error types for type resolution.

use thiserror::Error;

/// Error type for registry building and type resolution.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Two descriptors registered under one fully-qualified name. The
    /// registry cannot be trusted after this; the run must abort.
    #[error("duplicate type '{name}' in descriptor set")]
    DuplicateType {
        /// Fully-qualified type name.
        name: String,
    },

    /// A field references a type absent from the descriptor set.
    #[error("unknown type '{type_name}' referenced from '{referrer}'")]
    UnresolvedType {
        /// The unresolved fully-qualified reference.
        type_name: String,
        /// Fully-qualified name of the containing type.
        referrer: String,
    },

    /// Descriptor failed a defensive check.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] protots_descriptor::DescriptorError),
}

impl CodegenError {
    /// Creates a duplicate type error.
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        Self::DuplicateType { name: name.into() }
    }

    /// Creates an unresolved type error.
    pub fn unresolved(type_name: impl Into<String>, referrer: impl Into<String>) -> Self {
        Self::UnresolvedType {
            type_name: type_name.into(),
            referrer: referrer.into(),
        }
    }
}

//! # ProtoTS Codegen
//!
//! TypeScript type resolution and field optionality policy.
//!
//! This crate provides:
//! - A per-run type registry keyed by fully-qualified name
//! - Resolution of type references to TypeScript type expressions
//! - Well-known wrapper type substitution
//! - The field optionality policy
//! - Import deduplication toward the emission layer

pub mod context;
pub mod emit;
pub mod error;
pub mod optional;
pub mod options;
pub mod registry;
pub mod resolve;

pub use context::GenContext;
pub use emit::ImportSet;
pub use error::CodegenError;
pub use optional::is_optional_property;
pub use options::{GenOptions, UseOptionals};
pub use registry::{RegisteredType, TypeDescriptor, TypeMap};
pub use resolve::{TsPrimitive, TypeExpr, field_type, resolve_type, scalar_primitive};

use protots_descriptor::{FileDescriptor, validate_file};
use tracing::debug;

/// Validates the descriptor set, builds the type registry, and wraps both
/// into a generation context.
///
/// # Errors
/// Returns `CodegenError` if a descriptor fails a defensive check or two
/// descriptors share a fully-qualified name.
pub fn build_context(
    files: &[FileDescriptor],
    options: GenOptions,
) -> Result<GenContext, CodegenError> {
    for file in files {
        validate_file(file)?;
    }
    let type_map = TypeMap::build(files)?;
    debug!(files = files.len(), types = type_map.len(), "context built");
    Ok(GenContext::new(type_map, options))
}

//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use protots::prelude::*;
//! ```

// Descriptor types
pub use protots_descriptor::{
    DescriptorError, EnumDescriptor, EnumValueDescriptor, FieldDescriptor, FieldType,
    FileDescriptor, Label, MessageDescriptor, MessageOptions, validate_file,
};

// Codegen types
pub use protots_codegen::{
    CodegenError, GenContext, GenOptions, ImportSet, TsPrimitive, TypeDescriptor, TypeExpr,
    TypeMap, UseOptionals, build_context, field_type, is_optional_property, resolve_type,
};

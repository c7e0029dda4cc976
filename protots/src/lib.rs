//! # ProtoTS
//!
//! Protobuf descriptor to TypeScript declaration mapping.
//!
//! ProtoTS resolves fully-qualified schema type references into TypeScript
//! type expressions and decides, per field, whether the generated property
//! is optional, under configurable generation policies.
//!
//! ## Quick Start
//!
//! ```
//! use protots::prelude::*;
//!
//! let mut file = FileDescriptor::new("namespace.proto", "namespace");
//! file.add_message(MessageDescriptor::new("Message"));
//!
//! let ctx = build_context(&[file], GenOptions::default()).unwrap();
//! let expr = resolve_type(&ctx, ".namespace.Message", ".namespace.Other").unwrap();
//! assert_eq!(expr.render(), "Message");
//! ```
//!
//! ## Crate Organization
//!
//! - [`descriptor`] - File, message, enum, and field descriptors
//! - [`codegen`] - Type registry, resolver, and optionality policy

pub mod prelude;

/// Descriptor data model.
pub mod descriptor {
    pub use protots_descriptor::*;
}

/// Type resolution and optionality policy.
pub mod codegen {
    pub use protots_codegen::*;
}

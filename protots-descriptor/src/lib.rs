//! # ProtoTS Descriptor
//!
//! Protobuf descriptor data model for ProtoTS code generation.
//!
//! This crate provides:
//! - File, message, and enum descriptor types
//! - Field descriptors with labels, type tags, and presence markers
//! - Per-message options (map-entry flag)
//! - Defensive descriptor validation

pub mod error;
pub mod fields;
pub mod files;
pub mod messages;
pub mod validation;

pub use error::DescriptorError;
pub use fields::{FieldDescriptor, FieldType, Label};
pub use files::FileDescriptor;
pub use messages::{EnumDescriptor, EnumValueDescriptor, MessageDescriptor, MessageOptions};
pub use validation::validate_file;

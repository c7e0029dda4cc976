//! Field descriptor definitions.
//!
//! This module contains the data structures describing a single message
//! field: its wire type tag, label, and presence markers.

/// Field label as carried by the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// No explicit label (proto3 singular field).
    #[default]
    None,
    /// Proto2-style explicit optional label.
    Optional,
    /// Repeated field.
    Repeated,
}

/// Field type tag as carried by the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 64-bit floating point.
    Double,
    /// 32-bit floating point.
    Float,
    /// Variable-length signed 64-bit integer.
    Int64,
    /// Variable-length unsigned 64-bit integer.
    Uint64,
    /// Variable-length signed 32-bit integer.
    Int32,
    /// Fixed-width unsigned 64-bit integer.
    Fixed64,
    /// Fixed-width unsigned 32-bit integer.
    Fixed32,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    String,
    /// Length-delimited byte sequence.
    Bytes,
    /// Variable-length unsigned 32-bit integer.
    Uint32,
    /// Fixed-width signed 32-bit integer.
    Sfixed32,
    /// Fixed-width signed 64-bit integer.
    Sfixed64,
    /// ZigZag-encoded signed 32-bit integer.
    Sint32,
    /// ZigZag-encoded signed 64-bit integer.
    Sint64,
    /// Enum type; the field carries a fully-qualified type name.
    Enum,
    /// Message type; the field carries a fully-qualified type name.
    Message,
}

impl FieldType {
    /// Returns true if this is a message type.
    #[must_use]
    pub const fn is_message(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Returns true if this is an enum type.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum)
    }

    /// Returns true if this is a scalar type (neither message nor enum).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Message | Self::Enum)
    }
}

/// Field descriptor within a message.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field number (tag).
    pub number: u32,
    /// Type tag.
    pub field_type: FieldType,
    /// Fully-qualified type name, for message and enum fields.
    pub type_name: Option<String>,
    /// Field label.
    pub label: Label,
    /// Proto3 explicit presence marker.
    pub proto3_optional: bool,
}

impl FieldDescriptor {
    /// Creates a new field descriptor with no label and no presence marker.
    #[must_use]
    pub fn new(name: impl Into<String>, number: u32, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            number,
            field_type,
            type_name: None,
            label: Label::None,
            proto3_optional: false,
        }
    }

    /// Creates a message-typed field referencing a fully-qualified type.
    #[must_use]
    pub fn message(name: impl Into<String>, number: u32, type_name: impl Into<String>) -> Self {
        let mut field = Self::new(name, number, FieldType::Message);
        field.type_name = Some(type_name.into());
        field
    }

    /// Creates an enum-typed field referencing a fully-qualified type.
    #[must_use]
    pub fn enumeration(name: impl Into<String>, number: u32, type_name: impl Into<String>) -> Self {
        let mut field = Self::new(name, number, FieldType::Enum);
        field.type_name = Some(type_name.into());
        field
    }

    /// Returns true if the field is repeated.
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.label == Label::Repeated
    }

    /// Returns true if the field carries the proto2-style optional label.
    #[must_use]
    pub fn has_optional_label(&self) -> bool {
        self.label == Label::Optional
    }

    /// Returns true if the field is message-typed.
    #[must_use]
    pub fn is_message(&self) -> bool {
        self.field_type.is_message()
    }
}

//! Message and enum descriptor definitions.
//!
//! This module contains the data structures describing messages (with
//! nested messages and enums) and enum types.

use crate::fields::FieldDescriptor;

/// Per-message options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MessageOptions {
    /// True for synthetic map-entry wrapper messages.
    pub map_entry: bool,
}

/// Message descriptor.
#[derive(Debug, Clone)]
pub struct MessageDescriptor {
    /// Message name (unqualified).
    pub name: String,
    /// Fields of the message.
    pub fields: Vec<FieldDescriptor>,
    /// Nested message types.
    pub nested_messages: Vec<MessageDescriptor>,
    /// Nested enum types.
    pub nested_enums: Vec<EnumDescriptor>,
    /// Message options.
    pub options: MessageOptions,
}

impl MessageDescriptor {
    /// Creates a new empty message descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            nested_messages: Vec::new(),
            nested_enums: Vec::new(),
            options: MessageOptions::default(),
        }
    }

    /// Adds a field to the message.
    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Adds a nested message type.
    pub fn add_nested_message(&mut self, message: MessageDescriptor) {
        self.nested_messages.push(message);
    }

    /// Adds a nested enum type.
    pub fn add_nested_enum(&mut self, enum_desc: EnumDescriptor) {
        self.nested_enums.push(enum_desc);
    }

    /// Returns true if this is a synthetic map-entry wrapper.
    #[must_use]
    pub fn is_map_entry(&self) -> bool {
        self.options.map_entry
    }

    /// Returns true if the message declares nested types.
    #[must_use]
    pub fn has_nested_types(&self) -> bool {
        !self.nested_messages.is_empty() || !self.nested_enums.is_empty()
    }
}

/// Enum descriptor.
#[derive(Debug, Clone)]
pub struct EnumDescriptor {
    /// Enum name (unqualified).
    pub name: String,
    /// Enum values.
    pub values: Vec<EnumValueDescriptor>,
}

impl EnumDescriptor {
    /// Creates a new empty enum descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Adds a value to the enum.
    pub fn add_value(&mut self, value: EnumValueDescriptor) {
        self.values.push(value);
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&EnumValueDescriptor> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Enum value descriptor.
#[derive(Debug, Clone)]
pub struct EnumValueDescriptor {
    /// Value name.
    pub name: String,
    /// Numeric value.
    pub number: i32,
}

impl EnumValueDescriptor {
    /// Creates a new enum value descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

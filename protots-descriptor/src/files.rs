//! File descriptor definitions.

use crate::messages::{EnumDescriptor, MessageDescriptor};

/// File descriptor: one schema source file with its top-level types.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    /// Schema file name, e.g. `"namespace.proto"`.
    pub name: String,
    /// Package name, empty for the unnamed package.
    pub package: String,
    /// Top-level message types.
    pub messages: Vec<MessageDescriptor>,
    /// Top-level enum types.
    pub enums: Vec<EnumDescriptor>,
}

impl FileDescriptor {
    /// Creates a new empty file descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            messages: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Adds a top-level message type.
    pub fn add_message(&mut self, message: MessageDescriptor) {
        self.messages.push(message);
    }

    /// Adds a top-level enum type.
    pub fn add_enum(&mut self, enum_desc: EnumDescriptor) {
        self.enums.push(enum_desc);
    }

    /// Returns the module specifier generated symbols import from:
    /// the file name with its `.proto` suffix stripped.
    #[must_use]
    pub fn module_name(&self) -> &str {
        self.name.strip_suffix(".proto").unwrap_or(&self.name)
    }
}

//! Error types for descriptor validation.

use thiserror::Error;

/// Error type for defensive descriptor checks.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Repeated label combined with the proto3-optional marker.
    #[error("conflicting presence on field '{field}' in message '{message}': repeated and proto3-optional")]
    ConflictingPresence {
        /// Containing message name.
        message: String,
        /// Field name.
        field: String,
    },

    /// Two fields in one message share a field number.
    #[error("duplicate field number {number} on field '{field}' in message '{message}'")]
    DuplicateFieldNumber {
        /// Containing message name.
        message: String,
        /// Field name.
        field: String,
        /// Duplicated field number.
        number: u32,
    },

    /// Message or enum field without a type reference.
    #[error("field '{field}' in message '{message}' has no type name")]
    MissingTypeName {
        /// Containing message name.
        message: String,
        /// Field name.
        field: String,
    },
}

impl DescriptorError {
    /// Creates a conflicting presence error.
    pub fn conflicting_presence(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ConflictingPresence {
            message: message.into(),
            field: field.into(),
        }
    }

    /// Creates a duplicate field number error.
    pub fn duplicate_number(
        message: impl Into<String>,
        field: impl Into<String>,
        number: u32,
    ) -> Self {
        Self::DuplicateFieldNumber {
            message: message.into(),
            field: field.into(),
            number,
        }
    }

    /// Creates a missing type name error.
    pub fn missing_type_name(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingTypeName {
            message: message.into(),
            field: field.into(),
        }
    }
}

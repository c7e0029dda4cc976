//! Defensive descriptor checks.
//!
//! Descriptors arrive from an upstream descriptor provider and are assumed
//! well-formed; these checks only reject combinations the generator cannot
//! give a meaning to.

use crate::error::DescriptorError;
use crate::fields::FieldDescriptor;
use crate::files::FileDescriptor;
use crate::messages::MessageDescriptor;

/// Validates all messages in a file descriptor.
///
/// # Errors
/// Returns `DescriptorError` on the first offending field.
pub fn validate_file(file: &FileDescriptor) -> Result<(), DescriptorError> {
    for message in &file.messages {
        validate_message(message)?;
    }
    Ok(())
}

/// Validates a message and its nested messages.
fn validate_message(message: &MessageDescriptor) -> Result<(), DescriptorError> {
    use std::collections::HashSet;

    let mut seen_numbers = HashSet::new();

    for field in &message.fields {
        validate_field(message, field)?;
        if !seen_numbers.insert(field.number) {
            return Err(DescriptorError::duplicate_number(
                &message.name,
                &field.name,
                field.number,
            ));
        }
    }

    for nested in &message.nested_messages {
        validate_message(nested)?;
    }

    Ok(())
}

/// Validates a single field.
fn validate_field(
    message: &MessageDescriptor,
    field: &FieldDescriptor,
) -> Result<(), DescriptorError> {
    // A well-formed schema compiler never emits both; the optionality
    // rules would disagree on the outcome.
    if field.proto3_optional && field.is_repeated() {
        return Err(DescriptorError::conflicting_presence(
            &message.name,
            &field.name,
        ));
    }

    if !field.field_type.is_scalar() && field.type_name.is_none() {
        return Err(DescriptorError::missing_type_name(
            &message.name,
            &field.name,
        ));
    }

    Ok(())
}

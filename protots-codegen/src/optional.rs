//! Field optionality policy.
//!
//! Decides whether a generated property carries its own absence marker.
//! A short-circuiting chain of guard clauses; rule order is load-bearing
//! and each rule is independently testable.

use crate::options::{GenOptions, UseOptionals};
use protots_descriptor::{FieldDescriptor, MessageOptions};

/// Returns true if the generated property for `field` should be optional.
///
/// Total over well-formed inputs; the repeated + proto3-optional
/// combination is invalid input and asserted against.
#[must_use]
pub fn is_optional_property(
    field: &FieldDescriptor,
    container: &MessageOptions,
    options: &GenOptions,
) -> bool {
    debug_assert!(
        !(field.proto3_optional && field.is_repeated()),
        "conflicting presence on field '{}'",
        field.name
    );

    // Explicit author intent always wins.
    if field.proto3_optional {
        return true;
    }
    if field.has_optional_label() {
        return true;
    }

    // A repeated field is an always-present, possibly empty sequence.
    // Checked before the mode rules so `All` cannot override it.
    if field.is_repeated() {
        return false;
    }

    // Map-entry key/value legs are always meaningful.
    if container.map_entry {
        return false;
    }

    match options.use_optionals {
        UseOptionals::All => true,
        UseOptionals::Messages => field.is_message(),
        UseOptionals::None => false,
    }
}

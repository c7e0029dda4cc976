//! Type registry.
//!
//! Built once per run from the full descriptor set, then shared read-only
//! by every resolution call. Maps each fully-qualified type name to the
//! module it is generated into, its local identifier, and its descriptor.

use crate::error::CodegenError;
use protots_descriptor::{EnumDescriptor, FileDescriptor, MessageDescriptor};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Descriptor of a registered type.
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    /// Message type.
    Message(MessageDescriptor),
    /// Enum type.
    Enum(EnumDescriptor),
}

impl TypeDescriptor {
    /// Returns the unqualified name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Message(m) => &m.name,
            Self::Enum(e) => &e.name,
        }
    }

    /// Returns true if this is a message type.
    #[must_use]
    pub const fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }

    /// Returns true if this is an enum type.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

/// One registered type: where it lives and what it is called there.
#[derive(Debug, Clone)]
pub struct RegisteredType {
    /// Module the generated symbol is imported from.
    pub module: String,
    /// Generated local identifier. Nested types join their enclosing
    /// message names with `_`, so `Message.Inner` becomes `Message_Inner`.
    /// Distinct qualified names can mangle identically; that collision is
    /// an accepted limitation.
    pub ident: String,
    /// The registered descriptor.
    pub descriptor: TypeDescriptor,
}

/// Immutable mapping from fully-qualified type name to registered type.
///
/// Keys carry a leading dot: `.package.Message.Inner`.
#[derive(Debug, Default)]
pub struct TypeMap {
    entries: HashMap<String, RegisteredType>,
}

impl TypeMap {
    /// Builds the registry over every message and enum transitively
    /// reachable from the given files, nested types included.
    ///
    /// # Errors
    /// Returns `CodegenError::DuplicateType` if two descriptors register
    /// under the same fully-qualified name.
    pub fn build(files: &[FileDescriptor]) -> Result<Self, CodegenError> {
        let mut entries = HashMap::new();

        for file in files {
            let module = file.module_name();
            let prefix = if file.package.is_empty() {
                String::new()
            } else {
                format!(".{}", file.package)
            };

            for message in &file.messages {
                register_message(&mut entries, module, &prefix, &[], message)?;
            }
            for enum_desc in &file.enums {
                let path = [enum_desc.name.as_str()];
                insert(
                    &mut entries,
                    module,
                    &prefix,
                    &path,
                    TypeDescriptor::Enum(enum_desc.clone()),
                )?;
            }
        }

        let map = Self { entries };
        debug!(types = map.len(), "type registry built");
        Ok(map)
    }

    /// Looks up a registered type by fully-qualified name.
    #[must_use]
    pub fn get(&self, fqn: &str) -> Option<&RegisteredType> {
        self.entries.get(fqn)
    }

    /// Returns true if a type with the given fully-qualified name exists.
    #[must_use]
    pub fn contains(&self, fqn: &str) -> bool {
        self.entries.contains_key(fqn)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredType)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Registers a message, then its nested messages and enums.
fn register_message(
    entries: &mut HashMap<String, RegisteredType>,
    module: &str,
    prefix: &str,
    parents: &[&str],
    message: &MessageDescriptor,
) -> Result<(), CodegenError> {
    let mut path = parents.to_vec();
    path.push(&message.name);

    insert(
        entries,
        module,
        prefix,
        &path,
        TypeDescriptor::Message(message.clone()),
    )?;

    for nested in &message.nested_messages {
        register_message(entries, module, prefix, &path, nested)?;
    }
    for enum_desc in &message.nested_enums {
        let mut enum_path = path.clone();
        enum_path.push(&enum_desc.name);
        insert(
            entries,
            module,
            prefix,
            &enum_path,
            TypeDescriptor::Enum(enum_desc.clone()),
        )?;
    }

    Ok(())
}

/// Inserts one entry, keyed by fully-qualified name.
fn insert(
    entries: &mut HashMap<String, RegisteredType>,
    module: &str,
    prefix: &str,
    path: &[&str],
    descriptor: TypeDescriptor,
) -> Result<(), CodegenError> {
    let fqn = format!("{}.{}", prefix, path.join("."));
    let ident = path.join("_");

    match entries.entry(fqn) {
        Entry::Occupied(occupied) => Err(CodegenError::duplicate_type(occupied.key().as_str())),
        Entry::Vacant(vacant) => {
            vacant.insert(RegisteredType {
                module: module.to_string(),
                ident,
                descriptor,
            });
            Ok(())
        }
    }
}

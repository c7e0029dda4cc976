//! Type resolution.
//!
//! Maps a fully-qualified schema type reference to a TypeScript type
//! expression: well-known wrapper types collapse to inline primitives,
//! everything else becomes an import-qualified reference to a registered
//! symbol. Resolution is a pure function of the context and the reference.

use crate::context::GenContext;
use crate::error::CodegenError;
use crate::options::UseOptionals;
use protots_descriptor::{FieldDescriptor, FieldType};
use std::fmt;

/// TypeScript primitive keywords used in generated expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsPrimitive {
    /// `string`.
    String,
    /// `number`.
    Number,
    /// `boolean`.
    Boolean,
    /// `Uint8Array`.
    Bytes,
    /// `any`.
    Any,
    /// `{ [key: string]: any }`.
    JsonObject,
}

impl TsPrimitive {
    /// Returns the TypeScript keyword for this primitive.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Bytes => "Uint8Array",
            Self::Any => "any",
            Self::JsonObject => "{ [key: string]: any }",
        }
    }
}

/// A resolved TypeScript type expression.
///
/// The resolver only ever references registered types; it never duplicates
/// a definition. Deduplicating repeated imports from one module is the
/// emission layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Import-qualified reference to a generated symbol.
    Imported {
        /// Module the symbol is imported from.
        module: String,
        /// Local identifier within that module.
        ident: String,
    },
    /// Inline primitive keyword.
    Primitive(TsPrimitive),
    /// Union with the absent marker: `<inner> | undefined`.
    Nullable(Box<TypeExpr>),
    /// Array of the inner expression.
    Array(Box<TypeExpr>),
}

impl TypeExpr {
    /// Creates an import-qualified reference.
    #[must_use]
    pub fn imported(module: impl Into<String>, ident: impl Into<String>) -> Self {
        Self::Imported {
            module: module.into(),
            ident: ident.into(),
        }
    }

    /// Wraps an expression in the absent-marker union.
    #[must_use]
    pub fn nullable(inner: TypeExpr) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Wraps an expression in an array.
    #[must_use]
    pub fn array(inner: TypeExpr) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Renders the expression as TypeScript source text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Imported { ident, .. } => ident.clone(),
            Self::Primitive(prim) => prim.keyword().to_string(),
            Self::Nullable(inner) => format!("{} | undefined", inner.render()),
            // A union inner needs parentheses to bind before `[]`.
            Self::Array(inner) => match **inner {
                Self::Nullable(_) => format!("({})[]", inner.render()),
                _ => format!("{}[]", inner.render()),
            },
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Substitutes a well-known wrapper or JSON value type, if `fqn` names one.
///
/// Under `UseOptionals::None` absence is embedded in the expression itself,
/// since no other mechanism exists; under `Messages`/`All` the enclosing
/// property is made optional by the policy instead, so the bare form is
/// emitted.
fn well_known_expr(fqn: &str, use_optionals: UseOptionals) -> Option<TypeExpr> {
    let bare = match fqn {
        ".google.protobuf.StringValue" => TypeExpr::Primitive(TsPrimitive::String),
        ".google.protobuf.Int32Value"
        | ".google.protobuf.Int64Value"
        | ".google.protobuf.UInt32Value"
        | ".google.protobuf.UInt64Value"
        | ".google.protobuf.FloatValue"
        | ".google.protobuf.DoubleValue" => TypeExpr::Primitive(TsPrimitive::Number),
        ".google.protobuf.BoolValue" => TypeExpr::Primitive(TsPrimitive::Boolean),
        ".google.protobuf.BytesValue" => TypeExpr::Primitive(TsPrimitive::Bytes),
        ".google.protobuf.Value" => TypeExpr::Primitive(TsPrimitive::Any),
        ".google.protobuf.Struct" => TypeExpr::Primitive(TsPrimitive::JsonObject),
        ".google.protobuf.ListValue" => TypeExpr::array(TypeExpr::Primitive(TsPrimitive::Any)),
        _ => return None,
    };

    Some(match use_optionals {
        UseOptionals::None => TypeExpr::nullable(bare),
        UseOptionals::Messages | UseOptionals::All => bare,
    })
}

/// Resolves a fully-qualified type reference to a type expression.
///
/// `referrer` is the fully-qualified name of the containing type, carried
/// for diagnostics only.
///
/// # Errors
/// Returns `CodegenError::UnresolvedType` if `fqn` names neither a
/// well-known type nor a registered one.
pub fn resolve_type(
    ctx: &GenContext,
    fqn: &str,
    referrer: &str,
) -> Result<TypeExpr, CodegenError> {
    if let Some(expr) = well_known_expr(fqn, ctx.options.use_optionals) {
        return Ok(expr);
    }

    let entry = ctx
        .type_map
        .get(fqn)
        .ok_or_else(|| CodegenError::unresolved(fqn, referrer))?;
    Ok(TypeExpr::imported(&entry.module, &entry.ident))
}

/// Maps a scalar type tag to its TypeScript primitive.
///
/// Returns `None` for message and enum tags, which resolve by name. All
/// integer widths map to `number`.
#[must_use]
pub const fn scalar_primitive(field_type: FieldType) -> Option<TsPrimitive> {
    match field_type {
        FieldType::Double
        | FieldType::Float
        | FieldType::Int64
        | FieldType::Uint64
        | FieldType::Int32
        | FieldType::Fixed64
        | FieldType::Fixed32
        | FieldType::Uint32
        | FieldType::Sfixed32
        | FieldType::Sfixed64
        | FieldType::Sint32
        | FieldType::Sint64 => Some(TsPrimitive::Number),
        FieldType::Bool => Some(TsPrimitive::Boolean),
        FieldType::String => Some(TsPrimitive::String),
        FieldType::Bytes => Some(TsPrimitive::Bytes),
        FieldType::Enum | FieldType::Message => None,
    }
}

/// Resolves the full type expression for a field: scalar tags map to
/// primitives, message/enum fields resolve by reference, and repeated
/// fields wrap in an array.
///
/// # Errors
/// Returns `CodegenError::UnresolvedType` for unknown references or a
/// message/enum field missing its type name.
pub fn field_type(
    ctx: &GenContext,
    field: &FieldDescriptor,
    referrer: &str,
) -> Result<TypeExpr, CodegenError> {
    let base = match scalar_primitive(field.field_type) {
        Some(prim) => TypeExpr::Primitive(prim),
        None => {
            let fqn = field
                .type_name
                .as_deref()
                .ok_or_else(|| CodegenError::unresolved(&field.name, referrer))?;
            resolve_type(ctx, fqn, referrer)?
        }
    };

    Ok(if field.is_repeated() {
        TypeExpr::array(base)
    } else {
        base
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GenOptions;
    use crate::registry::TypeMap;
    use protots_descriptor::{FieldDescriptor, FileDescriptor, Label, MessageDescriptor};

    fn context(use_optionals: UseOptionals) -> GenContext {
        let mut inner = MessageDescriptor::new("Inner");
        inner.add_field(FieldDescriptor::new("value", 1, FieldType::String));

        let mut message = MessageDescriptor::new("Message");
        message.add_nested_message(inner);

        let mut file = FileDescriptor::new("namespace.proto", "namespace");
        file.add_message(message);

        let type_map = TypeMap::build(&[file]).unwrap();
        GenContext::new(type_map, GenOptions::with_use_optionals(use_optionals))
    }

    #[test]
    fn test_top_level_message_reference() {
        let ctx = context(UseOptionals::None);
        let expr = resolve_type(&ctx, ".namespace.Message", ".namespace.Other").unwrap();

        assert_eq!(expr, TypeExpr::imported("namespace", "Message"));
        assert_eq!(expr.render(), "Message");
    }

    #[test]
    fn test_nested_message_reference() {
        let ctx = context(UseOptionals::None);
        let expr = resolve_type(&ctx, ".namespace.Message.Inner", ".namespace.Message").unwrap();

        assert_eq!(expr, TypeExpr::imported("namespace", "Message_Inner"));
    }

    #[test]
    fn test_string_wrapper_embeds_absent_marker() {
        let ctx = context(UseOptionals::None);
        let expr = resolve_type(&ctx, ".google.protobuf.StringValue", ".namespace.Message").unwrap();

        assert_eq!(expr.render(), "string | undefined");
    }

    #[test]
    fn test_string_wrapper_bare_under_messages() {
        let ctx = context(UseOptionals::Messages);
        let expr = resolve_type(&ctx, ".google.protobuf.StringValue", ".namespace.Message").unwrap();

        assert_eq!(expr.render(), "string");
    }

    #[test]
    fn test_string_wrapper_bare_under_all() {
        let ctx = context(UseOptionals::All);
        let expr = resolve_type(&ctx, ".google.protobuf.StringValue", ".namespace.Message").unwrap();

        assert_eq!(expr.render(), "string");
    }

    #[test]
    fn test_numeric_and_bool_wrappers() {
        let ctx = context(UseOptionals::All);
        for fqn in [
            ".google.protobuf.Int32Value",
            ".google.protobuf.Int64Value",
            ".google.protobuf.UInt32Value",
            ".google.protobuf.UInt64Value",
            ".google.protobuf.FloatValue",
            ".google.protobuf.DoubleValue",
        ] {
            let expr = resolve_type(&ctx, fqn, ".namespace.Message").unwrap();
            assert_eq!(expr.render(), "number", "{fqn}");
        }

        let expr = resolve_type(&ctx, ".google.protobuf.BoolValue", ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "boolean");
        let expr = resolve_type(&ctx, ".google.protobuf.BytesValue", ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "Uint8Array");
    }

    #[test]
    fn test_json_value_types() {
        let ctx = context(UseOptionals::None);
        let expr = resolve_type(&ctx, ".google.protobuf.Value", ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "any | undefined");

        let expr = resolve_type(&ctx, ".google.protobuf.ListValue", ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "any[] | undefined");

        let expr = resolve_type(&ctx, ".google.protobuf.Struct", ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "{ [key: string]: any } | undefined");

        let ctx = context(UseOptionals::All);
        let expr = resolve_type(&ctx, ".google.protobuf.Struct", ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "{ [key: string]: any }");
    }

    #[test]
    fn test_unknown_reference_names_referrer() {
        let ctx = context(UseOptionals::None);
        let err = resolve_type(&ctx, ".namespace.Missing", ".namespace.Message").unwrap_err();

        match err {
            CodegenError::UnresolvedType { type_name, referrer } => {
                assert_eq!(type_name, ".namespace.Missing");
                assert_eq!(referrer, ".namespace.Message");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_scalar_primitive_mapping() {
        assert_eq!(scalar_primitive(FieldType::Int64), Some(TsPrimitive::Number));
        assert_eq!(scalar_primitive(FieldType::Sint32), Some(TsPrimitive::Number));
        assert_eq!(scalar_primitive(FieldType::Bool), Some(TsPrimitive::Boolean));
        assert_eq!(scalar_primitive(FieldType::String), Some(TsPrimitive::String));
        assert_eq!(scalar_primitive(FieldType::Bytes), Some(TsPrimitive::Bytes));
        assert_eq!(scalar_primitive(FieldType::Message), None);
        assert_eq!(scalar_primitive(FieldType::Enum), None);
    }

    #[test]
    fn test_field_type_scalar() {
        let ctx = context(UseOptionals::None);
        let field = FieldDescriptor::new("name", 1, FieldType::String);

        let expr = field_type(&ctx, &field, ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "string");
    }

    #[test]
    fn test_field_type_repeated_message() {
        let ctx = context(UseOptionals::None);
        let mut field = FieldDescriptor::message("inners", 1, ".namespace.Message.Inner");
        field.label = Label::Repeated;

        let expr = field_type(&ctx, &field, ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "Message_Inner[]");
    }

    #[test]
    fn test_field_type_repeated_wrapper_parenthesizes_union() {
        let ctx = context(UseOptionals::None);
        let mut field = FieldDescriptor::message("names", 1, ".google.protobuf.StringValue");
        field.label = Label::Repeated;

        let expr = field_type(&ctx, &field, ".namespace.Message").unwrap();
        assert_eq!(expr.render(), "(string | undefined)[]");
    }

    #[test]
    fn test_field_type_missing_type_name() {
        let ctx = context(UseOptionals::None);
        let field = FieldDescriptor::new("child", 1, FieldType::Message);

        assert!(field_type(&ctx, &field, ".namespace.Message").is_err());
    }

    #[test]
    fn test_display_matches_render() {
        let expr = TypeExpr::nullable(TypeExpr::Primitive(TsPrimitive::String));
        assert_eq!(expr.to_string(), expr.render());
    }
}

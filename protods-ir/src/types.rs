//! Field and map type definitions.

use protods_core::{ABSTRACTION_MARKER, strip_marker, to_pascal_case};
use serde::Serialize;

/// Reference to a message declared in the same file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeRef {
    /// Declared message name (e.g., "Example").
    pub name: String,
    /// Abstraction name of the message (e.g., "IExample").
    pub inter_name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            inter_name: format!("{ABSTRACTION_MARKER}{name}"),
            name,
        }
    }
}

/// Resolved type of a message field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldType {
    /// A scalar, enum or otherwise unresolved type, kept as declared.
    Scalar { name: String },
    /// A singular field holding a message declared in the same file.
    Message { target: TypeRef },
    /// A map field; `type_name` is the canonical name of a [`MapType`] in the
    /// same [`File`](crate::File).
    Map { type_name: String },
}

impl FieldType {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar { name: name.into() }
    }

    /// Whether the field's type is itself an abstraction type.
    pub fn is_abstraction(&self) -> bool {
        !matches!(self, Self::Scalar { .. })
    }
}

/// A field in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Declared (snake_case) name.
    pub name: String,
    /// CamelCase display name used in accessor names.
    pub camel_name: String,
    pub comment: Option<String>,
    pub ty: FieldType,
    /// Declared with the `repeated` label.
    pub repeated: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        let name = name.into();
        Self {
            camel_name: to_pascal_case(&name),
            name,
            comment: None,
            ty,
            repeated: false,
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn repeated(mut self, repeated: bool) -> Self {
        self.repeated = repeated;
        self
    }

    /// Name of the map type this field refers to, if it is a map field.
    pub fn map_type_name(&self) -> Option<&str> {
        match &self.ty {
            FieldType::Map { type_name } => Some(type_name),
            _ => None,
        }
    }
}

/// How a map's values are represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum ValueKind {
    /// Plain values, stored by copy.
    Scalar,
    /// Values are messages of the same file, stored as owned references.
    Reference(TypeRef),
}

/// A deduplicated map shape, shared by every field with the same key and
/// value types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapType {
    /// Key type, as declared.
    pub key: String,
    /// Value type, as declared.
    pub value: String,
    pub value_kind: ValueKind,
    /// Canonical abstraction name, the deduplication key.
    pub type_name: String,
}

impl MapType {
    /// Create an unresolved map type for a `(key, value)` pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        Self {
            type_name: Self::canonical_name(&key, &value),
            key,
            value,
            value_kind: ValueKind::Scalar,
        }
    }

    /// Canonical name for a map shape (e.g., `("string", "Example")` ->
    /// `"IStringExampleMap"`).
    ///
    /// Qualified names contribute every segment, so the result is always a
    /// valid identifier (`"google.protobuf.Timestamp"` -> `GoogleProtobufTimestamp`).
    pub fn canonical_name(key: &str, value: &str) -> String {
        format!(
            "{ABSTRACTION_MARKER}{}{}Map",
            identifier(key),
            identifier(value)
        )
    }

    /// Mark the value type as a reference to a declared message.
    pub fn resolve(&mut self, target: TypeRef) {
        self.value_kind = ValueKind::Reference(target);
    }

    /// Whether values are references to declared messages.
    pub fn is_reference(&self) -> bool {
        matches!(self.value_kind, ValueKind::Reference(_))
    }

    /// The referenced message, for reference-valued maps.
    pub fn target(&self) -> Option<&TypeRef> {
        match &self.value_kind {
            ValueKind::Reference(target) => Some(target),
            ValueKind::Scalar => None,
        }
    }

    /// Value type as seen through the abstraction: the target's abstraction
    /// name for references, the declared type otherwise.
    pub fn value_type_name(&self) -> &str {
        match &self.value_kind {
            ValueKind::Reference(target) => &target.inter_name,
            ValueKind::Scalar => &self.value,
        }
    }

    /// Name of the concrete container type (the canonical name without the
    /// abstraction marker).
    pub fn concrete_name(&self) -> &str {
        strip_marker(&self.type_name)
    }
}

fn identifier(ty: &str) -> String {
    ty.split('.').map(to_pascal_case).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_inter_name() {
        let r = TypeRef::new("Example");
        assert_eq!(r.name, "Example");
        assert_eq!(r.inter_name, "IExample");
    }

    #[test]
    fn test_field_camel_name() {
        let field = Field::new("map_field", FieldType::scalar("string"));
        assert_eq!(field.camel_name, "MapField");
        assert!(!field.repeated);
        assert!(field.map_type_name().is_none());
    }

    #[test]
    fn test_field_type_is_abstraction() {
        assert!(!FieldType::scalar("string").is_abstraction());
        assert!(
            FieldType::Message {
                target: TypeRef::new("Example")
            }
            .is_abstraction()
        );
        assert!(
            FieldType::Map {
                type_name: "IStringInt32Map".into()
            }
            .is_abstraction()
        );
    }

    #[test]
    fn test_map_canonical_name() {
        assert_eq!(
            MapType::canonical_name("string", "Example"),
            "IStringExampleMap"
        );
        assert_eq!(MapType::canonical_name("string", "int32"), "IStringInt32Map");
        assert_eq!(
            MapType::canonical_name("int64", "user_info"),
            "IInt64UserInfoMap"
        );
    }

    #[test]
    fn test_map_canonical_name_of_qualified_types() {
        assert_eq!(
            MapType::canonical_name("string", "google.protobuf.Timestamp"),
            "IStringGoogleProtobufTimestampMap"
        );
        assert_eq!(
            MapType::canonical_name("string", ".demo.Example"),
            "IStringDemoExampleMap"
        );
    }

    #[test]
    fn test_map_unresolved() {
        let map = MapType::new("string", "int32");
        assert!(!map.is_reference());
        assert!(map.target().is_none());
        assert_eq!(map.value_type_name(), "int32");
        assert_eq!(map.concrete_name(), "StringInt32Map");
    }

    #[test]
    fn test_map_resolve() {
        let mut map = MapType::new("string", "Example");
        map.resolve(TypeRef::new("Example"));

        assert!(map.is_reference());
        assert_eq!(map.value, "Example");
        assert_eq!(map.value_type_name(), "IExample");
        assert_eq!(map.target().map(|t| t.name.as_str()), Some("Example"));
    }
}

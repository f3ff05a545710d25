//! Resource schemas for response shaping.
//!
//! Every shapeable resource registers a fixed, ordered list of fields at
//! compile time: a field name plus a typed accessor. Shaping never inspects
//! types at runtime; a resource that wants to be shaped implements
//! [`Shapeable`] and the rest of the subsystem works off its schema.

use serde::Serialize;
use uuid::Uuid;

/// A field value drawn from the closed set of primitive types the
/// resources expose.
///
/// Serializes transparently: `Null` becomes JSON `null`, the rest become
/// their natural JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An absent value, represented as an explicit `null` entry.
    Null,
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// An identifier value.
    Uuid(Uuid),
    /// A text value.
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Uuid(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// One entry in a resource schema: a field name and the accessor that
/// reads it off an instance.
pub struct Field<T> {
    /// The exposed field name.
    pub name: &'static str,
    /// Reads the field's value from an instance.
    pub read: fn(&T) -> FieldValue,
}

/// Capability trait for resources that support response shaping.
///
/// Implementations declare their schema as a static, ordered slice; the
/// identity field must be part of the schema so that a defaulted selection
/// includes it in schema position.
pub trait Shapeable: Sized {
    /// Resource token used to derive link relation names
    /// (e.g. `"employee"` yields `delete_employee`).
    const RESOURCE: &'static str;

    /// Name of the identity field within the schema.
    const ID_FIELD: &'static str = "id";

    /// The ordered field schema for this resource type.
    fn schema() -> &'static [Field<Self>];

    /// The identity value link construction depends on.
    fn identity(&self) -> Uuid;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_serialization() {
        assert_eq!(serde_json::to_value(FieldValue::Null).unwrap(), json!(null));
        assert_eq!(
            serde_json::to_value(FieldValue::Int(42)).unwrap(),
            json!(42)
        );
        assert_eq!(
            serde_json::to_value(FieldValue::Text("Sam".into())).unwrap(),
            json!("Sam")
        );
    }

    #[test]
    fn test_field_value_from_option() {
        assert_eq!(FieldValue::from(None::<String>), FieldValue::Null);
        assert_eq!(
            FieldValue::from(Some("Manager")),
            FieldValue::Text("Manager".into())
        );
    }

    #[test]
    fn test_field_value_from_u32_widens() {
        assert_eq!(FieldValue::from(26u32), FieldValue::Int(26));
    }
}

//! Field selection for the `fields` query parameter.
//!
//! Resolves a raw comma-separated field specification against a resource
//! schema into an ordered set of field descriptors:
//!
//! - absent/blank specification selects every schema field in schema order
//! - tokens match schema names case-insensitively
//! - unknown tokens are silently dropped, never an error
//! - the identity field is always included, even when the caller omitted it

use super::schema::{Field, Shapeable};

/// An ordered, resolved set of fields to include in a response.
///
/// Construction is the Field Selector operation; the selection is then
/// consumed by the projector. Duplicate tokens resolve to a single entry.
pub struct FieldSelection<T: 'static> {
    fields: Vec<&'static Field<T>>,
}

impl<T: Shapeable> FieldSelection<T> {
    /// Resolves a raw field specification against `T`'s schema.
    ///
    /// When a specification is present, the identity field comes first and
    /// the remaining fields follow caller token order. Otherwise the whole
    /// schema is selected in declaration order.
    pub fn resolve(raw: Option<&str>) -> Self {
        let schema = T::schema();
        let spec = raw.map(str::trim).unwrap_or("");

        if spec.is_empty() {
            return Self {
                fields: schema.iter().collect(),
            };
        }

        let mut fields: Vec<&'static Field<T>> = Vec::new();

        // Link construction needs the identity even when not requested.
        if let Some(id) = schema
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(T::ID_FIELD))
        {
            fields.push(id);
        }

        for token in spec.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let Some(field) = schema.iter().find(|f| f.name.eq_ignore_ascii_case(token))
            else {
                // Unknown tokens degrade gracefully instead of failing
                // the whole response.
                continue;
            };
            if !fields.iter().any(|f| std::ptr::eq(*f, field)) {
                fields.push(field);
            }
        }

        Self { fields }
    }
}

impl<T> FieldSelection<T> {
    /// The resolved field descriptors, in inclusion order.
    pub fn fields(&self) -> &[&'static Field<T>] {
        &self.fields
    }

    /// Number of resolved fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the selection is empty (only possible for an empty schema).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether a field name is part of the selection (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::schema::FieldValue;
    use uuid::Uuid;

    #[derive(Debug)]
    struct Person {
        id: Uuid,
        name: String,
        age: u32,
        position: String,
    }

    fn person_id(p: &Person) -> FieldValue {
        FieldValue::Uuid(p.id)
    }
    fn person_name(p: &Person) -> FieldValue {
        FieldValue::Text(p.name.clone())
    }
    fn person_age(p: &Person) -> FieldValue {
        FieldValue::from(p.age)
    }
    fn person_position(p: &Person) -> FieldValue {
        FieldValue::Text(p.position.clone())
    }

    static PERSON_SCHEMA: &[Field<Person>] = &[
        Field {
            name: "id",
            read: person_id,
        },
        Field {
            name: "name",
            read: person_name,
        },
        Field {
            name: "age",
            read: person_age,
        },
        Field {
            name: "position",
            read: person_position,
        },
    ];

    impl Shapeable for Person {
        const RESOURCE: &'static str = "person";

        fn schema() -> &'static [Field<Self>] {
            PERSON_SCHEMA
        }

        fn identity(&self) -> Uuid {
            self.id
        }
    }

    fn names(selection: &FieldSelection<Person>) -> Vec<&'static str> {
        selection.fields().iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_absent_spec_selects_whole_schema() {
        let selection = FieldSelection::<Person>::resolve(None);
        assert_eq!(names(&selection), vec!["id", "name", "age", "position"]);
    }

    #[test]
    fn test_blank_spec_selects_whole_schema() {
        let selection = FieldSelection::<Person>::resolve(Some("   "));
        assert_eq!(names(&selection), vec!["id", "name", "age", "position"]);
    }

    #[test]
    fn test_explicit_spec_prepends_identity() {
        let selection = FieldSelection::<Person>::resolve(Some("Name"));
        assert_eq!(names(&selection), vec!["id", "name"]);
    }

    #[test]
    fn test_caller_order_preserved_after_identity() {
        let selection = FieldSelection::<Person>::resolve(Some("position, age"));
        assert_eq!(names(&selection), vec!["id", "position", "age"]);
    }

    #[test]
    fn test_unknown_tokens_silently_dropped() {
        let selection = FieldSelection::<Person>::resolve(Some("name,salary,age"));
        assert_eq!(names(&selection), vec!["id", "name", "age"]);
    }

    #[test]
    fn test_unknown_only_degrades_to_identity() {
        let selection = FieldSelection::<Person>::resolve(Some("salary,department"));
        assert_eq!(names(&selection), vec!["id"]);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let selection = FieldSelection::<Person>::resolve(Some("NAME,Position"));
        assert_eq!(names(&selection), vec!["id", "name", "position"]);
    }

    #[test]
    fn test_duplicates_and_explicit_id_collapse() {
        let selection = FieldSelection::<Person>::resolve(Some("id,name,name,ID"));
        assert_eq!(names(&selection), vec!["id", "name"]);
    }

    #[test]
    fn test_contains() {
        let selection = FieldSelection::<Person>::resolve(Some("name"));
        assert!(selection.contains("Name"));
        assert!(!selection.contains("age"));
    }
}

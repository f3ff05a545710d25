//! Entity projection.
//!
//! Projects fixed-schema entities down to a resolved field selection,
//! producing shaped entities: ordered field-name/value bags that keep the
//! identity value alongside the bag so link construction never re-parses
//! the projected fields.

use serde::ser::{Serialize, SerializeMap, Serializer};
use uuid::Uuid;

use super::fields::FieldSelection;
use super::links::Link;
use super::schema::{FieldValue, Shapeable};

/// An entity instance projected down to its selected fields.
///
/// Serializes as a JSON object of the selected fields in selection order;
/// when item links have been attached, they appear under the reserved
/// `links` key after the fields.
#[derive(Debug)]
pub struct ShapedEntity {
    identity: Uuid,
    fields: Vec<(&'static str, FieldValue)>,
    links: Vec<Link>,
}

impl ShapedEntity {
    /// The identity value of the source entity, kept alongside the bag.
    pub fn identity(&self) -> Uuid {
        self.identity
    }

    /// The projected fields, in selection order.
    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        &self.fields
    }

    /// Looks up a projected field by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// The attached item links (empty in flat mode).
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Attaches the item's operation links under the reserved key.
    /// Called by the assembler before the entity is exposed to callers.
    pub(crate) fn attach_links(&mut self, links: Vec<Link>) {
        self.links = links;
    }
}

impl Serialize for ShapedEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(!self.links.is_empty());
        let mut map = serializer.serialize_map(Some(self.fields.len() + extra))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        if !self.links.is_empty() {
            map.serialize_entry("links", &self.links)?;
        }
        map.end()
    }
}

/// Projects one entity through a resolved field selection.
///
/// Side-effect-free; null field values become explicit null entries rather
/// than being omitted.
pub fn project<T: Shapeable>(entity: &T, selection: &FieldSelection<T>) -> ShapedEntity {
    let fields = selection
        .fields()
        .iter()
        .map(|field| (field.name, (field.read)(entity)))
        .collect();

    ShapedEntity {
        identity: entity.identity(),
        fields,
        links: Vec::new(),
    }
}

/// Projects a batch of entities, preserving input order exactly.
pub fn project_all<T: Shapeable>(entities: &[T], selection: &FieldSelection<T>) -> Vec<ShapedEntity> {
    entities
        .iter()
        .map(|entity| project(entity, selection))
        .collect()
}

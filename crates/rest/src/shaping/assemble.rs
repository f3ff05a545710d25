//! Response assembly.
//!
//! Orchestrates the shaping pipeline: resolve the field selection, project
//! every entity, evaluate the negotiation gate, and either return the flat
//! projected sequence or decorate items and collection with hypermedia
//! links. This is the single entry point request handlers use.

use mime::Mime;
use serde::ser::{Serialize, Serializer};

use super::fields::FieldSelection;
use super::links::{LinkCollectionWrapper, ResourceLinks, RouteContext};
use super::negotiation::wants_links;
use super::project::{project_all, ShapedEntity};
use super::schema::Shapeable;

/// The two possible response shapes behind one contract.
///
/// Exactly one variant is populated per response; callers branch on the
/// variant. Serializes as a bare array in flat mode and as a
/// `{value, links}` object in linked mode.
#[derive(Debug)]
pub enum ResponseEnvelope {
    /// Bare ordered sequence of shaped entities.
    Flat(Vec<ShapedEntity>),
    /// Shaped entities decorated with item links, wrapped with
    /// collection-level links.
    Linked(LinkCollectionWrapper),
}

impl ResponseEnvelope {
    /// Whether the envelope carries hypermedia links.
    pub fn has_links(&self) -> bool {
        matches!(self, ResponseEnvelope::Linked(_))
    }

    /// The shaped items, regardless of variant, in response order.
    pub fn items(&self) -> &[ShapedEntity] {
        match self {
            ResponseEnvelope::Flat(items) => items,
            ResponseEnvelope::Linked(wrapper) => &wrapper.value,
        }
    }
}

impl Serialize for ResponseEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseEnvelope::Flat(items) => items.serialize(serializer),
            ResponseEnvelope::Linked(wrapper) => wrapper.serialize(serializer),
        }
    }
}

/// Assembles the response body for a collection of entities.
///
/// Pure function of its inputs plus the link-resolution capability; no
/// state is retained between calls, and identical inputs produce identical
/// envelopes.
pub fn assemble<T: Shapeable + 'static>(
    entities: &[T],
    raw_fields: Option<&str>,
    media: Option<&Mime>,
    links: &ResourceLinks,
    ctx: &RouteContext,
) -> ResponseEnvelope {
    let selection = FieldSelection::<T>::resolve(raw_fields);
    let mut shaped = project_all(entities, &selection);

    if !wants_links(media) {
        return ResponseEnvelope::Flat(shaped);
    }

    for (entity, item) in entities.iter().zip(&mut shaped) {
        item.attach_links(links.links_for_item(ctx, entity.identity()));
    }
    let wrapper = links.links_for_collection(ctx, LinkCollectionWrapper::new(shaped));
    ResponseEnvelope::Linked(wrapper)
}

//! Dynamic response shaping and conditional hypermedia links.
//!
//! The pipeline runs strictly forward over request-scoped values:
//!
//! 1. [`fields`] - resolve the raw `fields` specification against a
//!    resource schema
//! 2. [`project`] - project entities down to the resolved selection
//! 3. [`negotiation`] - decide from the negotiated media type whether to
//!    attach links
//! 4. [`links`] - build item and collection links through the validated
//!    operation registry
//! 5. [`assemble`] - produce the flat or linked response envelope
//!
//! Every component is a stateless transformation; requests can run the
//! whole pipeline concurrently without synchronization.

pub mod assemble;
pub mod fields;
pub mod links;
pub mod negotiation;
pub mod project;
pub mod schema;

pub use assemble::{assemble, ResponseEnvelope};
pub use fields::FieldSelection;
pub use links::{
    Link, LinkCollectionWrapper, LinkError, OperationRegistry, ResourceLinks, RouteContext,
};
pub use negotiation::wants_links;
pub use project::{project, project_all, ShapedEntity};
pub use schema::{Field, FieldValue, Shapeable};

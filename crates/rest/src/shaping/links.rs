//! Hypermedia link construction.
//!
//! Links are resolved through an explicit operation registry: each named
//! operation maps to a route template and an HTTP method. Per-resource link
//! sets are validated against the registry when the application starts, so
//! an operation rename or a template/parameter mismatch fails fast instead
//! of silently dropping links at request time. After validation, request
//! time link generation is pure template substitution.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::project::ShapedEntity;

/// An immutable hypermedia link: absolute URL, relation name, HTTP method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Absolute URL of the related operation.
    pub href: String,
    /// Relation name (`self`, `delete_employee`, ...).
    pub rel: String,
    /// HTTP method of the related operation.
    pub method: &'static str,
}

impl Link {
    /// Creates a new link.
    pub fn new(href: impl Into<String>, rel: impl Into<String>, method: &'static str) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            method,
        }
    }
}

/// An ordered collection of shaped entities plus collection-level links.
#[derive(Debug, Serialize)]
pub struct LinkCollectionWrapper {
    /// The decorated items.
    pub value: Vec<ShapedEntity>,
    /// Collection-level links (at least the collection `self` link).
    pub links: Vec<Link>,
}

impl LinkCollectionWrapper {
    /// Wraps a sequence of shaped entities with an empty link list.
    pub fn new(value: Vec<ShapedEntity>) -> Self {
        Self {
            value,
            links: Vec::new(),
        }
    }
}

/// A registered operation: route template plus HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Route template with `{param}` placeholders, e.g.
    /// `/api/companies/{company_id}/employees/{employee_id}`.
    pub template: &'static str,
    /// HTTP method of the operation.
    pub method: &'static str,
}

/// Static catalog mapping operation names to route templates.
///
/// Populated once at startup, next to the router definition, and consumed
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    ops: HashMap<&'static str, Operation>,
}

impl OperationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operation under a unique name.
    pub fn register(&mut self, name: &'static str, method: &'static str, template: &'static str) {
        self.ops.insert(name, Operation { template, method });
    }

    /// Looks up an operation by name.
    pub fn get(&self, name: &str) -> Option<Operation> {
        self.ops.get(name).copied()
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Link configuration errors, surfaced at startup validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// A link set references an operation name missing from the registry.
    UnknownOperation {
        /// The missing operation name.
        operation: &'static str,
    },

    /// An operation template uses a placeholder the link context cannot
    /// bind.
    UnboundPlaceholder {
        /// The operation whose template is invalid.
        operation: &'static str,
        /// The placeholder with no matching route parameter.
        placeholder: String,
    },

    /// A link set was built without its mandatory `self` operation.
    MissingSelfOperation {
        /// The resource whose link set is incomplete.
        resource: &'static str,
    },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::UnknownOperation { operation } => {
                write!(f, "unknown operation in link configuration: {}", operation)
            }
            LinkError::UnboundPlaceholder {
                operation,
                placeholder,
            } => {
                write!(
                    f,
                    "operation {} references route parameter {{{}}} with no binding",
                    operation, placeholder
                )
            }
            LinkError::MissingSelfOperation { resource } => {
                write!(f, "link set for {} has no self operation", resource)
            }
        }
    }
}

impl std::error::Error for LinkError {}

/// Route-scoped values needed to resolve links for one request: the server
/// base URL, the currently-known route parameters (e.g. the parent company
/// id), and the pass-through field specification for deep `self` links.
#[derive(Debug, Clone)]
pub struct RouteContext {
    base_url: String,
    params: Vec<(&'static str, String)>,
    fields: Option<String>,
}

impl RouteContext {
    /// Creates a context rooted at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            params: Vec::new(),
            fields: None,
        }
    }

    /// Binds a route parameter.
    pub fn with_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Carries the caller's field specification into item `self` links so
    /// deep links preserve shaping. Blank specs are dropped.
    pub fn with_fields(mut self, fields: Option<&str>) -> Self {
        self.fields = fields
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        self
    }

    /// The bound route parameters.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Debug, Clone)]
struct ItemLink {
    rel: String,
    op: Operation,
}

/// A validated, per-resource-type link factory.
///
/// Holds the item operations (in canonical order: self, delete, update,
/// partial update) and the collection operation for one resource type.
/// Resource types without all four item operations configure a reduced
/// set. Constructed through [`ResourceLinksBuilder`], which performs the
/// startup validation.
#[derive(Debug, Clone)]
pub struct ResourceLinks {
    resource: &'static str,
    id_param: &'static str,
    item_links: Vec<ItemLink>,
    self_op: Operation,
    collection_op: Operation,
}

impl ResourceLinks {
    /// Starts building a link set for a resource type whose identity binds
    /// to the given route parameter.
    pub fn builder(resource: &'static str, id_param: &'static str) -> ResourceLinksBuilder {
        ResourceLinksBuilder {
            resource,
            id_param,
            parent_params: &[],
            self_op: None,
            delete_op: None,
            update_op: None,
            partial_update_op: None,
            collection_op: None,
        }
    }

    /// Produces the ordered operation links for a single item.
    ///
    /// The `self` link carries the context's pass-through field
    /// specification; the remaining links do not.
    pub fn links_for_item(&self, ctx: &RouteContext, id: Uuid) -> Vec<Link> {
        self.item_links
            .iter()
            .map(|item| {
                let mut href = self.substitute(item.op.template, ctx, Some(id));
                if item.rel == "self" {
                    if let Some(fields) = &ctx.fields {
                        let query: String =
                            url::form_urlencoded::Serializer::new(String::new())
                                .append_pair("fields", fields)
                                .finish();
                        href = format!("{}?{}", href, query);
                    }
                }
                Link::new(href, item.rel.clone(), item.op.method)
            })
            .collect()
    }

    /// Appends the collection-level `self` link to an existing wrapper.
    ///
    /// Item-level links already embedded in the wrapper's elements are
    /// untouched.
    pub fn links_for_collection(
        &self,
        ctx: &RouteContext,
        mut wrapper: LinkCollectionWrapper,
    ) -> LinkCollectionWrapper {
        let href = self.substitute(self.collection_op.template, ctx, None);
        wrapper
            .links
            .push(Link::new(href, "self", self.collection_op.method));
        wrapper
    }

    /// Resolves the absolute URL of a single item, without query
    /// parameters. Used for `Location` headers on create.
    pub fn item_href(&self, ctx: &RouteContext, id: Uuid) -> String {
        self.substitute(self.self_op.template, ctx, Some(id))
    }

    /// The resource token this link set serves.
    pub fn resource(&self) -> &'static str {
        self.resource
    }

    fn substitute(&self, template: &str, ctx: &RouteContext, id: Option<Uuid>) -> String {
        let mut path = template.to_string();
        for (name, value) in ctx.params() {
            path = path.replace(&format!("{{{}}}", name), value);
        }
        if let Some(id) = id {
            path = path.replace(&format!("{{{}}}", self.id_param), &id.to_string());
        }
        format!("{}{}", ctx.base(), path)
    }
}

/// Builder for [`ResourceLinks`]; `build` validates the configuration
/// against the operation registry.
#[derive(Debug)]
pub struct ResourceLinksBuilder {
    resource: &'static str,
    id_param: &'static str,
    parent_params: &'static [&'static str],
    self_op: Option<&'static str>,
    delete_op: Option<&'static str>,
    update_op: Option<&'static str>,
    partial_update_op: Option<&'static str>,
    collection_op: Option<&'static str>,
}

impl ResourceLinksBuilder {
    /// Declares the parent route parameters the surrounding routes bind
    /// (e.g. `company_id` for employees). Template placeholders must be
    /// covered by these plus the identity parameter.
    pub fn parent_params(mut self, params: &'static [&'static str]) -> Self {
        self.parent_params = params;
        self
    }

    /// Names the single-item retrieval operation (`self`/GET link).
    pub fn item_self(mut self, operation: &'static str) -> Self {
        self.self_op = Some(operation);
        self
    }

    /// Names the delete operation (`delete_<resource>`/DELETE link).
    pub fn delete(mut self, operation: &'static str) -> Self {
        self.delete_op = Some(operation);
        self
    }

    /// Names the full-update operation (`update_<resource>`/PUT link).
    pub fn update(mut self, operation: &'static str) -> Self {
        self.update_op = Some(operation);
        self
    }

    /// Names the partial-update operation
    /// (`partially_update_<resource>`/PATCH link).
    pub fn partial_update(mut self, operation: &'static str) -> Self {
        self.partial_update_op = Some(operation);
        self
    }

    /// Names the list operation (collection `self`/GET link).
    pub fn collection(mut self, operation: &'static str) -> Self {
        self.collection_op = Some(operation);
        self
    }

    /// Validates the configuration against the registry and produces the
    /// link factory. Fails when an operation name is unregistered, a
    /// template placeholder has no binding, or the mandatory `self` /
    /// collection operations are missing.
    pub fn build(self, registry: &OperationRegistry) -> Result<ResourceLinks, LinkError> {
        let self_name = self.self_op.ok_or(LinkError::MissingSelfOperation {
            resource: self.resource,
        })?;
        let collection_name = self.collection_op.ok_or(LinkError::MissingSelfOperation {
            resource: self.resource,
        })?;

        let self_op = self.resolve_item(registry, self_name)?;
        let collection_op = self.resolve_collection(registry, collection_name)?;

        let mut item_links = vec![ItemLink {
            rel: "self".to_string(),
            op: self_op,
        }];
        if let Some(name) = self.delete_op {
            item_links.push(ItemLink {
                rel: format!("delete_{}", self.resource),
                op: self.resolve_item(registry, name)?,
            });
        }
        if let Some(name) = self.update_op {
            item_links.push(ItemLink {
                rel: format!("update_{}", self.resource),
                op: self.resolve_item(registry, name)?,
            });
        }
        if let Some(name) = self.partial_update_op {
            item_links.push(ItemLink {
                rel: format!("partially_update_{}", self.resource),
                op: self.resolve_item(registry, name)?,
            });
        }

        Ok(ResourceLinks {
            resource: self.resource,
            id_param: self.id_param,
            item_links,
            self_op,
            collection_op,
        })
    }

    fn resolve_item(
        &self,
        registry: &OperationRegistry,
        name: &'static str,
    ) -> Result<Operation, LinkError> {
        let op = registry
            .get(name)
            .ok_or(LinkError::UnknownOperation { operation: name })?;
        self.check_placeholders(name, op.template, true)?;
        Ok(op)
    }

    fn resolve_collection(
        &self,
        registry: &OperationRegistry,
        name: &'static str,
    ) -> Result<Operation, LinkError> {
        let op = registry
            .get(name)
            .ok_or(LinkError::UnknownOperation { operation: name })?;
        self.check_placeholders(name, op.template, false)?;
        Ok(op)
    }

    fn check_placeholders(
        &self,
        operation: &'static str,
        template: &'static str,
        allow_id: bool,
    ) -> Result<(), LinkError> {
        for placeholder in placeholders(template) {
            let bound = (allow_id && placeholder == self.id_param)
                || self.parent_params.contains(&placeholder);
            if !bound {
                return Err(LinkError::UnboundPlaceholder {
                    operation,
                    placeholder: placeholder.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Iterates the `{param}` placeholders of a route template.
fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    template.split('{').skip(1).filter_map(|part| {
        let end = part.find('}')?;
        Some(&part[..end])
    })
}

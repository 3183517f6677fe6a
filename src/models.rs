#![deny(missing_docs)]

//! # Model Graph IR
//!
//! definition of Intermediate Representation (IR) structures for the
//! inferred model graph.
//!
//! These structs transport extracted schema information into the
//! language-adaptation and template-emission stages. The whole graph is
//! mutated only during a single extraction pass and is read-only afterwards.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::fmt;

/// Classification of an endpoint's response shape.
///
/// Used downstream to select emission templates. `Raw*` kinds are
/// pass-through payloads that are never modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseKind {
    /// No response body.
    Empty,
    /// A scalar, non-modeled payload.
    Raw,
    /// A single named model object.
    Model,
    /// A dictionary of named model objects.
    Map,
    /// A pass-through dictionary (not modeled).
    RawMap,
    /// An array of named model objects.
    Array,
    /// A pass-through array (not modeled).
    RawArray,
}

impl ResponseKind {
    /// Whether this kind names a single addressable model schema.
    ///
    /// Only these kinds are acceptable for an authenticating endpoint.
    pub fn is_named_model(self) -> bool {
        matches!(self, ResponseKind::Model | ResponseKind::Map)
    }

    /// Whether the payload of this kind is (or contains) the response
    /// model, i.e. whether returning it creates a dependency on that model.
    pub fn is_model_shaped(self) -> bool {
        matches!(
            self,
            ResponseKind::Model | ResponseKind::Map | ResponseKind::Array
        )
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseKind::Empty => "Empty",
            ResponseKind::Raw => "Raw",
            ResponseKind::Model => "Model",
            ResponseKind::Map => "Map",
            ResponseKind::RawMap => "RawMap",
            ResponseKind::Array => "Array",
            ResponseKind::RawArray => "RawArray",
        };
        write!(f, "{}", name)
    }
}

/// The inferred shape of a property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PropertyKind {
    /// A scalar value (string, number, boolean).
    Scalar,
    /// A reference to a nested model.
    Object {
        /// Normalized name of the referenced model.
        type_name: String,
    },
    /// An array whose elements reference a nested model.
    Array {
        /// Normalized name of the referenced element model.
        type_name: String,
    },
}

/// A single named property of a model.
///
/// Immutable after first write: a later merge attempt with the same name is
/// a no-op (first-write-wins; conflicts are reported, never resolved).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Property name as it appeared in the sample payload.
    pub name: String,
    /// Inferred shape.
    pub kind: PropertyKind,
    /// Target-language type literal, filled in by a language adapter.
    pub target_type: Option<String>,
}

impl Property {
    /// Creates a property with no target-language type yet.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            target_type: None,
        }
    }
}

/// Extracted information about one endpoint, attached to its owning model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointInfo {
    /// HTTP method: "GET", "POST", etc.
    pub method: String,
    /// URL path of the operation.
    pub url_path: String,
    /// Path-parameter names concatenated across the resource hierarchy in
    /// ancestor-to-descendant order. Duplicates are preserved.
    pub segment_params: Vec<String>,
    /// Query-parameter names declared on the operation.
    pub query_params: Vec<String>,
    /// Whether this operation authenticates the client.
    pub authenticates: bool,
    /// Classified response shape.
    pub response_kind: ResponseKind,
    /// Normalized name of the model owning this endpoint.
    pub resource_model: String,
    /// Normalized name of the request payload model. Coincides with
    /// `resource_model` unless overridden by a `type=` attribute.
    pub request_model: String,
    /// Normalized name of the response payload model. Coincides with
    /// `resource_model` unless overridden by a `type=` attribute.
    pub response_model: String,
}

/// The single authenticating endpoint of an extraction, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthInfo {
    /// The endpoint carrying `authenticates = true`.
    pub endpoint: EndpointInfo,
}

/// An inferred named schema: a resource or a nested structure discovered
/// inside a request/response body.
///
/// Identity is the normalized singular name. Created lazily on first
/// reference from any role (resource owner, request type, response type,
/// nested property type) and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    /// Normalized singular model name (registry key).
    pub name: String,
    /// Target-language class name, filled in by a language adapter. The
    /// registry identity in `name` is never rewritten.
    pub target_name: Option<String>,
    /// Insertion-ordered, unique-key property map.
    pub properties: IndexMap<String, Property>,
    /// Endpoints for which this model is the owning resource, in input order.
    pub endpoints: Vec<EndpointInfo>,
    /// Models this one depends on through endpoint payloads
    /// (request/response types of its endpoints). Deduplicated by identity.
    pub endpoint_dependencies: IndexSet<String>,
    /// Models this one depends on through nested properties.
    /// Deduplicated by identity. May contain `name` itself: the graph is
    /// allowed to be cyclic and self-referential.
    pub model_dependencies: IndexSet<String>,
}

impl ModelInfo {
    /// Creates an empty model with the given (already normalized) name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_name: None,
            properties: IndexMap::new(),
            endpoints: Vec::new(),
            endpoint_dependencies: IndexSet::new(),
            model_dependencies: IndexSet::new(),
        }
    }
}

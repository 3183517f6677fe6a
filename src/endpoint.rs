#![deny(missing_docs)]

//! # Endpoint Descriptors
//!
//! Input boundary of the crate: the upstream spec parser hands over an
//! ordered sequence of these descriptors, one per HTTP operation. The
//! extraction pass consumes them strictly in the order given.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One element of an endpoint's resource hierarchy.
///
/// Resources form an ancestor-to-descendant chain (`/users/{uid}/orders` is
/// `[Resource("users", ["uid"]), Resource("orders", [])]`); the innermost
/// resource owns the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name as written in the spec (may be plural).
    pub name: String,
    /// Path-parameter names declared on this resource, inherited by
    /// descendant endpoints.
    pub parameters: Vec<String>,
}

impl Resource {
    /// Creates a resource with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Creates a resource with the given parameter names.
    pub fn with_parameters(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single HTTP operation as described by the upstream parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// HTTP method: "GET", "POST", etc.
    pub method: String,
    /// URL path of the operation (e.g. "/users/{uid}/orders").
    pub url_path: String,
    /// Ordered ancestor-to-descendant resource chain; must be non-empty.
    pub resources: Vec<Resource>,
    /// Query-parameter names declared on the operation.
    pub query_params: Vec<String>,
    /// Sample request payload, if the operation consumes one.
    pub request_body: Option<JsonValue>,
    /// Sample response payload, if the operation returns one.
    pub response_body: Option<JsonValue>,
    /// Raw attribute-spec string attached to the request declaration.
    pub request_attributes: Option<String>,
    /// Raw attribute-spec string attached to the response declaration.
    pub response_attributes: Option<String>,
    /// Whether this operation authenticates the client.
    pub authenticates: bool,
}

impl Endpoint {
    /// Creates a minimal endpoint with the given method, path and resources.
    ///
    /// All bodies, attributes and flags default to absent; tests and callers
    /// fill in what they need.
    pub fn new(
        method: impl Into<String>,
        url_path: impl Into<String>,
        resources: Vec<Resource>,
    ) -> Self {
        Self {
            method: method.into(),
            url_path: url_path.into(),
            resources,
            query_params: Vec::new(),
            request_body: None,
            response_body: None,
            request_attributes: None,
            response_attributes: None,
            authenticates: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_new_defaults() {
        let e = Endpoint::new("GET", "/users", vec![Resource::new("users")]);
        assert_eq!(e.method, "GET");
        assert_eq!(e.url_path, "/users");
        assert!(e.request_body.is_none());
        assert!(e.response_body.is_none());
        assert!(!e.authenticates);
    }

    #[test]
    fn test_resource_with_parameters() {
        let r = Resource::with_parameters("users", ["uid"]);
        assert_eq!(r.name, "users");
        assert_eq!(r.parameters, vec!["uid".to_string()]);
    }
}

#![deny(missing_docs)]

//! # Extraction Pass
//!
//! Orchestrates schema inference across an ordered endpoint sequence:
//! model resolution, response classification, dependency-edge bookkeeping,
//! property merging, and auth-endpoint resolution.
//!
//! The pass is single-threaded, strictly in input order, and fail-fast: it
//! either completes fully or aborts on the first fatal error with no
//! partial result exposed. Because properties are first-write-wins, the
//! endpoint order decides which sample wins a name collision; this is
//! documented behavior, not something the pass resolves.

use crate::attributes::parse_attributes;
use crate::classify::classify;
use crate::endpoint::Endpoint;
use crate::error::{AppError, AppResult};
use crate::merge::merge;
use crate::models::{AuthInfo, EndpointInfo, ModelInfo};
use crate::registry::ModelRegistry;
use indexmap::IndexMap;
use serde::Serialize;

/// The immutable result of one extraction pass.
///
/// Safe for concurrent read-only consumption by the emission stage once
/// returned; language adapters may rewrite it in place before emission.
#[derive(Debug, Serialize)]
pub struct Extraction {
    /// Normalized model name -> inferred model, in creation order.
    pub models: IndexMap<String, ModelInfo>,
    /// The single authenticating endpoint, if one was declared.
    pub auth: Option<AuthInfo>,
}

impl Extraction {
    /// Looks up a model by raw (possibly plural) name.
    pub fn model(&self, name: &str) -> Option<&ModelInfo> {
        self.models.get(&crate::naming::singularize(name))
    }
}

/// Runs the extraction pass over `endpoints` in input order.
pub fn extract(endpoints: &[Endpoint]) -> AppResult<Extraction> {
    let mut registry = ModelRegistry::new();
    let mut auth: Option<AuthInfo> = None;

    for endpoint in endpoints {
        let info = process_endpoint(&mut registry, endpoint)?;

        if endpoint.authenticates {
            if let Some(existing) = &auth {
                return Err(AppError::MultipleAuthEndpoints {
                    first: existing.endpoint.url_path.clone(),
                    second: endpoint.url_path.clone(),
                });
            }
            if !info.response_kind.is_named_model() {
                return Err(AppError::InvalidAuthResponse {
                    endpoint: endpoint.url_path.clone(),
                    kind: info.response_kind.to_string(),
                });
            }
            auth = Some(AuthInfo { endpoint: info });
        }
    }

    Ok(Extraction {
        models: registry.into_models(),
        auth,
    })
}

/// Processes a single endpoint, mutating the registry, and returns the
/// extracted `EndpointInfo` for the auth check.
fn process_endpoint(registry: &mut ModelRegistry, endpoint: &Endpoint) -> AppResult<EndpointInfo> {
    // The innermost element of the resource hierarchy owns the endpoint.
    let main_resource = endpoint.resources.last().ok_or_else(|| {
        AppError::General(format!(
            "endpoint {} {} has an empty resource hierarchy",
            endpoint.method, endpoint.url_path
        ))
    })?;

    let request_attrs = parse_attributes(endpoint.request_attributes.as_deref());
    let response_attrs = parse_attributes(endpoint.response_attributes.as_deref());

    let resource_key = registry.get_or_create(&main_resource.name);
    let request_key = registry.get_or_create(
        request_attrs
            .type_name
            .as_deref()
            .unwrap_or(&main_resource.name),
    );
    let response_key = registry.get_or_create(
        response_attrs
            .type_name
            .as_deref()
            .unwrap_or(&main_resource.name),
    );

    let response_kind = classify(
        endpoint.response_body.as_ref(),
        response_attrs.force_map,
        response_attrs.raw,
    );

    let info = EndpointInfo {
        method: endpoint.method.clone(),
        url_path: endpoint.url_path.clone(),
        segment_params: collect_segment_params(endpoint),
        query_params: endpoint.query_params.clone(),
        authenticates: endpoint.authenticates,
        response_kind,
        resource_model: resource_key.clone(),
        request_model: request_key.clone(),
        response_model: response_key.clone(),
    };

    {
        // resource_key was just created, so the lookup cannot miss.
        let resource = registry
            .get_mut(&resource_key)
            .ok_or_else(|| AppError::General(format!("model '{}' missing", resource_key)))?;

        if endpoint.request_body.is_some() {
            resource.endpoint_dependencies.insert(request_key.clone());
        }
        if response_kind.is_model_shaped() {
            resource.endpoint_dependencies.insert(response_key.clone());
        }
        resource.endpoints.push(info.clone());
    }

    merge(registry, &request_key, endpoint.request_body.as_ref())?;
    merge(registry, &response_key, endpoint.response_body.as_ref())?;

    Ok(info)
}

/// Concatenates the declared parameters of every ancestor resource in
/// hierarchy order. Duplicate names across nested resources are preserved.
fn collect_segment_params(endpoint: &Endpoint) -> Vec<String> {
    endpoint
        .resources
        .iter()
        .flat_map(|r| r.parameters.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Resource;
    use crate::models::ResponseKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn get_user_endpoint() -> Endpoint {
        let mut e = Endpoint::new(
            "GET",
            "/users/{uid}",
            vec![Resource::with_parameters("Users", ["uid"])],
        );
        e.response_body = Some(json!({"id": 1, "name": "a"}));
        e
    }

    #[test]
    fn test_single_endpoint_builds_one_model() {
        let extraction = extract(&[get_user_endpoint()]).unwrap();
        assert_eq!(extraction.models.len(), 1);

        let user = extraction.model("User").unwrap();
        assert_eq!(user.endpoints.len(), 1);
        assert_eq!(user.endpoints[0].response_kind, ResponseKind::Model);
        assert_eq!(user.endpoints[0].segment_params, vec!["uid".to_string()]);
        assert!(user.properties.contains_key("id"));
        assert!(user.properties.contains_key("name"));
    }

    #[test]
    fn test_plural_and_singular_resources_converge() {
        let a = Endpoint::new("GET", "/User", vec![Resource::new("User")]);
        let b = Endpoint::new("GET", "/Users", vec![Resource::new("Users")]);
        let extraction = extract(&[a, b]).unwrap();

        assert_eq!(extraction.models.len(), 1);
        let user = extraction.model("User").unwrap();
        assert_eq!(user.name, "User");
        assert_eq!(user.endpoints.len(), 2);
    }

    #[test]
    fn test_segment_params_concatenated_with_duplicates() {
        let e = Endpoint::new(
            "GET",
            "/users/{id}/orders/{id}",
            vec![
                Resource::with_parameters("Users", ["id"]),
                Resource::with_parameters("Orders", ["id"]),
            ],
        );
        let extraction = extract(&[e]).unwrap();
        let order = extraction.model("Orders").unwrap();
        assert_eq!(
            order.endpoints[0].segment_params,
            vec!["id".to_string(), "id".to_string()]
        );
    }

    #[test]
    fn test_type_override_routes_merge_and_edges() {
        let mut e = Endpoint::new("POST", "/users", vec![Resource::new("Users")]);
        e.request_body = Some(json!({"login": "a", "password": "b"}));
        e.request_attributes = Some("type=Credentials".into());
        e.response_body = Some(json!({"id": 1}));

        let extraction = extract(&[e]).unwrap();
        let user = extraction.model("User").unwrap();
        assert!(user.endpoint_dependencies.contains("Credential"));
        assert!(user.endpoint_dependencies.contains("User"));
        assert!(user.properties.contains_key("id"));
        assert!(!user.properties.contains_key("login"));

        let creds = extraction.model("Credentials").unwrap();
        assert!(creds.properties.contains_key("login"));
        assert!(creds.properties.contains_key("password"));
    }

    #[test]
    fn test_raw_response_creates_no_dependency_edge() {
        let mut e = Endpoint::new("GET", "/metrics", vec![Resource::new("Metrics")]);
        e.response_body = Some(json!({"cpu": 0.5}));
        e.response_attributes = Some("raw".into());

        let extraction = extract(&[e]).unwrap();
        let metric = extraction.model("Metric").unwrap();
        assert_eq!(metric.endpoints[0].response_kind, ResponseKind::RawMap);
        assert!(metric.endpoint_dependencies.is_empty());
    }

    #[test]
    fn test_empty_resource_hierarchy_is_an_error() {
        let e = Endpoint::new("GET", "/", vec![]);
        let err = extract(&[e]).unwrap_err();
        assert!(matches!(err, AppError::General(_)));
    }

    #[test]
    fn test_auth_endpoint_recorded() {
        let mut login = Endpoint::new("POST", "/sessions", vec![Resource::new("Sessions")]);
        login.response_body = Some(json!({"token": "t"}));
        login.authenticates = true;

        let extraction = extract(&[login]).unwrap();
        let auth = extraction.auth.expect("auth info missing");
        assert_eq!(auth.endpoint.url_path, "/sessions");
        assert!(auth.endpoint.authenticates);
    }

    #[test]
    fn test_second_auth_endpoint_fails_naming_both() {
        let mut a = Endpoint::new("POST", "/sessions", vec![Resource::new("Sessions")]);
        a.response_body = Some(json!({"token": "t"}));
        a.authenticates = true;
        let mut b = Endpoint::new("POST", "/tokens", vec![Resource::new("Tokens")]);
        b.response_body = Some(json!({"token": "t"}));
        b.authenticates = true;

        let err = extract(&[a, b]).unwrap_err();
        match err {
            AppError::MultipleAuthEndpoints { first, second } => {
                assert_eq!(first, "/sessions");
                assert_eq!(second, "/tokens");
            }
            other => panic!("expected MultipleAuthEndpoints, got {:?}", other),
        }
    }

    #[test]
    fn test_auth_with_non_model_response_fails() {
        let mut e = Endpoint::new("POST", "/sessions", vec![Resource::new("Sessions")]);
        e.response_body = Some(json!(["t"]));
        e.authenticates = true;

        let err = extract(&[e]).unwrap_err();
        match err {
            AppError::InvalidAuthResponse { endpoint, kind } => {
                assert_eq!(endpoint, "/sessions");
                assert_eq!(kind, "Array");
            }
            other => panic!("expected InvalidAuthResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_order_decides_property_winner() {
        let mut a = get_user_endpoint();
        a.response_body = Some(json!({"avatar": "url"}));
        let mut b = get_user_endpoint();
        b.response_body = Some(json!({"avatar": {"small": "s"}}));

        let forward = extract(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(
            forward.model("User").unwrap().properties["avatar"].kind,
            crate::models::PropertyKind::Scalar
        );

        let backward = extract(&[b, a]).unwrap();
        assert!(matches!(
            backward.model("User").unwrap().properties["avatar"].kind,
            crate::models::PropertyKind::Object { .. }
        ));
    }
}

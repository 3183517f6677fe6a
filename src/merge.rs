#![deny(missing_docs)]

//! # Property Merging
//!
//! Recursively walks an untyped sample body, deriving properties and nested
//! anonymous models and recording them in the registry.
//!
//! Properties are first-write-wins: once a name is recorded on a model, a
//! later merge with the same name never changes it. When the later shape
//! disagrees with the recorded one a warning is emitted so the conflict is
//! visible, but it is deliberately not resolved.

use crate::error::{AppError, AppResult};
use crate::models::{Property, PropertyKind};
use crate::naming::model_name_for_property;
use crate::registry::ModelRegistry;
use serde_json::Value as JsonValue;
use tracing::warn;

/// Merges a sample body into the model registered under `model_name`.
///
/// - absent body: no-op.
/// - keyed object: derives one property per key; a null value fails with
///   `NullPropertyValue` naming the key.
/// - array: recurses using only the first element (arrays are assumed
///   homogeneous); an empty array contributes nothing.
/// - scalar: no-op.
///
/// Object- and non-empty-array-shaped values spawn a nested model named
/// after the property, add a model-dependency edge from the enclosing
/// model, and are merged recursively.
pub fn merge(registry: &mut ModelRegistry, model_name: &str, body: Option<&JsonValue>) -> AppResult<()> {
    let Some(body) = body else {
        return Ok(());
    };

    match body {
        JsonValue::Object(props) => {
            let model_key = registry.get_or_create(model_name);
            for (prop_name, prop_val) in props {
                merge_property(registry, &model_key, prop_name, prop_val)?;
            }
            Ok(())
        }
        JsonValue::Array(items) => match items.first() {
            Some(first) => merge(registry, model_name, Some(first)),
            None => Ok(()),
        },
        // A scalar body carries no schema information.
        _ => Ok(()),
    }
}

fn merge_property(
    registry: &mut ModelRegistry,
    model_key: &str,
    prop_name: &str,
    prop_val: &JsonValue,
) -> AppResult<()> {
    // The null check applies to object-keyed values only; array elements
    // are never inspected for null here.
    if prop_val.is_null() {
        return Err(AppError::NullPropertyValue(prop_name.to_string()));
    }

    let kind = derive_kind(prop_name, prop_val);
    let nested = nested_model_name(&kind, prop_val);

    // Register the nested model before borrowing the enclosing one.
    let nested_key = nested.map(|name| registry.get_or_create(&name));

    let model = registry
        .get_mut(model_key)
        .ok_or_else(|| AppError::General(format!("model '{}' missing from registry", model_key)))?;

    let existing = model.properties.get(prop_name).map(|p| p.kind.clone());
    match existing {
        Some(recorded) if recorded != kind => {
            // First-write-wins: the recorded property is kept untouched.
            warn!(
                model = model_key,
                property = prop_name,
                existing = ?recorded,
                incoming = ?kind,
                "conflicting property shapes; keeping the first-seen one"
            );
        }
        Some(_) => {}
        None => {
            model
                .properties
                .insert(prop_name.to_string(), Property::new(prop_name, kind));
        }
    }

    if let Some(nested_key) = nested_key {
        model.model_dependencies.insert(nested_key.clone());
        merge(registry, &nested_key, Some(prop_val))?;
    }

    Ok(())
}

/// Derives the property shape from a sample value's runtime shape.
fn derive_kind(prop_name: &str, prop_val: &JsonValue) -> PropertyKind {
    match prop_val {
        JsonValue::Object(_) => PropertyKind::Object {
            type_name: model_name_for_property(prop_name),
        },
        JsonValue::Array(_) => PropertyKind::Array {
            type_name: model_name_for_property(prop_name),
        },
        _ => PropertyKind::Scalar,
    }
}

/// The nested model spawned by this property, if any.
///
/// Empty arrays keep their array-shaped property but spawn no model, no
/// edge and no recursion.
fn nested_model_name(kind: &PropertyKind, prop_val: &JsonValue) -> Option<String> {
    match kind {
        PropertyKind::Object { type_name } => Some(type_name.clone()),
        PropertyKind::Array { type_name } => {
            let is_empty = prop_val.as_array().is_some_and(Vec::is_empty);
            (!is_empty).then(|| type_name.clone())
        }
        PropertyKind::Scalar => None,
    }
}

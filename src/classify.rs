#![deny(missing_docs)]

//! # Response Classification
//!
//! Pure mapping from a sample response body plus attribute flags to a
//! `ResponseKind`. The priority order below is load-bearing: absence beats
//! every flag, `map` yields to `raw`, and `raw` only changes the kind of
//! payloads that actually have a map/array shape.

use crate::models::ResponseKind;
use serde_json::Value as JsonValue;

/// Classifies a response body under the given attribute flags.
///
/// Evaluation order:
/// 1. absent body -> `Empty`
/// 2. `force_as_map && !raw` -> `Map`
/// 3. `raw` + object -> `RawMap`
/// 4. object -> `Model`
/// 5. `raw` + array -> `RawArray`
/// 6. array -> `Array`
/// 7. otherwise -> `Raw`
pub fn classify(body: Option<&JsonValue>, force_as_map: bool, raw: bool) -> ResponseKind {
    let Some(body) = body else {
        return ResponseKind::Empty;
    };

    if force_as_map && !raw {
        return ResponseKind::Map;
    }

    match body {
        JsonValue::Object(_) if raw => ResponseKind::RawMap,
        JsonValue::Object(_) => ResponseKind::Model,
        JsonValue::Array(_) if raw => ResponseKind::RawArray,
        JsonValue::Array(_) => ResponseKind::Array,
        _ => ResponseKind::Raw,
    }
}

#![deny(missing_docs)]

//! # Attribute Operations
//!
//! internal logic for parsing the compact attribute spec attached to a
//! request/response declaration: comma-separated `key[=value]` tokens,
//! whitespace-trimmed around both key and value.
//!
//! Supported keys: `type=<Name>` (override the inferred model identity),
//! `map` (force Map classification unless `raw` is present), `raw`
//! (pass-through payload). Unknown keys are ignored.

use regex::Regex;
use std::sync::OnceLock;

/// Parsed overrides extracted from a single attribute spec.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ModelAttributes {
    /// Explicit model type name, if `type=<Name>` was present.
    pub type_name: Option<String>,
    /// Whether the `map` flag was found.
    pub force_map: bool,
    /// Whether the `raw` flag was found.
    pub raw: bool,
}

/// Parses an attribute spec string. `None` or an empty string yields all
/// defaults.
pub fn parse_attributes(spec: Option<&str>) -> ModelAttributes {
    let mut attrs = ModelAttributes::default();
    let Some(spec) = spec else {
        return attrs;
    };

    static TYPE_RE: OnceLock<Regex> = OnceLock::new();
    let type_re =
        TYPE_RE.get_or_init(|| Regex::new(r"^type\s*=\s*(\S+)$").expect("Invalid regex"));

    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(caps) = type_re.captures(token) {
            if let Some(val) = caps.get(1) {
                attrs.type_name = Some(val.as_str().to_string());
            }
            continue;
        }
        match token {
            "map" => attrs.force_map = true,
            "raw" => attrs.raw = true,
            // Unknown keys are tolerated so upstream specs can carry
            // attributes aimed at other consumers.
            _ => {}
        }
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_and_absent() {
        assert_eq!(parse_attributes(None), ModelAttributes::default());
        assert_eq!(parse_attributes(Some("")), ModelAttributes::default());
        assert_eq!(parse_attributes(Some("  ,  ")), ModelAttributes::default());
    }

    #[test]
    fn test_parse_type_override() {
        let attrs = parse_attributes(Some("type=Session"));
        assert_eq!(attrs.type_name.as_deref(), Some("Session"));
        assert!(!attrs.force_map);
        assert!(!attrs.raw);
    }

    #[test]
    fn test_parse_type_with_whitespace() {
        let attrs = parse_attributes(Some("  type = Session , map "));
        assert_eq!(attrs.type_name.as_deref(), Some("Session"));
        assert!(attrs.force_map);
    }

    #[test]
    fn test_parse_flags() {
        let attrs = parse_attributes(Some("map,raw"));
        assert!(attrs.force_map);
        assert!(attrs.raw);
        assert!(attrs.type_name.is_none());
    }

    #[test]
    fn test_ignores_unknown_keys() {
        let attrs = parse_attributes(Some("frobnicate, type=User, cache=off"));
        assert_eq!(attrs.type_name.as_deref(), Some("User"));
        assert!(!attrs.force_map);
        assert!(!attrs.raw);
    }
}

#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for normalizing model identities. Model names are
//! pluralization-insensitive: `Users` and `User` must refer to the same
//! model, so every identity is reduced to its singular form before it is
//! used as a registry key.

use heck::ToUpperCamelCase;

/// Reduces an English plural to its singular form.
///
/// Case-sensitive apart from the plural suffix: `Users` -> `User`,
/// `Categories` -> `Category`. Words that are not recognizably plural are
/// returned unchanged, including `-ss` endings (`Address` stays `Address`).
pub fn singularize(name: &str) -> String {
    let lower = name.to_lowercase();

    if let Some(stem) = name.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{}y", stem);
        }
    }

    // Only sibilant stems pluralize with `-es`; a bare `ses` rule would
    // mangle vowel+`se` nouns (`Houses`, `Cases`), which the plain `-s`
    // branch below handles.
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if lower.ends_with(suffix) {
            return name[..name.len() - 2].to_string();
        }
    }

    if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") {
        return name[..name.len() - 1].to_string();
    }

    name.to_string()
}

/// Derives the model type name referenced by a property.
///
/// Property keys arrive in whatever casing the sample payload uses
/// (`address`, `shipping_address`, `lineItems`); the referenced model
/// identity is the UpperCamelCase singular (`Address`, `ShippingAddress`,
/// `LineItem`).
pub fn model_name_for_property(property_name: &str) -> String {
    singularize(&property_name.to_upper_camel_case())
}

#![deny(missing_docs)]

//! # Language Adapters
//!
//! Defines the `LanguageAdapter` trait and implementations (e.g.
//! `ObjCAdapter`) to allow rewriting the inferred model graph into a form
//! one target language's templates can consume directly.
//!
//! The adapter is a strategy selected once per run through `adapter_for`;
//! the emission stage itself (templates, file I/O) lives outside this crate.

use crate::error::{AppError, AppResult};
use crate::extract::Extraction;
use crate::models::PropertyKind;
use std::fmt;

/// A target SDK emission language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Android (Java/Kotlin).
    Android,
    /// Objective-C.
    ObjC,
    /// Swift.
    Swift,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Android => "Android",
            Language::ObjC => "ObjC",
            Language::Swift => "Swift",
        };
        write!(f, "{}", name)
    }
}

/// Configuration shared by all language adapters.
#[derive(Debug, Clone, Default)]
pub struct AdapterConfig {
    /// Prefix applied to every generated class name (e.g. an API prefix
    /// like `GH` producing `GHUser`).
    pub class_prefix: String,
}

/// A strategy trait for decoupling language-specific model adaptation.
///
/// Implementors rewrite the extracted graph in place: target class names,
/// property type literals, anything the language's templates need beyond
/// the language-neutral IR. Invoked exactly once, after extraction and
/// before emission.
pub trait LanguageAdapter {
    /// Adapts the whole extraction for this target language.
    fn adapt(&self, extraction: &mut Extraction, config: &AdapterConfig);
}

/// Returns the adapter registered for `language`, or
/// `LanguageNotSupported` naming the language when there is none.
pub fn adapter_for(language: Language) -> AppResult<Box<dyn LanguageAdapter>> {
    match language {
        Language::ObjC => Ok(Box::new(ObjCAdapter)),
        other => Err(AppError::LanguageNotSupported(other.to_string())),
    }
}

/// Adapter implementation for Objective-C.
pub struct ObjCAdapter;

impl ObjCAdapter {
    fn class_name(&self, model_name: &str, config: &AdapterConfig) -> String {
        format!("{}{}", config.class_prefix, model_name)
    }

    fn type_literal(&self, kind: &PropertyKind, config: &AdapterConfig) -> String {
        match kind {
            PropertyKind::Scalar => "id".to_string(),
            PropertyKind::Object { type_name } => {
                format!("{} *", self.class_name(type_name, config))
            }
            PropertyKind::Array { .. } => "NSArray *".to_string(),
        }
    }
}

impl LanguageAdapter for ObjCAdapter {
    fn adapt(&self, extraction: &mut Extraction, config: &AdapterConfig) {
        for model in extraction.models.values_mut() {
            model.target_name = Some(self.class_name(&model.name, config));
            for property in model.properties.values_mut() {
                property.target_type = Some(self.type_literal(&property.kind, config));
            }
        }
    }
}

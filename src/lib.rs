#![deny(missing_docs)]

//! # SDKGen Core
//!
//! Core library for inferring a named model graph from parsed API endpoint
//! descriptions, ready for template-driven SDK emission.

/// Shared error types.
pub mod error;

/// Input endpoint descriptors (upstream parser contract).
pub mod endpoint;

/// Inferred model graph IR.
pub mod models;

/// Model identity normalization helpers.
pub mod naming;

/// Attribute-spec mini-language parsing.
pub mod attributes;

/// Identity-indexed model registry.
pub mod registry;

/// Response-shape classification.
pub mod classify;

/// Recursive property merging.
pub mod merge;

/// The extraction pass.
pub mod extract;

/// Target-language adapter strategies.
pub mod adapt;

pub use adapt::{adapter_for, AdapterConfig, Language, LanguageAdapter, ObjCAdapter};
pub use attributes::{parse_attributes, ModelAttributes};
pub use classify::classify;
pub use endpoint::{Endpoint, Resource};
pub use error::{AppError, AppResult};
pub use extract::{extract, Extraction};
pub use merge::merge;
pub use models::{AuthInfo, EndpointInfo, ModelInfo, Property, PropertyKind, ResponseKind};
pub use naming::singularize;
pub use registry::ModelRegistry;

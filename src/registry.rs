#![deny(missing_docs)]

//! # Model Registry
//!
//! Identity-indexed arena of model schemas for one extraction pass.
//!
//! All `ModelInfo` creation and lookup goes through `get_or_create`, so a
//! potentially cyclic relationship graph resolves via repeated lookup
//! instead of duplicate construction or infinite recursion. The registry is
//! owned by the extraction call, never a process-wide singleton, keeping
//! multiple extractions independent and testable.

use crate::models::ModelInfo;
use crate::naming::singularize;
use indexmap::IndexMap;

/// Registry of inferred models, keyed by normalized singular name.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: IndexMap<String, ModelInfo>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `name` and returns the registry key of its model,
    /// creating an empty `ModelInfo` on first reference.
    ///
    /// This is the only way any component obtains a model: it guarantees
    /// that `User` and `Users` converge onto one entry.
    pub fn get_or_create(&mut self, name: &str) -> String {
        let key = singularize(name);
        self.models
            .entry(key.clone())
            .or_insert_with(|| ModelInfo::new(key.clone()));
        key
    }

    /// Looks up a model by raw (possibly plural) name.
    pub fn get(&self, name: &str) -> Option<&ModelInfo> {
        self.models.get(&singularize(name))
    }

    /// Mutable lookup by registry key.
    ///
    /// Callers obtain keys from `get_or_create`, so a miss indicates a bug;
    /// a plural name passed here is normalized the same way.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ModelInfo> {
        self.models.get_mut(&singularize(name))
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no model has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Consumes the registry, yielding the finished name -> model map in
    /// creation order.
    pub fn into_models(self) -> IndexMap<String, ModelInfo> {
        self.models
    }
}

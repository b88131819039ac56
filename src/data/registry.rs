// ============================================================
// Layer 4 — Provider Registry
// ============================================================
// Explicit lookup table: dataset identifier → constructor.
//
// The registry is filled once at startup. Lookup of an unknown
// identifier returns ReaderError::DatasetNotFound; nothing is
// discovered dynamically.
//
//   "IMDB" → ImdbProvider
//   "SST"  → SstProvider
//   "TREC" → TrecProvider

use std::collections::BTreeMap;

use crate::data::providers::{ImdbProvider, SstProvider, TrecProvider};
use crate::domain::error::{ReaderError, ReaderResult};
use crate::domain::traits::DatasetProvider;

/// Builds a fresh provider instance.
pub type ProviderCtor = fn() -> Box<dyn DatasetProvider>;

#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, ProviderCtor>,
}

impl ProviderRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in provider
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("IMDB", || Box::new(ImdbProvider::new()));
        registry.register("SST",  || Box::new(SstProvider::new()));
        registry.register("TREC", || Box::new(TrecProvider::new()));
        registry
    }

    /// Register `ctor` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, ctor: ProviderCtor) {
        let name = name.into();
        if self.providers.insert(name.clone(), ctor).is_some() {
            tracing::warn!("Provider '{}' registered twice; keeping the latest", name);
        }
    }

    /// Build the provider registered under `name`.
    pub fn resolve(&self, name: &str) -> ReaderResult<Box<dyn DatasetProvider>> {
        self.providers
            .get(name)
            .map(|ctor| ctor())
            .ok_or_else(|| ReaderError::DatasetNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered identifiers, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.providers.keys()).finish()
    }
}

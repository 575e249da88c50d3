//! Singleton cache
//!
//! Reads go through a lock-free `DashMap` lookup. A miss takes the
//! construction lock, re-checks the map and only then constructs, so each key
//! is constructed at most once even under concurrent first requests.
//!
//! The construction lock is reentrant: building one singleton may require
//! building another on the same thread. It is also global, so two threads can
//! never hold parts of each other's graph while waiting.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use graft_domain::{Binding, CapabilityId, Instance, Result, SingletonScope};
use parking_lot::ReentrantMutex;
use tracing::trace;

/// Key of a cached singleton
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingletonKey {
    alternative_id: String,
    implementation: Option<CapabilityId>,
}

impl SingletonKey {
    /// Key for `binding` under `scope`
    pub fn for_binding(binding: &Binding, scope: SingletonScope) -> Self {
        let implementation = match scope {
            SingletonScope::AlternativeId => None,
            SingletonScope::Implementation => Some(binding.implementation().clone()),
        };
        Self {
            alternative_id: binding.alternative_id().to_string(),
            implementation,
        }
    }

    /// Alternative id part of the key
    pub fn alternative_id(&self) -> &str {
        &self.alternative_id
    }

    /// Implementation part of the key, present under `SingletonScope::Implementation`
    pub fn implementation(&self) -> Option<&CapabilityId> {
        self.implementation.as_ref()
    }
}

/// Constructed singletons; entries are never removed or replaced
#[derive(Default)]
pub struct SingletonCache {
    entries: DashMap<SingletonKey, Instance>,
    construction: ReentrantMutex<()>,
}

impl SingletonCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached instance for `key`
    pub fn get(&self, key: &SingletonKey) -> Option<Instance> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Cached instance for `key`, constructing it on first request
    ///
    /// A failed construction caches nothing; the next request tries again.
    pub fn get_or_try_insert<F>(&self, key: SingletonKey, construct: F) -> Result<Instance>
    where
        F: FnOnce() -> Result<Instance>,
    {
        if let Some(hit) = self.get(&key) {
            trace!(alternative_id = key.alternative_id(), "Singleton cache hit");
            return Ok(hit);
        }

        let _guard = self.construction.lock();
        if let Some(hit) = self.get(&key) {
            trace!(
                alternative_id = key.alternative_id(),
                "Singleton constructed while waiting"
            );
            return Ok(hit);
        }

        let instance = construct()?;
        match self.entries.entry(key) {
            // A nested construction on this thread got there first
            Entry::Occupied(existing) => Ok(existing.get().clone()),
            Entry::Vacant(slot) => {
                slot.insert(instance.clone());
                Ok(instance)
            }
        }
    }

    /// Whether any entry carries `alternative_id`
    pub fn contains_alternative(&self, alternative_id: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.key().alternative_id == alternative_id)
    }

    /// Number of cached instances
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Per-caller favorites store.
//!
//! Each caller owns an insertion-ordered collection keyed by creature id.
//! Collections are created on first add and live as long as the store.
//!
//! Every collection has its own mutex, so one add/remove/clear is atomic for
//! that caller while other callers proceed in parallel. The outer map is only
//! write-locked to insert a new collection.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use tracing::{debug, info};

use crate::{CallerId, FavoriteEntry};

type Collection = IndexMap<u32, FavoriteEntry>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FavoritesError {
    #[error("creature {name} is already in your favorites")]
    DuplicateFavorite { id: u32, name: String },
}

#[derive(Debug, Default)]
pub struct FavoritesStore {
    collections: RwLock<HashMap<CallerId, Arc<Mutex<Collection>>>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, caller: &CallerId) -> Option<Arc<Mutex<Collection>>> {
        self.collections.read().get(caller).cloned()
    }

    fn collection_or_create(&self, caller: &CallerId) -> Arc<Mutex<Collection>> {
        if let Some(collection) = self.collection(caller) {
            return collection;
        }

        let mut collections = self.collections.write();
        collections
            .entry(caller.clone())
            .or_insert_with(|| {
                debug!(caller = %caller, "creating favorites collection");
                Arc::new(Mutex::new(Collection::new()))
            })
            .clone()
    }

    /// Entries in insertion order; empty for unknown callers.
    pub fn list(&self, caller: &CallerId) -> Vec<FavoriteEntry> {
        self.collection(caller)
            .map(|collection| collection.lock().values().cloned().collect())
            .unwrap_or_default()
    }

    /// Adds a favorite stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::DuplicateFavorite`] if `id` is already in the
    /// caller's collection; the collection is left untouched.
    pub fn add(
        &self,
        caller: &CallerId,
        id: u32,
        name: &str,
    ) -> Result<FavoriteEntry, FavoritesError> {
        let collection = self.collection_or_create(caller);
        let mut entries = collection.lock();

        if entries.contains_key(&id) {
            return Err(FavoritesError::DuplicateFavorite {
                id,
                name: name.to_owned(),
            });
        }

        let entry = FavoriteEntry::new(id, name);
        entries.insert(id, entry.clone());
        info!(caller = %caller, id, name, "favorite added");
        Ok(entry)
    }

    /// Returns whether an entry was actually deleted. Order of the remaining
    /// entries is preserved.
    pub fn remove(&self, caller: &CallerId, id: u32) -> bool {
        let Some(collection) = self.collection(caller) else {
            return false;
        };

        let removed = collection.lock().shift_remove(&id).is_some();
        if removed {
            info!(caller = %caller, id, "favorite removed");
        }
        removed
    }

    pub fn is_favorite(&self, caller: &CallerId, id: u32) -> bool {
        self.collection(caller)
            .is_some_and(|collection| collection.lock().contains_key(&id))
    }

    /// Empties the caller's collection; returns whether one existed.
    pub fn clear(&self, caller: &CallerId) -> bool {
        let Some(collection) = self.collection(caller) else {
            return false;
        };

        let mut entries = collection.lock();
        let cleared = entries.len();
        entries.clear();
        info!(caller = %caller, cleared, "favorites cleared");
        true
    }

    pub fn count(&self, caller: &CallerId) -> usize {
        self.collection(caller)
            .map_or(0, |collection| collection.lock().len())
    }
}

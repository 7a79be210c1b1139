//! Generic in-memory entity collection.
//!
//! An [`EntityStore`] keeps records in insertion order and hands out ids via
//! [`next_id`]. Entity-specific rules (required fields, cascades, derived
//! totals) live in the sibling modules that wrap a store.

use crate::core::id::next_id;
use crate::errors::{Error, Result};
use std::borrow::Cow;
use tracing::{debug, warn};

/// A record that can live in an [`EntityStore`].
pub trait Record: Clone {
    /// Three-letter id prefix, e.g. `"EVT"`
    const PREFIX: &'static str;
    /// Entity name used in errors and logs
    const ENTITY: &'static str;

    /// The record id.
    fn id(&self) -> &str;

    /// Fields the list filter searches, in no particular order.
    fn search_keys(&self) -> Vec<Cow<'_, str>>;

    /// Case-insensitive substring match of an already lower-cased needle
    /// against [`Record::search_keys`]. An empty needle matches every record.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_keys()
                .iter()
                .any(|key| key.to_lowercase().contains(needle))
    }
}

/// Ordered in-memory collection of one entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> EntityStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// The most recently appended record.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.records.last()
    }

    /// The id the next appended record will receive.
    #[must_use]
    pub fn next_id(&self) -> String {
        next_id(T::PREFIX, self.records.len())
    }

    /// Finds the first record with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Finds the first record with the given id, or fails with
    /// [`Error::NotFound`].
    pub fn require(&self, id: &str) -> Result<&T> {
        self.get(id).ok_or_else(|| Error::not_found(T::ENTITY, id))
    }

    /// Assigns the next id, builds the record with it and appends it.
    pub fn insert_with(&mut self, build: impl FnOnce(String) -> T) -> &T {
        let id = self.next_id();
        if self.get(&id).is_some() {
            warn!(entity = T::ENTITY, %id, "Generated id reuses a live record's id");
        }
        let record = build(id);
        debug!(entity = T::ENTITY, id = record.id(), "Record appended");
        let index = self.records.len();
        self.records.push(record);
        &self.records[index]
    }

    /// Applies `apply` to every record with the given id and returns the first.
    ///
    /// The closure must not change the id. Fails with [`Error::NotFound`] and
    /// leaves the store unchanged when no record matches.
    pub fn update(&mut self, id: &str, mut apply: impl FnMut(&mut T)) -> Result<&T> {
        let mut first = None;
        for (index, record) in self.records.iter_mut().enumerate() {
            if record.id() == id {
                apply(record);
                if first.is_none() {
                    first = Some(index);
                }
            }
        }
        match first {
            Some(index) => {
                debug!(entity = T::ENTITY, %id, "Record updated");
                Ok(&self.records[index])
            }
            None => Err(Error::not_found(T::ENTITY, id)),
        }
    }

    /// Removes every record with the given id and returns them.
    ///
    /// Fails with [`Error::NotFound`] when no record matches.
    pub fn remove(&mut self, id: &str) -> Result<Vec<T>> {
        let removed = self.remove_where(|record| record.id() == id);
        if removed.is_empty() {
            return Err(Error::not_found(T::ENTITY, id));
        }
        debug!(entity = T::ENTITY, %id, "Record removed");
        Ok(removed)
    }

    /// Removes every record matching `predicate`, keeping the order of the
    /// rest, and returns the removed records in their original order.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| predicate(record));
        self.records = kept;
        removed
    }

    /// Lazily filters records whose searchable fields contain `query`,
    /// ignoring case. The returned iterator can be cloned to restart it.
    pub fn list<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = &'a T> + Clone + use<'a, T> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(move |record| record.matches(&needle))
    }
}

//! In-memory storage
//!
//! Seven independent collections, each a map from numeric id to record
//! with a per-collection counter for id assignment. Collections live for
//! the process lifetime; there is no durable backend. Writes serialize
//! behind one lock per collection.

pub mod repositories;
pub mod seed;

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use self::repositories::{
    EventRepository, FamilyStoryRepository, GalleryImageRepository, MemoryEventRepository,
    MemoryFamilyStoryRepository, MemoryGalleryImageRepository, MemoryNewsletterRepository,
    MemoryParticipationRepository, MemoryTestimonialRepository, MemoryTributeRepository,
    NewsletterRepository, ParticipationRepository, TestimonialRepository, TributeRepository,
};

/// Domain-constraint errors raised by the store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Newsletter emails are unique across the collection
    #[error("Email already subscribed")]
    DuplicateEmail,
}

/// The seven collections behind one explicitly constructed owner,
/// injected into the HTTP layer
#[derive(Clone)]
pub struct Store {
    pub events: Arc<dyn EventRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
    pub tributes: Arc<dyn TributeRepository>,
    pub families: Arc<dyn FamilyStoryRepository>,
    pub gallery: Arc<dyn GalleryImageRepository>,
    pub participations: Arc<dyn ParticipationRepository>,
    pub newsletter: Arc<dyn NewsletterRepository>,
}

impl Store {
    /// Fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self {
            events: Arc::new(MemoryEventRepository::new()),
            testimonials: Arc::new(MemoryTestimonialRepository::new()),
            tributes: Arc::new(MemoryTributeRepository::new()),
            families: Arc::new(MemoryFamilyStoryRepository::new()),
            gallery: Arc::new(MemoryGalleryImageRepository::new()),
            participations: Arc::new(MemoryParticipationRepository::new()),
            newsletter: Arc::new(MemoryNewsletterRepository::new()),
        }
    }
}

/// An id-keyed collection with its id counter
///
/// Ids start at 1 and are assigned as "current counter, then increment";
/// an id is never reused even if its record were removed. BTreeMap keeps
/// iteration in id order, so repeated reads observe a stable order.
#[derive(Debug)]
pub(crate) struct Collection<T> {
    records: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Collection<T> {
    pub(crate) fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, build the record with it and store it
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    pub(crate) fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.records.get_mut(&id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// Records matching `keep`, in id order
    pub(crate) fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.iter().filter(|r| keep(r)).cloned().collect()
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Missing or empty optional input is stored as an explicit `None`
pub(crate) fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

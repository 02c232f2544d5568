//! Timeline event repository

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{CreateEventInput, Event};
use crate::store::{none_if_empty, Collection};

/// Timeline event repository trait
///
/// Events carry no moderation flag; everything inserted is public.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events
    async fn get_all(&self) -> Result<Vec<Event>>;

    /// Events from one year
    async fn get_by_year(&self, year: i32) -> Result<Vec<Event>>;

    /// Events of one category
    async fn get_by_type(&self, event_type: &str) -> Result<Vec<Event>>;

    /// Events matching both year and category
    async fn get_by_year_and_type(&self, year: i32, event_type: &str) -> Result<Vec<Event>>;

    /// Insert a new event, assigning the next id
    async fn insert(&self, input: CreateEventInput) -> Result<Event>;
}

/// Memory-backed event repository
pub struct MemoryEventRepository {
    events: RwLock<Collection<Event>>,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn get_all(&self) -> Result<Vec<Event>> {
        Ok(self.events.read().await.all())
    }

    async fn get_by_year(&self, year: i32) -> Result<Vec<Event>> {
        Ok(self.events.read().await.filtered(|e| e.year == year))
    }

    async fn get_by_type(&self, event_type: &str) -> Result<Vec<Event>> {
        Ok(self
            .events
            .read()
            .await
            .filtered(|e| e.event_type == event_type))
    }

    async fn get_by_year_and_type(&self, year: i32, event_type: &str) -> Result<Vec<Event>> {
        Ok(self
            .events
            .read()
            .await
            .filtered(|e| e.year == year && e.event_type == event_type))
    }

    async fn insert(&self, input: CreateEventInput) -> Result<Event> {
        let mut events = self.events.write().await;
        let event = events.insert_with(|id| Event {
            id,
            title: input.title,
            date: input.date,
            year: input.year,
            event_type: input.event_type,
            description: none_if_empty(input.description),
            image_url: none_if_empty(input.image_url),
        });
        Ok(event)
    }
}

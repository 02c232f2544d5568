//! Family story repository

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{CreateFamilyStoryInput, FamilyStory};
use crate::store::{none_if_empty, Collection};

/// Family story repository trait
#[async_trait]
pub trait FamilyStoryRepository: Send + Sync {
    /// All stories, restricted to approved ones for public reads
    async fn get_all(&self, approved_only: bool) -> Result<Vec<FamilyStory>>;

    /// Stories from one year, approval-composed
    async fn get_by_year(&self, year: i32, approved_only: bool) -> Result<Vec<FamilyStory>>;

    /// Stories with one type label, approval-composed
    async fn get_by_type(&self, story_type: &str, approved_only: bool)
        -> Result<Vec<FamilyStory>>;

    /// Stories matching both year and type, approval-composed
    async fn get_by_year_and_type(
        &self,
        year: i32,
        story_type: &str,
        approved_only: bool,
    ) -> Result<Vec<FamilyStory>>;

    /// Insert a new story awaiting moderation
    async fn insert(&self, input: CreateFamilyStoryInput) -> Result<FamilyStory>;

    /// Insert with an explicit approval status (seeding only)
    async fn insert_with_status(
        &self,
        input: CreateFamilyStoryInput,
        approved: bool,
    ) -> Result<FamilyStory>;

    /// Flip the moderation flag; false when the id is unknown
    async fn set_approved(&self, id: i64, approved: bool) -> Result<bool>;
}

/// Memory-backed family story repository
pub struct MemoryFamilyStoryRepository {
    families: RwLock<Collection<FamilyStory>>,
}

impl MemoryFamilyStoryRepository {
    pub fn new() -> Self {
        Self {
            families: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryFamilyStoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FamilyStoryRepository for MemoryFamilyStoryRepository {
    async fn get_all(&self, approved_only: bool) -> Result<Vec<FamilyStory>> {
        Ok(self
            .families
            .read()
            .await
            .filtered(|f| !approved_only || f.approved))
    }

    async fn get_by_year(&self, year: i32, approved_only: bool) -> Result<Vec<FamilyStory>> {
        Ok(self
            .families
            .read()
            .await
            .filtered(|f| f.year == Some(year) && (!approved_only || f.approved)))
    }

    async fn get_by_type(
        &self,
        story_type: &str,
        approved_only: bool,
    ) -> Result<Vec<FamilyStory>> {
        Ok(self
            .families
            .read()
            .await
            .filtered(|f| f.story_type == story_type && (!approved_only || f.approved)))
    }

    async fn get_by_year_and_type(
        &self,
        year: i32,
        story_type: &str,
        approved_only: bool,
    ) -> Result<Vec<FamilyStory>> {
        Ok(self.families.read().await.filtered(|f| {
            f.year == Some(year) && f.story_type == story_type && (!approved_only || f.approved)
        }))
    }

    async fn insert(&self, input: CreateFamilyStoryInput) -> Result<FamilyStory> {
        self.insert_with_status(input, false).await
    }

    async fn insert_with_status(
        &self,
        input: CreateFamilyStoryInput,
        approved: bool,
    ) -> Result<FamilyStory> {
        let now = Utc::now();
        let mut families = self.families.write().await;
        let story = families.insert_with(|id| FamilyStory {
            id,
            title: input.title,
            story_type: input.story_type,
            description: input.description,
            year: input.year,
            event_name: none_if_empty(input.event_name),
            image_url: none_if_empty(input.image_url),
            approved,
            created_at: now,
        });
        Ok(story)
    }

    async fn set_approved(&self, id: i64, approved: bool) -> Result<bool> {
        let mut families = self.families.write().await;
        match families.get_mut(id) {
            Some(story) => {
                story.approved = approved;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

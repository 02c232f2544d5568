//! Gallery image repository

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{CreateGalleryImageInput, GalleryImage};
use crate::store::{none_if_empty, Collection};

/// Gallery image repository trait
#[async_trait]
pub trait GalleryImageRepository: Send + Sync {
    /// All images, restricted to approved ones for public reads
    async fn get_all(&self, approved_only: bool) -> Result<Vec<GalleryImage>>;

    /// Images from one year, approval-composed
    async fn get_by_year(&self, year: i32, approved_only: bool) -> Result<Vec<GalleryImage>>;

    /// Images of one event category, approval-composed
    async fn get_by_type(
        &self,
        event_type: &str,
        approved_only: bool,
    ) -> Result<Vec<GalleryImage>>;

    /// Images matching both year and category, approval-composed
    async fn get_by_year_and_type(
        &self,
        year: i32,
        event_type: &str,
        approved_only: bool,
    ) -> Result<Vec<GalleryImage>>;

    /// Insert a new image awaiting moderation
    async fn insert(&self, input: CreateGalleryImageInput) -> Result<GalleryImage>;

    /// Insert with an explicit approval status (seeding only)
    async fn insert_with_status(
        &self,
        input: CreateGalleryImageInput,
        approved: bool,
    ) -> Result<GalleryImage>;

    /// Flip the moderation flag; false when the id is unknown
    async fn set_approved(&self, id: i64, approved: bool) -> Result<bool>;
}

/// Memory-backed gallery image repository
pub struct MemoryGalleryImageRepository {
    images: RwLock<Collection<GalleryImage>>,
}

impl MemoryGalleryImageRepository {
    pub fn new() -> Self {
        Self {
            images: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryGalleryImageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GalleryImageRepository for MemoryGalleryImageRepository {
    async fn get_all(&self, approved_only: bool) -> Result<Vec<GalleryImage>> {
        Ok(self
            .images
            .read()
            .await
            .filtered(|i| !approved_only || i.approved))
    }

    async fn get_by_year(&self, year: i32, approved_only: bool) -> Result<Vec<GalleryImage>> {
        Ok(self
            .images
            .read()
            .await
            .filtered(|i| i.year == year && (!approved_only || i.approved)))
    }

    async fn get_by_type(
        &self,
        event_type: &str,
        approved_only: bool,
    ) -> Result<Vec<GalleryImage>> {
        Ok(self
            .images
            .read()
            .await
            .filtered(|i| i.event_type == event_type && (!approved_only || i.approved)))
    }

    async fn get_by_year_and_type(
        &self,
        year: i32,
        event_type: &str,
        approved_only: bool,
    ) -> Result<Vec<GalleryImage>> {
        Ok(self.images.read().await.filtered(|i| {
            i.year == year && i.event_type == event_type && (!approved_only || i.approved)
        }))
    }

    async fn insert(&self, input: CreateGalleryImageInput) -> Result<GalleryImage> {
        self.insert_with_status(input, false).await
    }

    async fn insert_with_status(
        &self,
        input: CreateGalleryImageInput,
        approved: bool,
    ) -> Result<GalleryImage> {
        let now = Utc::now();
        let mut images = self.images.write().await;
        let image = images.insert_with(|id| GalleryImage {
            id,
            image_url: input.image_url,
            title: none_if_empty(input.title),
            description: none_if_empty(input.description),
            year: input.year,
            event_type: input.event_type,
            approved,
            created_at: now,
        });
        Ok(image)
    }

    async fn set_approved(&self, id: i64, approved: bool) -> Result<bool> {
        let mut images = self.images.write().await;
        match images.get_mut(id) {
            Some(image) => {
                image.approved = approved;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(year: i32, event_type: &str) -> CreateGalleryImageInput {
        CreateGalleryImageInput {
            image_url: format!("https://fotos.example/{event_type}-{year}.jpg"),
            title: Some(format!("FK {event_type} {year}")),
            description: None,
            year,
            event_type: event_type.to_string(),
        }
    }

    #[tokio::test]
    async fn filters_compose_with_the_approval_gate() {
        let repo = MemoryGalleryImageRepository::new();
        let approved = repo
            .insert_with_status(image(2016, "Lounge"), true)
            .await
            .unwrap();
        // Same year and category, but still in the moderation queue
        repo.insert(image(2016, "Lounge")).await.unwrap();
        repo.insert_with_status(image(2017, "Lounge"), true)
            .await
            .unwrap();

        let matches = repo.get_by_year_and_type(2016, "Lounge", true).await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, approved.id);

        // Without the gate the queued image shows up as well
        let unmoderated = repo
            .get_by_year_and_type(2016, "Lounge", false)
            .await
            .unwrap();
        assert_eq!(unmoderated.len(), 2);
    }
}

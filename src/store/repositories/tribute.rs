//! Tribute repository

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{CreateTributeInput, Tribute};
use crate::store::{none_if_empty, Collection};

/// Tribute repository trait
#[async_trait]
pub trait TributeRepository: Send + Sync {
    /// All tributes, restricted to approved ones for public reads
    async fn get_all(&self, approved_only: bool) -> Result<Vec<Tribute>>;

    /// Insert a new tribute awaiting moderation
    async fn insert(&self, input: CreateTributeInput) -> Result<Tribute>;

    /// Insert with an explicit approval status (seeding only)
    async fn insert_with_status(&self, input: CreateTributeInput, approved: bool)
        -> Result<Tribute>;

    /// Flip the moderation flag; false when the id is unknown
    async fn set_approved(&self, id: i64, approved: bool) -> Result<bool>;
}

/// Memory-backed tribute repository
pub struct MemoryTributeRepository {
    tributes: RwLock<Collection<Tribute>>,
}

impl MemoryTributeRepository {
    pub fn new() -> Self {
        Self {
            tributes: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryTributeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TributeRepository for MemoryTributeRepository {
    async fn get_all(&self, approved_only: bool) -> Result<Vec<Tribute>> {
        Ok(self
            .tributes
            .read()
            .await
            .filtered(|t| !approved_only || t.approved))
    }

    async fn insert(&self, input: CreateTributeInput) -> Result<Tribute> {
        self.insert_with_status(input, false).await
    }

    async fn insert_with_status(
        &self,
        input: CreateTributeInput,
        approved: bool,
    ) -> Result<Tribute> {
        let now = Utc::now();
        let mut tributes = self.tributes.write().await;
        let tribute = tributes.insert_with(|id| Tribute {
            id,
            name: input.name,
            year_start: input.year_start,
            year_end: input.year_end,
            content: input.content,
            image_url: none_if_empty(input.image_url),
            approved,
            created_at: now,
        });
        Ok(tribute)
    }

    async fn set_approved(&self, id: i64, approved: bool) -> Result<bool> {
        let mut tributes = self.tributes.write().await;
        match tributes.get_mut(id) {
            Some(tribute) => {
                tribute.approved = approved;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn moderation_gate_and_id_assignment() {
        let repo = MemoryTributeRepository::new();
        let first = repo
            .insert(CreateTributeInput {
                name: "Carlos S.".to_string(),
                year_start: Some(2016),
                year_end: Some(2022),
                content: "Seu sorriso iluminava todas as festas.".to_string(),
                image_url: None,
            })
            .await
            .unwrap();
        let second = repo
            .insert_with_status(
                CreateTributeInput {
                    name: "Júlia M.".to_string(),
                    year_start: Some(2015),
                    year_end: Some(2020),
                    content: "Organizadora das primeiras edições.".to_string(),
                    image_url: Some(String::new()),
                },
                true,
            )
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.image_url, None);

        let public = repo.get_all(true).await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].name, "Júlia M.");
    }
}

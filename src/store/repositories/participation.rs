//! Participation request repository

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{CreateParticipationInput, ParticipationRequest};
use crate::store::{none_if_empty, Collection};

/// Participation request repository trait
///
/// Requests are write-only from the public surface; reads exist for the
/// moderation collaborator working through the queue.
#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    /// All requests, in submission order
    async fn get_all(&self) -> Result<Vec<ParticipationRequest>>;

    /// Insert a new request with `processed = false`
    async fn insert(&self, input: CreateParticipationInput) -> Result<ParticipationRequest>;

    /// Mark a request handled; false when the id is unknown
    async fn mark_processed(&self, id: i64) -> Result<bool>;
}

/// Memory-backed participation request repository
pub struct MemoryParticipationRepository {
    requests: RwLock<Collection<ParticipationRequest>>,
}

impl MemoryParticipationRepository {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryParticipationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParticipationRepository for MemoryParticipationRepository {
    async fn get_all(&self) -> Result<Vec<ParticipationRequest>> {
        Ok(self.requests.read().await.all())
    }

    async fn insert(&self, input: CreateParticipationInput) -> Result<ParticipationRequest> {
        let now = Utc::now();
        let mut requests = self.requests.write().await;
        let request = requests.insert_with(|id| ParticipationRequest {
            id,
            name: input.name,
            email: input.email,
            request_type: input.request_type,
            message: none_if_empty(input.message),
            processed: false,
            created_at: now,
        });
        Ok(request)
    }

    async fn mark_processed(&self, id: i64) -> Result<bool> {
        let mut requests = self.requests.write().await;
        match requests.get_mut(id) {
            Some(request) => {
                request.processed = true;
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
    async fn inserts_start_unprocessed_and_can_be_marked() {
        let repo = MemoryParticipationRepository::new();
        let created = repo
            .insert(CreateParticipationInput {
                name: "João".to_string(),
                email: "joao@example.com".to_string(),
                request_type: "Fotos".to_string(),
                message: Some(String::new()),
            })
            .await
            .unwrap();

        assert!(!created.processed);
        assert_eq!(created.message, None);

        assert!(repo.mark_processed(created.id).await.unwrap());
        assert!(!repo.mark_processed(99).await.unwrap());

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].processed);
    }
}

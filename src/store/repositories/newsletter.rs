//! Newsletter subscription repository

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{CreateNewsletterInput, NewsletterSubscription};
use crate::store::{Collection, StoreError};

/// Newsletter subscription repository trait
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// All subscriptions, in subscription order
    async fn get_all(&self) -> Result<Vec<NewsletterSubscription>>;

    /// Insert a subscription
    ///
    /// Fails with [`StoreError::DuplicateEmail`] when the email is
    /// already subscribed; nothing is stored in that case.
    async fn insert(&self, input: CreateNewsletterInput) -> Result<NewsletterSubscription>;
}

/// Memory-backed newsletter subscription repository
pub struct MemoryNewsletterRepository {
    subscriptions: RwLock<Collection<NewsletterSubscription>>,
}

impl MemoryNewsletterRepository {
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryNewsletterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsletterRepository for MemoryNewsletterRepository {
    async fn get_all(&self) -> Result<Vec<NewsletterSubscription>> {
        Ok(self.subscriptions.read().await.all())
    }

    async fn insert(&self, input: CreateNewsletterInput) -> Result<NewsletterSubscription> {
        let now = Utc::now();
        let mut subscriptions = self.subscriptions.write().await;

        if subscriptions.iter().any(|s| s.email == input.email) {
            return Err(StoreError::DuplicateEmail.into());
        }

        let subscription = subscriptions.insert_with(|id| NewsletterSubscription {
            id,
            email: input.email,
            created_at: now,
        });
        Ok(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_inserting() {
        let repo = MemoryNewsletterRepository::new();
        let input = CreateNewsletterInput {
            email: "a@b.com".to_string(),
        };

        let first = repo.insert(input.clone()).await.unwrap();
        assert_eq!(first.id, 1);

        let err = repo.insert(input).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<StoreError>(),
            Some(&StoreError::DuplicateEmail)
        );

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].email, "a@b.com");
    }

    #[tokio::test]
    async fn ids_keep_increasing_after_a_rejected_insert() {
        let repo = MemoryNewsletterRepository::new();
        repo.insert(CreateNewsletterInput {
            email: "a@b.com".to_string(),
        })
        .await
        .unwrap();
        repo.insert(CreateNewsletterInput {
            email: "a@b.com".to_string(),
        })
        .await
        .unwrap_err();

        let second = repo
            .insert(CreateNewsletterInput {
                email: "c@d.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(second.id, 2);
    }
}

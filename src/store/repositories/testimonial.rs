//! Testimonial repository

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{CreateTestimonialInput, Testimonial};
use crate::store::{none_if_empty, Collection};

/// Testimonial repository trait
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// All testimonials; with `approved_only` set, only those cleared by
    /// moderation (the default for every public-facing read)
    async fn get_all(&self, approved_only: bool) -> Result<Vec<Testimonial>>;

    /// Testimonials mentioning one year, approval-composed
    async fn get_by_year(&self, year: i32, approved_only: bool) -> Result<Vec<Testimonial>>;

    /// Insert a new testimonial awaiting moderation
    async fn insert(&self, input: CreateTestimonialInput) -> Result<Testimonial>;

    /// Insert with an explicit approval status (seeding and moderation
    /// tooling only; never reachable from the public surface)
    async fn insert_with_status(
        &self,
        input: CreateTestimonialInput,
        approved: bool,
    ) -> Result<Testimonial>;

    /// Flip the moderation flag; false when the id is unknown
    async fn set_approved(&self, id: i64, approved: bool) -> Result<bool>;
}

/// Memory-backed testimonial repository
pub struct MemoryTestimonialRepository {
    testimonials: RwLock<Collection<Testimonial>>,
}

impl MemoryTestimonialRepository {
    pub fn new() -> Self {
        Self {
            testimonials: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryTestimonialRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TestimonialRepository for MemoryTestimonialRepository {
    async fn get_all(&self, approved_only: bool) -> Result<Vec<Testimonial>> {
        Ok(self
            .testimonials
            .read()
            .await
            .filtered(|t| !approved_only || t.approved))
    }

    async fn get_by_year(&self, year: i32, approved_only: bool) -> Result<Vec<Testimonial>> {
        Ok(self
            .testimonials
            .read()
            .await
            .filtered(|t| t.year == Some(year) && (!approved_only || t.approved)))
    }

    async fn insert(&self, input: CreateTestimonialInput) -> Result<Testimonial> {
        self.insert_with_status(input, false).await
    }

    async fn insert_with_status(
        &self,
        input: CreateTestimonialInput,
        approved: bool,
    ) -> Result<Testimonial> {
        let now = Utc::now();
        let mut testimonials = self.testimonials.write().await;
        let testimonial = testimonials.insert_with(|id| Testimonial {
            id,
            name: none_if_empty(input.name),
            content: input.content,
            year: input.year,
            member_since: input.member_since,
            image_url: none_if_empty(input.image_url),
            approved,
            created_at: now,
        });
        Ok(testimonial)
    }

    async fn set_approved(&self, id: i64, approved: bool) -> Result<bool> {
        let mut testimonials = self.testimonials.write().await;
        match testimonials.get_mut(id) {
            Some(testimonial) => {
                testimonial.approved = approved;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(content: &str) -> CreateTestimonialInput {
        CreateTestimonialInput {
            name: Some("Mariana S.".to_string()),
            content: content.to_string(),
            year: Some(2018),
            member_since: Some(2016),
            image_url: Some(String::new()),
        }
    }

    #[tokio::test]
    async fn submissions_are_hidden_until_approved() {
        let repo = MemoryTestimonialRepository::new();
        let created = repo.insert(input("A FK foi onde encontrei coragem.")).await.unwrap();

        assert!(!created.approved);
        assert!(repo.get_all(true).await.unwrap().is_empty());
        assert_eq!(repo.get_all(false).await.unwrap().len(), 1);

        assert!(repo.set_approved(created.id, true).await.unwrap());
        let visible = repo.get_all(true).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, created.id);
    }

    #[tokio::test]
    async fn set_approved_on_unknown_id_reports_false() {
        let repo = MemoryTestimonialRepository::new();
        assert!(!repo.set_approved(42, true).await.unwrap());
    }

    #[tokio::test]
    async fn empty_optional_strings_are_stored_as_null() {
        let repo = MemoryTestimonialRepository::new();
        let created = repo
            .insert(CreateTestimonialInput {
                name: None,
                image_url: Some("   ".to_string()),
                ..input("Dez caracteres certinhos aqui.")
            })
            .await
            .unwrap();

        assert_eq!(created.name, None);
        assert_eq!(created.image_url, None);
    }

    #[tokio::test]
    async fn year_filter_composes_with_approval() {
        let repo = MemoryTestimonialRepository::new();
        let seen_2018 = repo.insert(input("Primeiro evento, ano de 2018.")).await.unwrap();
        repo.insert(CreateTestimonialInput {
            year: Some(2019),
            ..input("Outro ano, outra história.")
        })
        .await
        .unwrap();

        assert!(repo.get_by_year(2018, true).await.unwrap().is_empty());
        repo.set_approved(seen_2018.id, true).await.unwrap();

        let approved_2018 = repo.get_by_year(2018, true).await.unwrap();
        assert_eq!(approved_2018.len(), 1);
        assert_eq!(approved_2018[0].id, seen_2018.id);
        assert!(repo.get_by_year(2019, true).await.unwrap().is_empty());
    }
}

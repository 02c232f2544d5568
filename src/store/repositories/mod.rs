//! In-memory repositories
//!
//! One trait per collection with a memory-backed implementation. The
//! traits are the seam a future database backend would fill; handlers
//! only ever see `Arc<dyn ...Repository>`.

mod event;
mod family;
mod gallery;
mod newsletter;
mod participation;
mod testimonial;
mod tribute;

pub use event::{EventRepository, MemoryEventRepository};
pub use family::{FamilyStoryRepository, MemoryFamilyStoryRepository};
pub use gallery::{GalleryImageRepository, MemoryGalleryImageRepository};
pub use newsletter::{MemoryNewsletterRepository, NewsletterRepository};
pub use participation::{MemoryParticipationRepository, ParticipationRepository};
pub use testimonial::{MemoryTestimonialRepository, TestimonialRepository};
pub use tribute::{MemoryTributeRepository, TributeRepository};

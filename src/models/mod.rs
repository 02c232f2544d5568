//! Data models
//!
//! Entities for the seven collections and their insert inputs. Records
//! serialize with camelCase keys, the wire format the browser client
//! consumes. Optional attributes are explicit nullable fields that
//! serialize as JSON null, never as absent keys.

mod event;
mod family;
mod gallery;
mod newsletter;
mod participation;
mod testimonial;
mod tribute;

pub use event::{CreateEventInput, Event, EVENT_CATEGORIES};
pub use family::{CreateFamilyStoryInput, FamilyStory};
pub use gallery::{CreateGalleryImageInput, GalleryImage};
pub use newsletter::{CreateNewsletterInput, NewsletterSubscription};
pub use participation::{CreateParticipationInput, ParticipationRequest};
pub use testimonial::{CreateTestimonialInput, Testimonial};
pub use tribute::{CreateTributeInput, Tribute};

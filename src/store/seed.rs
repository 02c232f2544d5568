//! Startup seeding
//!
//! Populates a fresh store with the fixed historical timeline and a
//! handful of sample moderated records forced to approved, so the public
//! pages are not empty on first boot. Runs exactly once, before the
//! listener starts accepting requests.

use anyhow::Result;

use crate::models::{
    CreateEventInput, CreateFamilyStoryInput, CreateGalleryImageInput, CreateTestimonialInput,
    CreateTributeInput,
};
use crate::store::Store;

/// The fixed historical timeline dataset
fn initial_events() -> Vec<CreateEventInput> {
    let event = |title: &str, date: &str, year: i32, event_type: &str| CreateEventInput {
        title: title.to_string(),
        date: date.to_string(),
        year,
        event_type: event_type.to_string(),
        description: None,
        image_url: None,
    };

    vec![
        event("Free Kisses | 2ª Edição", "10/07/2015", 2015, "Festa"),
        event(
            "Free Kisses | Edição Especial: Aniversário da Ju",
            "12/09/2015",
            2015,
            "Festa",
        ),
        event("Free Kisses | Edição Fantasia", "07/11/2015", 2015, "Festa"),
        event(
            "Free Kisses 80's & 90's | Beija Eu, Beija Eu, Beija eu, Me Beija",
            "05/12/2015",
            2015,
            "Festa",
        ),
        event("Free Kisses | Correio do Amor", "16/01/2016", 2016, "Festa"),
        event("Free Kisses | Folia", "12/02/2016", 2016, "Festa"),
        event("Free Kisses | 8ª Edição", "11/03/2016", 2016, "Festa"),
        event(
            "Relações Não Monogâmicas - Quebrando o Tabu da Exclusividade Sexual e Afetiva",
            "30/03/2016",
            2016,
            "Social Teórica",
        ),
        event(
            "Free Kisses Social Club | Conversa e Videokê",
            "28/04/2016",
            2016,
            "Social Teórica",
        ),
        event("Free Kisses | Divas", "14/05/2016", 2016, "Festa"),
    ]
}

/// Seed the store with the timeline and sample approved content
pub async fn populate(store: &Store) -> Result<()> {
    for event in initial_events() {
        store.events.insert(event).await?;
    }

    store
        .testimonials
        .insert_with_status(
            CreateTestimonialInput {
                name: Some("Mariana S.".to_string()),
                content: "A FK foi onde encontrei coragem para ser quem eu realmente sou. \
                          Em 2018, no meu primeiro evento, percebi que existia um lugar onde \
                          a liberdade e o respeito podiam coexistir."
                    .to_string(),
                year: Some(2018),
                member_since: Some(2016),
                image_url: None,
            },
            true,
        )
        .await?;
    store
        .testimonials
        .insert_with_status(
            CreateTestimonialInput {
                name: Some("Rafael T.".to_string()),
                content: "Conheci meu atual marido na FK de 2017! Conversamos a noite toda \
                          numa Social Teórica, trocamos contato e nunca mais nos separamos."
                    .to_string(),
                year: Some(2017),
                member_since: Some(2015),
                image_url: None,
            },
            true,
        )
        .await?;

    store
        .tributes
        .insert_with_status(
            CreateTributeInput {
                name: "Carlos S.".to_string(),
                year_start: Some(2016),
                year_end: Some(2022),
                content: "Seu sorriso iluminava todas as festas. Sua generosidade e espírito \
                          livre inspiraram muitos de nós. Continuamos dançando por você."
                    .to_string(),
                image_url: None,
            },
            true,
        )
        .await?;
    store
        .tributes
        .insert_with_status(
            CreateTributeInput {
                name: "Júlia M.".to_string(),
                year_start: Some(2015),
                year_end: Some(2020),
                content: "Organizadora das primeiras edições, sua criatividade e dedicação \
                          ajudaram a construir tudo o que a FK representa hoje."
                    .to_string(),
                image_url: None,
            },
            true,
        )
        .await?;

    store
        .families
        .insert_with_status(
            CreateFamilyStoryInput {
                title: "Ana & Pedro".to_string(),
                story_type: "Casal".to_string(),
                description: "Nos conhecemos na pista de dança da FK Anos 80, em 2016. \
                              Hoje estamos casados e esperando nosso primeiro filho."
                    .to_string(),
                year: Some(2016),
                event_name: Some("FK Anos 80".to_string()),
                image_url: None,
            },
            true,
        )
        .await?;
    store
        .families
        .insert_with_status(
            CreateFamilyStoryInput {
                title: "Grupo Conexão".to_string(),
                story_type: "Amizade".to_string(),
                description: "Éramos desconhecidos que se encontraram numa Social Teórica \
                              sobre comunicação não-violenta. Hoje somos família."
                    .to_string(),
                year: Some(2018),
                event_name: Some("FK Social Club".to_string()),
                image_url: None,
            },
            true,
        )
        .await?;

    // One sample image per year from 2015 through 2022, cycling categories
    let gallery_types = ["Festa", "Social Teórica", "Lounge", "Festa Junina"];
    for i in 1..=8 {
        let year = 2014 + i;
        let event_type = gallery_types[(i as usize) % 4];
        store
            .gallery
            .insert_with_status(
                CreateGalleryImageInput {
                    image_url: String::new(),
                    title: Some(format!("FK {event_type} {year}")),
                    description: Some(format!("Evento de {year}")),
                    year,
                    event_type: event_type.to_string(),
                },
                true,
            )
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_content_is_immediately_visible() {
        let store = Store::in_memory();
        populate(&store).await.unwrap();

        assert_eq!(store.events.get_all().await.unwrap().len(), 10);
        assert_eq!(store.events.get_by_year(2015).await.unwrap().len(), 4);
        assert_eq!(store.events.get_by_year(2016).await.unwrap().len(), 6);

        // Samples are pre-approved, so the public read sees them
        assert_eq!(store.testimonials.get_all(true).await.unwrap().len(), 2);
        assert_eq!(store.tributes.get_all(true).await.unwrap().len(), 2);
        assert_eq!(store.families.get_all(true).await.unwrap().len(), 2);
        assert_eq!(store.gallery.get_all(true).await.unwrap().len(), 8);

        // Nothing waits in the moderation queue after seeding
        assert_eq!(store.testimonials.get_all(false).await.unwrap().len(), 2);
        assert_eq!(store.gallery.get_all(false).await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn gallery_seed_covers_2015_through_2022() {
        let store = Store::in_memory();
        populate(&store).await.unwrap();

        for year in 2015..=2022 {
            assert_eq!(
                store.gallery.get_by_year(year, true).await.unwrap().len(),
                1,
                "expected one seeded image for {year}"
            );
        }
    }
}

use super::{CharacterDetail, Homeworld};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fully resolved character, ready for the detail panel
///
/// Built fresh for every detail request and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterViewModel {
    pub url: String,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub birth_year: String,
    pub gender: String,
    pub eye_color: String,
    pub hair_color: String,
    pub skin_color: String,
    pub created: String,
    pub homeworld: Homeworld,
    pub species: String,
    /// Film titles, in the order of the character's film references
    pub films: Vec<String>,
}

impl CharacterViewModel {
    /// Merges a raw character with its resolved references
    ///
    /// # Errors
    /// Fails when the number of titles does not match the number of film
    /// references; a view model never silently drops films.
    pub fn merge(
        detail: CharacterDetail,
        homeworld: Homeworld,
        species: String,
        films: Vec<String>,
    ) -> Result<Self> {
        if films.len() != detail.films.len() {
            return Err(CatalogError::Validation {
                message: format!(
                    "{} lists {} film(s) but {} title(s) were resolved",
                    detail.name,
                    detail.films.len(),
                    films.len()
                ),
            }
            .into());
        }

        Ok(Self {
            url: detail.url,
            name: detail.name,
            height: detail.height,
            mass: detail.mass,
            birth_year: detail.birth_year,
            gender: detail.gender,
            eye_color: detail.eye_color,
            hair_color: detail.hair_color,
            skin_color: detail.skin_color,
            created: detail.created,
            homeworld,
            species,
            films,
        })
    }

    /// "1 film" / "3 films"
    pub fn film_count_label(&self) -> String {
        film_count_label(self.films.len())
    }

    /// Creation date as dd-MM-yyyy (UTC), or None when the timestamp is not RFC 3339
    pub fn created_date(&self) -> Option<String> {
        DateTime::parse_from_rfc3339(&self.created)
            .ok()
            .map(|created| created.with_timezone(&Utc).format("%d-%m-%Y").to_string())
    }

    /// Stable seed derived from the name so a character always gets the same portrait
    pub fn portrait_seed(&self) -> u32 {
        let sum: u64 = self.name.encode_utf16().map(u64::from).sum();
        (sum % 1000) as u32
    }

    pub fn portrait_url(&self) -> String {
        format!("https://picsum.photos/seed/{}/600/400", self.portrait_seed())
    }
}

/// Pluralized film count shared by cards and the detail panel
pub fn film_count_label(count: usize) -> String {
    if count == 1 {
        "1 film".to_string()
    } else {
        format!("{} films", count)
    }
}

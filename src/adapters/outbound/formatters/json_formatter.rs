use crate::application::read_models::CharacterListView;
use crate::catalog::domain::CharacterViewModel;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Character document with the derived presentation fields next to the raw ones
#[derive(Debug, Serialize)]
struct CharacterDocument<'a> {
    #[serde(flatten)]
    character: &'a CharacterViewModel,
    film_count: usize,
    date_added: Option<String>,
    portrait_url: String,
}

/// JsonFormatter adapter emitting pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format_page(&self, view: &CharacterListView) -> Result<String> {
        Ok(serde_json::to_string_pretty(view)?)
    }

    fn format_character(&self, character: &CharacterViewModel) -> Result<String> {
        let document = CharacterDocument {
            character,
            film_count: character.films.len(),
            date_added: character.created_date(),
            portrait_url: character.portrait_url(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

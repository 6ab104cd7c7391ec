//! Builder for constructing CharacterListView from a fetched page

use super::character_list_view::{CharacterCardView, CharacterListView};
use crate::application::dto::ListRequest;
use crate::catalog::domain::{total_pages, CharacterPage};

/// Builder for constructing CharacterListView from domain objects
pub struct CharacterListViewBuilder;

impl CharacterListViewBuilder {
    /// Builds the grid view of a page
    ///
    /// # Arguments
    /// * `page` - The page returned by the catalog
    /// * `request` - The request that produced it
    pub fn build(page: &CharacterPage, request: &ListRequest) -> CharacterListView {
        let cards = page
            .results
            .iter()
            .enumerate()
            .map(|(i, summary)| CharacterCardView {
                index: i + 1,
                name: summary.name.clone(),
                url: summary.url.clone(),
                film_count: summary.film_count(),
            })
            .collect();

        CharacterListView {
            cards,
            current_page: request.page,
            total_pages: total_pages(page.count),
            total_count: page.count,
            search_term: request.active_search().map(String::from),
            has_next: page.has_next(),
            has_previous: page.has_previous(),
        }
    }
}

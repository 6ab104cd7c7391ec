//! Character list view structs for read model
//!
//! These structs provide a flattened view of one page of the character grid.

use serde::Serialize;

/// One page of the character grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterListView {
    /// Cards on this page, in catalog order
    pub cards: Vec<CharacterCardView>,
    /// 1-based page number
    pub current_page: u32,
    /// ceil(total_count / 10), the catalog's fixed page size
    pub total_pages: u64,
    /// Number of matching characters across all pages
    pub total_count: u64,
    /// Trimmed search term, when a search is active
    pub search_term: Option<String>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl CharacterListView {
    /// Card by its 1-based position on the page
    pub fn card(&self, index: usize) -> Option<&CharacterCardView> {
        index.checked_sub(1).and_then(|i| self.cards.get(i))
    }
}

/// View representation of a character card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterCardView {
    /// 1-based position on the page, used to open the card
    pub index: usize,
    pub name: String,
    /// Locator of the character, input of the detail aggregator
    pub url: String,
    pub film_count: usize,
}

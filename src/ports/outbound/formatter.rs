use crate::application::read_models::CharacterListView;
use crate::catalog::domain::CharacterViewModel;
use crate::shared::Result;

/// CatalogFormatter port for rendering catalog state
///
/// Implementations turn read models into text for a presenter; they never
/// talk to the catalog themselves.
pub trait CatalogFormatter {
    /// Renders one page of character cards
    fn format_page(&self, view: &CharacterListView) -> Result<String>;

    /// Renders the detail panel of a single character
    fn format_character(&self, character: &CharacterViewModel) -> Result<String>;
}

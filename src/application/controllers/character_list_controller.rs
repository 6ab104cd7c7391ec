use crate::application::dto::ListRequest;
use crate::application::read_models::{CharacterListView, CharacterListViewBuilder};
use crate::catalog::domain::{total_pages, CharacterPage, CharacterSummary};
use crate::ports::outbound::CatalogRepository;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// CharacterListController - list, search and pagination state of the grid
///
/// Owns the current page number, the current search term and the most
/// recently fetched page. Every change of page or search term throws the
/// previous results away and fetches a fresh page; nothing is patched in place.
///
/// # Type Parameters
/// * `R` - CatalogRepository implementation
pub struct CharacterListController<R> {
    repository: R,
    request: ListRequest,
    page: CharacterPage,
}

impl<R: CatalogRepository> CharacterListController<R> {
    /// Creates a controller positioned on the first page, without a search term
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            request: ListRequest::first_page(),
            page: CharacterPage::empty(),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.request.page
    }

    pub fn search_term(&self) -> &str {
        &self.request.search_term
    }

    /// The request the current (or failed) results belong to
    pub fn request(&self) -> &ListRequest {
        &self.request
    }

    pub fn results(&self) -> &[CharacterSummary] {
        &self.page.results
    }

    pub fn has_next(&self) -> bool {
        self.page.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.page.has_previous()
    }

    pub fn total_count(&self) -> u64 {
        self.page.count
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.page.count)
    }

    /// Read model of the last fetched page
    pub fn view(&self) -> CharacterListView {
        CharacterListViewBuilder::build(&self.page, &self.request)
    }

    /// Fetches the page described by the current request
    ///
    /// Prior results are discarded before the request is issued, so a failed
    /// request leaves an empty grid rather than stale cards.
    pub async fn load(&mut self) -> Result<CharacterListView> {
        self.page = CharacterPage::empty();
        let page = self
            .repository
            .list_characters(self.request.page, &self.request.search_term)
            .await?;
        self.page = page;
        Ok(self.view())
    }

    /// Replaces page and search term at once, as the `list` command does
    pub async fn load_request(&mut self, request: ListRequest) -> Result<CharacterListView> {
        if request.page == 0 {
            return Err(CatalogError::Validation {
                message: "Page numbers start at 1".to_string(),
            }
            .into());
        }
        self.request = request;
        self.load().await
    }

    /// Jumps to a specific page, keeping the search term
    pub async fn go_to_page(&mut self, page: u32) -> Result<CharacterListView> {
        let request = ListRequest::new(page, self.request.search_term.clone());
        self.load_request(request).await
    }

    /// Moves one page forward; does nothing when the catalog reported no next page
    pub async fn next_page(&mut self) -> Result<Option<CharacterListView>> {
        if !self.has_next() {
            return Ok(None);
        }
        self.request.page += 1;
        self.load().await.map(Some)
    }

    /// Moves one page back; does nothing when the catalog reported no previous page
    pub async fn previous_page(&mut self) -> Result<Option<CharacterListView>> {
        if !self.has_previous() || self.request.page <= 1 {
            return Ok(None);
        }
        self.request.page -= 1;
        self.load().await.map(Some)
    }

    /// Starts a new search; a new search always starts on page 1
    pub async fn search(&mut self, term: &str) -> Result<CharacterListView> {
        self.request = ListRequest::new(1, term);
        self.load().await
    }

    /// Drops the search term and returns to page 1
    pub async fn clear_search(&mut self) -> Result<CharacterListView> {
        self.request = ListRequest::first_page();
        self.load().await
    }

    /// Re-issues exactly the last request
    pub async fn retry(&mut self) -> Result<CharacterListView> {
        self.load().await
    }

    /// Back to the initial state, used on logout
    pub fn reset(&mut self) {
        self.request = ListRequest::first_page();
        self.page = CharacterPage::empty();
    }
}

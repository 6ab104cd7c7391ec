/// ListRequest - one request for a page of the character list
///
/// The controller remembers the last request so a retry re-issues
/// exactly the same page and search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    /// 1-based page number
    pub page: u32,
    /// Search term as the user typed it; blank means "no filter"
    pub search_term: String,
}

impl ListRequest {
    pub fn new(page: u32, search_term: impl Into<String>) -> Self {
        Self {
            page,
            search_term: search_term.into(),
        }
    }

    /// First page, no filter
    pub fn first_page() -> Self {
        Self::new(1, "")
    }

    /// The search term as it is sent to the catalog, if any
    pub fn active_search(&self) -> Option<&str> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        Self::first_page()
    }
}

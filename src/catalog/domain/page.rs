use super::CharacterSummary;
use serde::Deserialize;

/// Number of records the catalog returns per page; it cannot be requested
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One page of the `people` collection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub results: Vec<CharacterSummary>,
    /// Total number of matching records across all pages
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl CharacterPage {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            next: None,
            previous: None,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// ceil(count / DEFAULT_PAGE_SIZE)
pub fn total_pages(count: u64) -> u64 {
    count.div_ceil(u64::from(DEFAULT_PAGE_SIZE))
}

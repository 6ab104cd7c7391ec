use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use swapi_explorer::prelude::*;
use swapi_explorer::shared::error::CatalogError;

/// Mock CatalogRepository serving canned resources and pages
///
/// Clones share the call log, so a test can keep one handle and move the
/// other into the code under test.
#[derive(Default, Clone)]
pub struct MockCatalogRepository {
    resources: HashMap<String, Value>,
    failing: HashSet<String>,
    pages: Arc<Mutex<VecDeque<CharacterPage>>>,
    resource_calls: Arc<Mutex<Vec<String>>>,
    list_calls: Arc<Mutex<Vec<(u32, String)>>>,
}

impl MockCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, locator: &str, value: Value) -> Self {
        self.resources.insert(locator.to_string(), value);
        self
    }

    /// Requests for this locator answer HTTP 500
    pub fn with_failure(mut self, locator: &str) -> Self {
        self.failing.insert(locator.to_string());
        self
    }

    /// Queues a page for the next list request
    pub fn with_page(self, page: CharacterPage) -> Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub fn resource_calls(&self) -> Vec<String> {
        self.resource_calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<(u32, String)> {
        self.list_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn fetch_resource(&self, locator: &str) -> Result<Value> {
        self.resource_calls
            .lock()
            .unwrap()
            .push(locator.to_string());

        let status = if self.failing.contains(locator) {
            500
        } else if let Some(value) = self.resources.get(locator) {
            return Ok(value.clone());
        } else {
            404
        };

        Err(CatalogError::FetchFailure {
            locator: locator.to_string(),
            status,
        }
        .into())
    }

    async fn list_characters(&self, page: u32, search_term: &str) -> Result<CharacterPage> {
        self.list_calls
            .lock()
            .unwrap()
            .push((page, search_term.to_string()));
        Ok(self
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(CharacterPage::empty))
    }
}

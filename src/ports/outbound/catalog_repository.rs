use crate::catalog::domain::CharacterPage;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// CatalogRepository port for reading the remote character catalog
///
/// This port abstracts the catalog HTTP service. Implementations make a
/// single best-effort attempt per call: no retries, no caching.
///
/// # Async Support
/// Implementations must be `Send + Sync` so several requests can be in
/// flight at the same time.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Dereferences an absolute resource locator
    ///
    /// # Returns
    /// The JSON body as a generic value; callers decide what shape they expect
    ///
    /// # Errors
    /// Returns `CatalogError::FetchFailure` for a non-success HTTP status and
    /// `CatalogError::Transport` when the service cannot be reached.
    async fn fetch_resource(&self, locator: &str) -> Result<Value>;

    /// Fetches one page of the `people` collection
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `search_term` - Name filter; ignored when blank after trimming
    async fn list_characters(&self, page: u32, search_term: &str) -> Result<CharacterPage>;
}

/// Decodes a generic JSON value into the shape the caller expects
///
/// # Errors
/// Returns `CatalogError::InvalidResponse` naming the locator when the value
/// does not have the expected shape
pub fn decode_resource<T: DeserializeOwned>(locator: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        CatalogError::InvalidResponse {
            locator: locator.to_string(),
            details: e.to_string(),
        }
        .into()
    })
}

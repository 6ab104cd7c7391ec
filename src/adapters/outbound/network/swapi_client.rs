use crate::catalog::domain::CharacterPage;
use crate::ports::outbound::{decode_resource, CatalogRepository};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Root of the public Star Wars API
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// SwapiCatalogClient adapter for reading characters from the Star Wars API
///
/// This adapter implements the CatalogRepository port on top of an async
/// reqwest client. Each call is a single attempt: failures are reported to
/// the caller, who decides whether the user gets a retry button.
#[derive(Debug, Clone)]
pub struct SwapiCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl SwapiCatalogClient {
    /// Creates a client for the public API without a request timeout
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_BASE_URL, None)
    }

    /// Creates a client for another base URL, optionally with a transport timeout
    pub fn with_options(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("swapi-explorer/{}", version);
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, base_url))
    }

    /// Wraps an already configured reqwest client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Locator of a character by its numeric id
    pub fn character_locator(&self, id: u64) -> String {
        format!("{}/people/{}/", self.base_url, id)
    }

    /// Builds the list URL; `search` is only sent for a non-blank term
    pub fn people_url(&self, page: u32, search_term: &str) -> String {
        let term = search_term.trim();
        if term.is_empty() {
            format!("{}/people/?page={}", self.base_url, page)
        } else {
            format!(
                "{}/people/?search={}&page={}",
                self.base_url,
                urlencoding::encode(term),
                page
            )
        }
    }

    /// Issues a GET and parses the body as JSON
    async fn get_json(&self, locator: &str) -> Result<Value> {
        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| CatalogError::Transport {
                locator: locator.to_string(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::FetchFailure {
                locator: locator.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| CatalogError::InvalidResponse {
                locator: locator.to_string(),
                details: e.to_string(),
            })?;
        Ok(body)
    }
}

#[async_trait]
impl CatalogRepository for SwapiCatalogClient {
    async fn fetch_resource(&self, locator: &str) -> Result<Value> {
        self.get_json(locator).await
    }

    async fn list_characters(&self, page: u32, search_term: &str) -> Result<CharacterPage> {
        let url = self.people_url(page, search_term);
        let body = self.get_json(&url).await?;
        decode_resource(&url, body)
    }
}

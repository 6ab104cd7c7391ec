/// Network adapters for external API calls
mod swapi_client;

pub use swapi_client::{SwapiCatalogClient, DEFAULT_BASE_URL};

//! swapi-explorer - browse Star Wars characters from the terminal
//!
//! This library lists, searches and pages through the characters of a
//! SWAPI-compatible catalog, and resolves a single character together with
//! its homeworld, species and films into one detail view. It follows a
//! hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Catalog records, view models and policies
//! - **Application Layer** (`application`): Use cases, controllers and the session
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use swapi_explorer::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let client = SwapiCatalogClient::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Resolve one character
//! let use_case = AggregateCharacterDetailsUseCase::new(client.clone(), progress_reporter);
//! let character = use_case.execute(&client.character_locator(1)).await?;
//!
//! // Format output
//! let formatter = TextFormatter::new();
//! println!("{}", formatter.format_character(&character)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSessionStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::SwapiCatalogClient;
    pub use crate::application::controllers::CharacterListController;
    pub use crate::application::dto::{ListRequest, OutputFormat};
    pub use crate::application::read_models::CharacterListView;
    pub use crate::application::session::SessionContext;
    pub use crate::application::use_cases::AggregateCharacterDetailsUseCase;
    pub use crate::catalog::domain::{
        CharacterDetail, CharacterPage, CharacterSummary, CharacterViewModel, Homeworld,
    };
    pub use crate::catalog::policies::{SpeciesResolution, SpeciesTheme};
    pub use crate::ports::outbound::{
        CatalogFormatter, CatalogRepository, OutputPresenter, ProgressReporter, SessionStore,
    };
    pub use crate::shared::Result;
}

/// Mock implementations for testing
mod memory_session_store;
mod mock_catalog_repository;
mod mock_progress_reporter;

pub use memory_session_store::MemorySessionStore;
pub use mock_catalog_repository::MockCatalogRepository;
pub use mock_progress_reporter::MockProgressReporter;

/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (catalog API, file system, console, etc.).
pub mod catalog_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod session_store;

pub use catalog_repository::{decode_resource, CatalogRepository};
pub use formatter::CatalogFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use session_store::SessionStore;

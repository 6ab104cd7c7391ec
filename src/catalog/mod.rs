/// Catalog layer - domain models and business rules of the character catalog
///
/// Nothing in here performs I/O. Network access goes through the
/// `CatalogRepository` port.
pub mod domain;
pub mod policies;

/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the catalog domain isolated.
mod list_request;
mod output_format;

pub use list_request::ListRequest;
pub use output_format::OutputFormat;

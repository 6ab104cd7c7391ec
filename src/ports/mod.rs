/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the application core
/// uses to reach the catalog service, the session storage and the terminal.
pub mod outbound;

/// Application layer - Use cases, controllers and DTOs
///
/// This layer contains the application logic that orchestrates
/// catalog requests and keeps UI-facing state, reaching infrastructure
/// only through ports.
pub mod controllers;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod session;
pub mod use_cases;

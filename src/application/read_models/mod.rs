//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of catalog data for rendering.

pub mod character_list_view;
pub mod character_list_view_builder;

pub use character_list_view::{CharacterCardView, CharacterListView};
pub use character_list_view_builder::CharacterListViewBuilder;

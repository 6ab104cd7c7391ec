pub mod species_resolution;
pub mod species_theme;

pub use species_resolution::{SpeciesResolution, DEFAULT_SPECIES};
pub use species_theme::SpeciesTheme;

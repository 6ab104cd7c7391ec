pub mod character;
pub mod character_view;
pub mod film;
pub mod homeworld;
pub mod page;
pub mod species;

pub use character::{CharacterDetail, CharacterSummary};
pub use character_view::{film_count_label, CharacterViewModel};
pub use film::Film;
pub use homeworld::{Homeworld, UNKNOWN};
pub use page::{total_pages, CharacterPage, DEFAULT_PAGE_SIZE};
pub use species::Species;

/// Controllers holding UI-facing state between user actions
mod character_list_controller;

pub use character_list_controller::CharacterListController;

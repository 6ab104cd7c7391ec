/// Use cases module containing application business logic orchestration
mod aggregate_character_details;

pub use aggregate_character_details::AggregateCharacterDetailsUseCase;

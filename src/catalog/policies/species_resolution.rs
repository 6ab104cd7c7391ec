/// Species assumed when a character lists no species at all
pub const DEFAULT_SPECIES: &str = "Human";

/// SpeciesResolution policy for picking the species of a character
///
/// The catalog leaves the species list empty for humans, and in practice
/// never lists more than one species per character. So:
/// 1. no species references -> "Human", nothing is fetched
/// 2. otherwise only the first reference is dereferenced, the rest are ignored
pub struct SpeciesResolution;

impl SpeciesResolution {
    /// Returns the one species reference worth fetching, if any
    pub fn reference_to_fetch(species_refs: &[String]) -> Option<&str> {
        species_refs.first().map(String::as_str)
    }

    /// Species name to use when no reference is fetched
    pub fn default_species() -> String {
        DEFAULT_SPECIES.to_string()
    }
}

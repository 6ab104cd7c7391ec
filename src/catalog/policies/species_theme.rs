/// Color theme of a species badge
///
/// A closed set of well-known species, anything else falls back to `Default`.
/// The enum is only a style token; adapters decide what the token looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesTheme {
    Human,
    Droid,
    Wookiee,
    Twilek,
    Hutt,
    YodaSpecies,
    Trandoshan,
    MonCalamari,
    Rodian,
    Default,
}

impl SpeciesTheme {
    /// Matching order matters: "Yoda's species" must win over anything else
    const MATCHERS: [(&'static str, SpeciesTheme); 9] = [
        ("yoda", SpeciesTheme::YodaSpecies),
        ("human", SpeciesTheme::Human),
        ("droid", SpeciesTheme::Droid),
        ("wookiee", SpeciesTheme::Wookiee),
        ("twilek", SpeciesTheme::Twilek),
        ("hutt", SpeciesTheme::Hutt),
        ("trandoshan", SpeciesTheme::Trandoshan),
        ("moncalamari", SpeciesTheme::MonCalamari),
        ("rodian", SpeciesTheme::Rodian),
    ];

    /// Picks the theme for a resolved species name
    pub fn for_species(species: &str) -> Self {
        let key = Self::normalize(species);
        Self::MATCHERS
            .iter()
            .find(|(fragment, _)| key.contains(fragment))
            .map(|(_, theme)| *theme)
            .unwrap_or(SpeciesTheme::Default)
    }

    /// Lower-cases and drops everything that is not a-z or 0-9 ("Twi'lek" -> "twilek")
    fn normalize(species: &str) -> String {
        species
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect()
    }
}

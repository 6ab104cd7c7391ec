use serde::{Deserialize, Deserializer, Serialize};

/// One row of the `people` list endpoint
///
/// The list endpoint returns full character records; only what a card needs
/// is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    /// Canonical resource URI, also the identity of the character
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub films: Vec<String>,
}

impl CharacterSummary {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            films: Vec::new(),
        }
    }

    pub fn with_films(mut self, films: Vec<String>) -> Self {
        self.films = films;
        self
    }

    pub fn film_count(&self) -> usize {
        self.films.len()
    }
}

/// Raw character record as returned by the catalog for a single character
///
/// Related resources are still references here; the detail aggregator
/// resolves them into a `CharacterViewModel`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterDetail {
    #[serde(default)]
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub created: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub homeworld: Option<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
}

/// `null`, `""` and missing all mean "no reference"
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|reference| !reference.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_from_list_record() {
        let record = json!({
            "name": "Luke Skywalker",
            "height": "172",
            "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
            "url": "https://swapi.dev/api/people/1/"
        });
        let summary: CharacterSummary = serde_json::from_value(record).unwrap();
        assert_eq!(summary.name, "Luke Skywalker");
        assert_eq!(summary.url, "https://swapi.dev/api/people/1/");
        assert_eq!(summary.film_count(), 2);
    }

    #[test]
    fn test_summary_without_films() {
        let summary: CharacterSummary = serde_json::from_value(json!({
            "name": "Nobody",
            "url": "https://swapi.dev/api/people/99/"
        }))
        .unwrap();
        assert_eq!(summary.film_count(), 0);
    }

    #[test]
    fn test_detail_from_catalog_record() {
        let detail: CharacterDetail = serde_json::from_value(json!({
            "name": "C-3PO",
            "height": "167",
            "mass": "75",
            "hair_color": "n/a",
            "skin_color": "gold",
            "eye_color": "yellow",
            "birth_year": "112BBY",
            "gender": "n/a",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/"],
            "species": ["https://swapi.dev/api/species/2/"],
            "created": "2014-12-10T15:10:51.357000Z",
            "url": "https://swapi.dev/api/people/2/"
        }))
        .unwrap();

        assert_eq!(detail.birth_year, "112BBY");
        assert_eq!(
            detail.homeworld.as_deref(),
            Some("https://swapi.dev/api/planets/1/")
        );
        assert_eq!(detail.species.len(), 1);
        assert_eq!(detail.films.len(), 1);
    }

    #[test]
    fn test_detail_blank_homeworld_is_absent() {
        let null_homeworld: CharacterDetail =
            serde_json::from_value(json!({"name": "A", "homeworld": null})).unwrap();
        assert!(null_homeworld.homeworld.is_none());

        let empty_homeworld: CharacterDetail =
            serde_json::from_value(json!({"name": "B", "homeworld": ""})).unwrap();
        assert!(empty_homeworld.homeworld.is_none());

        let missing_homeworld: CharacterDetail =
            serde_json::from_value(json!({"name": "C"})).unwrap();
        assert!(missing_homeworld.homeworld.is_none());
        assert!(missing_homeworld.species.is_empty());
        assert!(missing_homeworld.films.is_empty());
    }
}

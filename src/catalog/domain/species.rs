use serde::Deserialize;

/// Species resource; only the name is used
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Species {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_species_record() {
        let species: Species = serde_json::from_value(json!({
            "name": "Droid",
            "classification": "artificial",
            "language": "n/a"
        }))
        .unwrap();
        assert_eq!(species.name, "Droid");
    }

    #[test]
    fn test_species_record_without_name_is_rejected() {
        let result = serde_json::from_value::<Species>(json!({"title": "not a species"}));
        assert!(result.is_err());
    }
}

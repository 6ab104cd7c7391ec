use serde::Deserialize;

/// Film resource; only the title is used
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Film {
    pub title: String,
}

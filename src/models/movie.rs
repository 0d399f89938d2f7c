//! Movie models: scraped search hit, details lookup and premieres listing

use serde::{Deserialize, Serialize};

/// First result scraped from the movie search page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub year: String,
    pub rating: Option<String>,
    pub subtitle: String,
    /// Site-relative detail link, e.g. `/film/301/`
    pub href: String,
    pub film_id: String,
}

/// Movie detail lookup (`/v1.4/movie/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub description: Option<String>,
}

/// Premieres listing for one year/month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremieresResponse {
    pub total: Option<u32>,
    #[serde(default)]
    pub items: Vec<PremiereItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiereItem {
    pub kinopoisk_id: u64,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub year: Option<i32>,
    pub duration: Option<u32>,
    pub premiere_ru: Option<String>,
}

impl PremiereItem {
    /// Russian title, then English title
    pub fn display_name(&self) -> Option<&str> {
        self.name_ru.as_deref().or(self.name_en.as_deref())
    }
}

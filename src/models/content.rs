// src/models/content.rs

use serde::{Deserialize, Serialize};

/// A library entry (tantara, ohabolana, kabary, ...).
///
/// Different endpoints name the category differently, so every known
/// spelling is kept and `category()` picks the first one present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: i64,

    #[serde(default)]
    pub titre: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub type_evenement: Option<String>,
    #[serde(default)]
    pub categorie: Option<String>,
    #[serde(default)]
    pub categorie_nom: Option<String>,
    #[serde(default)]
    pub nom_categorie: Option<String>,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,

    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub auteur: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Content {
    pub fn category(&self) -> Option<&str> {
        [
            &self.type_evenement,
            &self.categorie,
            &self.categorie_nom,
            &self.nom_categorie,
            &self.content_type,
        ]
        .into_iter()
        .find_map(|c| c.as_deref().filter(|c| !c.is_empty()))
    }
}

/// Client-side library filter. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct LibraryFilter {
    pub search: Option<String>,
    pub kind: Option<String>,
    pub region: Option<String>,
}

impl LibraryFilter {
    pub fn matches(&self, item: &Content) -> bool {
        let matches_search = match &self.search {
            Some(q) => {
                let q = q.to_lowercase();
                item.titre.to_lowercase().contains(&q)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&q))
            }
            None => true,
        };

        let matches_kind = match &self.kind {
            Some(kind) => item
                .category()
                .is_some_and(|c| c.eq_ignore_ascii_case(kind)),
            None => true,
        };

        let matches_region = match &self.region {
            Some(region) => item
                .region
                .as_deref()
                .is_some_and(|r| r.to_lowercase() == region.to_lowercase()),
            None => true,
        };

        matches_search && matches_kind && matches_region
    }

    pub fn apply<'a>(&self, items: &'a [Content]) -> Vec<&'a Content> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// One month of the cultural calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: String,
    #[serde(default)]
    pub events: Vec<String>,
}

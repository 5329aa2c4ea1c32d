use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Language, Photo};

/// A fixed geographic anchor in the static catalog. Cities ship with the
/// binary and are never created, mutated, or deleted at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct City {
    pub id: String,
    /// Canonical name, used for filtering and per-city photo matching.
    pub name: String,
    pub name_ar: String,
    pub name_fr: String,
    pub description: String,
    pub description_ar: String,
    pub description_fr: String,
    #[ts(type = "[number, number]")]
    pub center: [f64; 2],
    pub zoom: u8,
    /// Built-in photos belonging to this city.
    pub photos: Vec<Photo>,
}

impl City {
    /// Name in the requested language.
    pub fn localized_name(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.name_ar,
            Language::Fr => &self.name_fr,
            Language::En => &self.name,
        }
    }
}

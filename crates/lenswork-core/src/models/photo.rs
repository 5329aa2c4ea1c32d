use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Language;

/// Photo provenance, assigned at construction time. Replaces the legacy
/// convention of sniffing the `custom-` prefix off the photo id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PhotoOrigin {
    /// Shipped with the static city catalog.
    BuiltIn,
    /// Uploaded by the owner at runtime.
    Custom,
}

/// A displayable unit of content.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Photo {
    pub id: String,
    pub origin: PhotoOrigin,
    /// Remote URL for built-in photos, a base64 data URI for uploads.
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_fr: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_fr: Option<String>,
    /// Canonical city name; photos only join per-city views when this matches.
    pub location_name: String,
    /// Latitude/longitude pair. A photo without usable coordinates stays out
    /// of map placement but remains listable in the grid.
    #[ts(type = "[number, number] | null")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords: Option<[f64; 2]>,
    /// Display-only, reserved for commercial use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Photo {
    /// Coordinates, if present and finite in both components.
    pub fn valid_coords(&self) -> Option<[f64; 2]> {
        self.coords.filter(|c| c.iter().all(|v| v.is_finite()))
    }

    pub fn is_custom(&self) -> bool {
        self.origin == PhotoOrigin::Custom
    }

    /// Title in the requested language, falling back to the primary title.
    pub fn localized_title(&self, language: Language) -> &str {
        match language {
            Language::Ar => self.title_ar.as_deref().unwrap_or(&self.title),
            Language::Fr => self.title_fr.as_deref().unwrap_or(&self.title),
            Language::En => &self.title,
        }
    }

    /// Description in the requested language, falling back to the primary one.
    pub fn localized_description(&self, language: Language) -> &str {
        match language {
            Language::Ar => self.description_ar.as_deref().unwrap_or(&self.description),
            Language::Fr => self.description_fr.as_deref().unwrap_or(&self.description),
            Language::En => &self.description,
        }
    }
}

/// A candidate photo produced by the upload form. The store assigns identity
/// and provenance when it accepts the draft.
#[derive(Debug, Clone)]
pub struct PhotoDraft {
    pub url: String,
    pub title: String,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub description: String,
    pub location_name: String,
    pub coords: [f64; 2],
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo_with_coords(coords: Option<[f64; 2]>) -> Photo {
        Photo {
            id: "m1".to_string(),
            origin: PhotoOrigin::BuiltIn,
            url: "https://example.com/m1.jpg".to_string(),
            title: "Koutoubia Dusk".to_string(),
            title_ar: Some("الكتبية وقت الغروب".to_string()),
            title_fr: None,
            description: "The golden hour lighting hitting the minaret.".to_string(),
            description_ar: None,
            description_fr: None,
            location_name: "Marrakech".to_string(),
            coords,
            price: None,
        }
    }

    #[test]
    fn test_valid_coords() {
        assert!(photo_with_coords(Some([31.62, -7.99])).valid_coords().is_some());
        assert!(photo_with_coords(None).valid_coords().is_none());
        assert!(
            photo_with_coords(Some([f64::NAN, -7.99]))
                .valid_coords()
                .is_none()
        );
        assert!(
            photo_with_coords(Some([31.62, f64::INFINITY]))
                .valid_coords()
                .is_none()
        );
    }

    #[test]
    fn test_localized_title_falls_back() {
        let photo = photo_with_coords(None);
        assert_eq!(photo.localized_title(Language::Ar), "الكتبية وقت الغروب");
        assert_eq!(photo.localized_title(Language::Fr), "Koutoubia Dusk");
        assert_eq!(photo.localized_title(Language::En), "Koutoubia Dusk");
        // Descriptions have no Arabic variant here, so every language falls
        // back to the primary text.
        assert_eq!(
            photo.localized_description(Language::Ar),
            photo.description
        );
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::to_value(photo_with_coords(Some([1.0, 2.0]))).unwrap();
        assert!(json.get("locationName").is_some());
        assert!(json.get("titleAr").is_some());
        // Absent optionals stay off the wire entirely
        assert!(json.get("titleFr").is_none());
    }

    #[test]
    fn test_missing_coords_deserialize_as_none() {
        let json = r#"{
            "id": "custom-1",
            "origin": "custom",
            "url": "data:image/jpeg;base64,xxxx",
            "title": "Untitled",
            "description": "Custom uploaded photo",
            "locationName": "Morocco"
        }"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        assert!(photo.coords.is_none());
        assert!(photo.is_custom());
    }
}

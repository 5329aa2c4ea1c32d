//! The static city catalog and the catalog composer.
//!
//! Cities and their built-in photos ship with the binary. Everything here is
//! a pure function of its inputs: the composed catalog is derived from the
//! static data plus the uploaded-photo list and the hidden-ID set.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

use crate::models::{City, Photo, PhotoOrigin};

/// Country-level map view used before a city is selected.
pub const DEFAULT_MAP_CENTER: [f64; 2] = [31.7917, -7.0926];
pub const DEFAULT_MAP_ZOOM: u8 = 6;

/// Number of catalog entries shown on the landing-page highlight strip.
pub const HIGHLIGHT_COUNT: usize = 6;

fn builtin_photo(
    id: &str,
    url: &str,
    title: &str,
    title_ar: &str,
    title_fr: &str,
    description: &str,
    location_name: &str,
    coords: [f64; 2],
) -> Photo {
    Photo {
        id: id.to_string(),
        origin: PhotoOrigin::BuiltIn,
        url: url.to_string(),
        title: title.to_string(),
        title_ar: Some(title_ar.to_string()),
        title_fr: Some(title_fr.to_string()),
        description: description.to_string(),
        description_ar: None,
        description_fr: None,
        location_name: location_name.to_string(),
        coords: Some(coords),
        price: None,
    }
}

static MOROCCO_CITIES: Lazy<Vec<City>> = Lazy::new(|| {
    vec![
        City {
            id: "marrakech".to_string(),
            name: "Marrakech".to_string(),
            name_ar: "مراكش".to_string(),
            name_fr: "Marrakech".to_string(),
            description: "The Red City, home to the vibrant Jemaa el-Fnaa and majestic palaces."
                .to_string(),
            description_ar: "المدينة الحمراء، موطن ساحة جامع الفناء النابضة بالحياة والقصور المهيبة."
                .to_string(),
            description_fr:
                "La Ville Rouge, abritant la vibrante place Jemaa el-Fna et des palais majestueux."
                    .to_string(),
            center: [31.6295, -7.9811],
            zoom: 12,
            photos: vec![
                builtin_photo(
                    "m1",
                    "https://images.unsplash.com/photo-1597212618440-806262de4f6b?auto=format&fit=crop&q=80&w=1200",
                    "Koutoubia Dusk",
                    "الكتبية وقت الغروب",
                    "Koutoubia au Crépuscule",
                    "The golden hour lighting hitting the minaret.",
                    "Marrakech",
                    [31.6237, -7.9936],
                ),
                builtin_photo(
                    "m2",
                    "https://images.unsplash.com/photo-1539667468225-8df6675ca531?auto=format&fit=crop&q=80&w=1200",
                    "Traditional Tanjiya",
                    "طباخ الطنجية التقليدي",
                    "Cuisinier de Tanjiya",
                    "Traditional cooking in the heart of Marrakech Medina.",
                    "Marrakech",
                    [31.6260, -7.9890],
                ),
            ],
        },
        City {
            id: "chefchaouen".to_string(),
            name: "Chefchaouen".to_string(),
            name_ar: "شفشاون".to_string(),
            name_fr: "Chefchaouen".to_string(),
            description: "The Blue Pearl of the Rif Mountains.".to_string(),
            description_ar: "الجوهرة الزرقاء في جبال الريف.".to_string(),
            description_fr: "La Perle Bleue des montagnes du Rif.".to_string(),
            center: [35.1688, -5.2636],
            zoom: 14,
            photos: vec![builtin_photo(
                "c1",
                "https://images.unsplash.com/photo-1543310321-72f122558661?auto=format&fit=crop&q=80&w=1200",
                "Blue Alleyway",
                "زقاق أزرق",
                "Ruelle Bleue",
                "Traditional steps leading into the heart of the Medina.",
                "Chefchaouen",
                [35.1691, -5.2625],
            )],
        },
        City {
            id: "merzouga".to_string(),
            name: "Merzouga".to_string(),
            name_ar: "مرزوكة".to_string(),
            name_fr: "Merzouga".to_string(),
            description: "Gateway to the Erg Chebbi dunes and the vast Sahara Desert.".to_string(),
            description_ar: "بوابة عروق الشبي والصحراء الكبرى الشاسعة.".to_string(),
            description_fr: "Porte des dunes de l'Erg Chebbi et du vaste désert du Sahara."
                .to_string(),
            center: [31.0983, -3.9840],
            zoom: 10,
            photos: vec![builtin_photo(
                "s1",
                "https://images.unsplash.com/photo-1489493585363-d69421e0dee3?auto=format&fit=crop&q=80&w=1200",
                "Dunes at Dawn",
                "كثبان الفجر",
                "Dunes à l'Aube",
                "Shadows playing across the crest of Erg Chebbi.",
                "Sahara Desert",
                [31.1044, -3.9612],
            )],
        },
    ]
});

/// The full static city catalog.
pub fn cities() -> &'static [City] {
    &MOROCCO_CITIES
}

pub fn city_by_id(id: &str) -> Option<&'static City> {
    cities().iter().find(|c| c.id == id)
}

/// Look up a city by canonical name (case-insensitive for CLI ergonomics).
pub fn city_by_name(name: &str) -> Option<&'static City> {
    cities().iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Every built-in photo across every city.
pub fn builtin_photos() -> impl Iterator<Item = &'static Photo> {
    cities().iter().flat_map(|c| c.photos.iter())
}

/// Every built-in photo ID, the input to a full-catalog mask.
pub fn builtin_photo_ids() -> Vec<String> {
    builtin_photos().map(|p| p.id.clone()).collect()
}

/// Grid filter: a canonical city name, or the "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityFilter {
    All,
    Named(String),
}

impl CityFilter {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            CityFilter::All
        } else {
            CityFilter::Named(value.to_string())
        }
    }
}

/// Derive the effective catalog: uploads (newest first) ahead of built-in
/// photos, with masked built-in IDs excluded.
pub fn compose_catalog(custom_photos: &[Photo], hidden_ids: &BTreeSet<String>) -> Vec<Photo> {
    let mut composed = custom_photos.to_vec();
    composed.extend(
        builtin_photos()
            .filter(|p| !hidden_ids.contains(&p.id))
            .cloned(),
    );
    composed
}

/// Filter a catalog by city name. The `All` sentinel returns the input
/// unchanged.
pub fn filter_by_city(catalog: &[Photo], filter: &CityFilter) -> Vec<Photo> {
    match filter {
        CityFilter::All => catalog.to_vec(),
        CityFilter::Named(name) => catalog
            .iter()
            .filter(|p| p.location_name == *name)
            .cloned()
            .collect(),
    }
}

/// Photos for one city's map view: its built-in photos (masked IDs and
/// unplaceable coordinates excluded) followed by uploads whose location
/// matches the city's canonical name.
pub fn photos_for_city(
    city: &City,
    custom_photos: &[Photo],
    hidden_ids: &BTreeSet<String>,
) -> Vec<Photo> {
    let mut photos: Vec<Photo> = city
        .photos
        .iter()
        .filter(|p| !hidden_ids.contains(&p.id) && p.valid_coords().is_some())
        .cloned()
        .collect();
    photos.extend(
        custom_photos
            .iter()
            .filter(|p| p.location_name == city.name && p.valid_coords().is_some())
            .cloned(),
    );
    photos
}

/// The landing-page highlight strip: the head of the composed catalog.
pub fn highlights(catalog: &[Photo]) -> &[Photo] {
    &catalog[..catalog.len().min(HIGHLIGHT_COUNT)]
}

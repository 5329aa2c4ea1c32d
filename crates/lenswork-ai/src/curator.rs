//! The curator: prompt construction plus the never-fails fetch wrapper.

use tracing::warn;

use crate::client::DescriptionClient;

/// Fallback line when the provider call fails outright.
fn failure_fallback(lang: &str) -> &'static str {
    match lang {
        "ar" => "لحظة مخلدة من قلب المغرب.",
        "fr" => "Un instant saisi au cœur du Maroc.",
        _ => "A moment captured in the heart of Morocco.",
    }
}

/// Fallback line when the provider answers but with empty text.
fn empty_fallback(lang: &str) -> &'static str {
    match lang {
        "ar" => "جمال المغرب الخالد في صورة.",
        "fr" => "La beauté intemporelle du Maroc, capturée.",
        _ => "Capturing the timeless beauty of Morocco.",
    }
}

fn language_name(lang: &str) -> &'static str {
    match lang {
        "ar" => "Arabic",
        "fr" => "French",
        _ => "English",
    }
}

/// Build the curator prompt for a titled photograph.
pub fn curator_prompt(title: &str, location: &str, lang: &str) -> String {
    format!(
        "As an artistic curator, write a poetic 2-sentence description for a professional \
         photograph titled \"{title}\" taken in \"{location}\", Morocco. Keep it evocative of \
         Moroccan culture and light. IMPORTANT: Write the response ONLY in {}.",
        language_name(lang)
    )
}

/// Fetch an artistic description for a photo.
///
/// Never fails: provider errors and empty answers resolve to a fixed,
/// non-empty fallback line in the requested language, so callers can treat
/// this as infallible.
pub async fn artistic_description(
    client: &dyn DescriptionClient,
    title: &str,
    location: &str,
    lang: &str,
) -> String {
    let prompt = curator_prompt(title, location, lang);
    match client.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => empty_fallback(lang).to_string(),
        Err(err) => {
            warn!("description fetch failed: {err}");
            failure_fallback(lang).to_string()
        }
    }
}

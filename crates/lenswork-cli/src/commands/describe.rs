use anyhow::{Result, bail};
use std::sync::Arc;

use crate::config::CliConfig;
use lenswork_ai::{DescriptionClient, GeminiClient, MockDescriptionClient};
use lenswork_core::GalleryCore;
use lenswork_core::models::Language;
use lenswork_core::services::DescriptionService;

pub async fn run(
    core: &GalleryCore,
    config: &CliConfig,
    id: &str,
    lang: Option<&str>,
) -> Result<()> {
    let Some(photo) = core.store.catalog().into_iter().find(|p| p.id == id) else {
        bail!("no photo with id '{id}' in the catalog");
    };
    let language = lang
        .and_then(Language::parse)
        .unwrap_or_else(|| core.store.language());

    let client: Arc<dyn DescriptionClient> = match config.gemini_api_key() {
        Some(key) => Arc::new(GeminiClient::new(key)),
        None => {
            eprintln!("Note: GEMINI_API_KEY is not set; using the offline curator line.");
            Arc::new(MockDescriptionClient::failing())
        }
    };

    let descriptions = DescriptionService::new(client);
    let ticket = descriptions.begin();
    let text = descriptions
        .describe(
            photo.localized_title(language),
            &photo.location_name,
            language,
        )
        .await;

    // Single-shot command: the ticket is always current here, but the commit
    // gate is the same one interactive views go through.
    if let Some(text) = descriptions.accept(ticket, text) {
        println!("{text}");
    }

    Ok(())
}

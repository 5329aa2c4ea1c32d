//! Deterministic mock description client for tests and offline use.

use async_trait::async_trait;

use crate::client::DescriptionClient;
use crate::error::{AiError, Result};

/// A client that always answers the same way.
pub struct MockDescriptionClient {
    reply: Option<String>,
}

impl MockDescriptionClient {
    /// Always answer with the given text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
        }
    }

    /// Always fail, driving callers onto the fallback path.
    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl DescriptionClient for MockDescriptionClient {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(AiError::Provider("mock provider failure".to_string())),
        }
    }
}

//! Description client trait

use async_trait::async_trait;

use crate::error::Result;

/// A provider that turns a curator prompt into prose.
///
/// Implementations may fail; the curator wrapper is where the never-fails
/// guarantee lives.
#[async_trait]
pub trait DescriptionClient: Send + Sync {
    /// Generate prose for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

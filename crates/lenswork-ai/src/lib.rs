//! Lenswork AI - the gallery's description fetcher
//!
//! A thin seam around a generative-text provider: the [`DescriptionClient`]
//! trait, a Gemini implementation, a deterministic mock, and the curator
//! wrapper that turns any failure into a fixed localized fallback line so
//! callers never deal with an error.

pub mod client;
pub mod curator;
pub mod error;
pub mod gemini;
pub mod mock;

mod http_client;

pub use client::DescriptionClient;
pub use error::{AiError, Result};
pub use gemini::GeminiClient;
pub use mock::MockDescriptionClient;

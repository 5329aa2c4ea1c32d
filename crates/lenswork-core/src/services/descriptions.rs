//! Description sessions for the photo detail view.
//!
//! The fetch itself never fails (the curator guarantees a fallback string),
//! but it is asynchronous: a response can arrive after the detail view that
//! asked for it has moved on to another photo. Each view takes a ticket when
//! it opens; a response is only committed while its ticket is still the
//! current generation, so stale responses are discarded instead of landing
//! on unrelated state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lenswork_ai::{DescriptionClient, curator};

use crate::models::Language;

/// Proof of which detail view a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionTicket(u64);

pub struct DescriptionService {
    client: Arc<dyn DescriptionClient>,
    generation: AtomicU64,
}

impl DescriptionService {
    pub fn new(client: Arc<dyn DescriptionClient>) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
        }
    }

    /// Open a new description session, invalidating any in-flight fetches.
    pub fn begin(&self) -> DescriptionTicket {
        DescriptionTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a ticket still belongs to the latest session.
    pub fn is_current(&self, ticket: DescriptionTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Fetch the curator description. Never fails: provider errors resolve to
    /// a fixed fallback line in the requested language.
    pub async fn describe(&self, title: &str, location: &str, language: Language) -> String {
        curator::artistic_description(self.client.as_ref(), title, location, language.as_str())
            .await
    }

    /// Commit gate: hand the text back only while the originating view is
    /// still the current one.
    pub fn accept(&self, ticket: DescriptionTicket, text: String) -> Option<String> {
        self.is_current(ticket).then_some(text)
    }
}

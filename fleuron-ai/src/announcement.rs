use crate::client::CompletionClient;
use crate::prompts::build_announcement_prompt;
use crate::AiError;
use fleuron_shared::Order;
use std::sync::Arc;

/// Produces review-ready announcement text for an order. Fallible and
/// best-effort: callers treat any error as recoverable.
#[derive(Clone)]
pub struct AnnouncementWriter {
    client: Arc<dyn CompletionClient>,
}

impl AnnouncementWriter {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Returns the generated text verbatim; no post-validation of its
    /// structure.
    pub async fn generate(&self, order: &Order) -> Result<String, AiError> {
        let prompt = build_announcement_prompt(order);
        self.client.complete(&prompt).await
    }
}

use crate::client::CompletionClient;
use crate::prompts::build_order_parsing_prompt;
use crate::AiError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Structured order data extracted from free-text phone notes. Field names
/// match the intake form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOrder {
    pub customer_name: String,
    pub contact_info: String,
    pub concierge_hotel: String,
    pub product_description: String,
    pub quantity: i32,
    pub delivery_address: String,
    pub delivery_time: String,
    pub special_instructions: String,
    pub order_amount: f64,
}

#[derive(Clone)]
pub struct NotesParser {
    client: Arc<dyn CompletionClient>,
}

impl NotesParser {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn parse(&self, raw_notes: &str) -> Result<ParsedOrder, AiError> {
        let prompt = build_order_parsing_prompt(raw_notes);
        let text = self.client.complete(&prompt).await?;
        let json = extract_json_object(&text).ok_or(AiError::InvalidJson)?;
        serde_json::from_str(json).map_err(|_| AiError::InvalidJson)
    }
}

/// Models often wrap JSON in prose; take the outermost brace-delimited block.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedClient {
        reply: String,
    }

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn extracts_outermost_json_block() {
        let text = "Here you go:\n{\"a\": {\"b\": 1}}\nDone.";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[tokio::test]
    async fn parses_wrapped_json_reply() {
        let reply = r#"Sure! {"customerName":"Mrs. Chen","contactInfo":"212-555-0101","conciergeHotel":"James at The Plaza","productDescription":"White peonies","quantity":1,"deliveryAddress":"The Plaza","deliveryTime":"2026-02-14T14:00:00","specialInstructions":"","orderAmount":450}"#;
        let parser = NotesParser::new(Arc::new(CannedClient {
            reply: reply.to_string(),
        }));
        let parsed = parser.parse("plaza peonies").await.unwrap();
        assert_eq!(parsed.customer_name, "Mrs. Chen");
        assert_eq!(parsed.quantity, 1);
        assert_eq!(parsed.order_amount, 450.0);
    }

    #[tokio::test]
    async fn rejects_reply_without_json() {
        let parser = NotesParser::new(Arc::new(CannedClient {
            reply: "I could not find an order in those notes.".to_string(),
        }));
        let err = parser.parse("gibberish").await.unwrap_err();
        assert!(matches!(err, AiError::InvalidJson));
    }
}

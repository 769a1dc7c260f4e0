use crate::mailer::{EmailMessage, Mailer};
use crate::templates::{build_designer_html, build_receptionist_html};
use crate::NotifyError;
use fleuron_shared::Order;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    pub from: String,
    /// Empty list disables designer notifications entirely.
    #[serde(default)]
    pub designer_emails: Vec<String>,
    /// Unset disables receptionist notifications entirely.
    #[serde(default)]
    pub receptionist_email: Option<String>,
}

/// Renders and sends role-targeted order notifications. Missing recipient
/// configuration is a silent no-op, not an error.
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    config: NotifyConfig,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, config: NotifyConfig) -> Self {
        Self { mailer, config }
    }

    pub async fn notify_designers(&self, order: &Order) -> Result<(), NotifyError> {
        let to: Vec<String> = self
            .config
            .designer_emails
            .iter()
            .filter(|e| !e.trim().is_empty())
            .cloned()
            .collect();
        if to.is_empty() {
            return Ok(());
        }

        let product: String = order.product_description.chars().take(50).collect();
        let message = EmailMessage {
            from: self.config.from.clone(),
            to,
            subject: format!("New Order: {} — {}", order.customer_name, product),
            html: build_designer_html(order),
        };
        self.mailer.send(&message).await
    }

    pub async fn notify_receptionist(&self, order: &Order) -> Result<(), NotifyError> {
        let Some(email) = self.config.receptionist_email.clone() else {
            return Ok(());
        };

        let message = EmailMessage {
            from: self.config.from.clone(),
            to: vec![email],
            subject: format!(
                "Payment Received — {} — Ready for Announcement",
                order.customer_name
            ),
            html: build_receptionist_html(order),
        };
        self.mailer.send(&message).await
    }
}

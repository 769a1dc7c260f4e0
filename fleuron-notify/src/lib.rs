pub mod mailer;
pub mod notifier;
pub mod templates;

pub use mailer::{EmailMessage, Mailer, ResendMailer};
pub use notifier::{Notifier, NotifyConfig};

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email delivery failed: {0}")]
    Transport(String),
}

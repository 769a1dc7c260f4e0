use crate::policy;
use fleuron_ai::AnnouncementWriter;
use fleuron_core::validation::finalize_draft;
use fleuron_core::OrderStore;
use fleuron_notify::Notifier;
use fleuron_shared::{Order, OrderDraft, OrderPatch, OrderStatus, Role};
use std::sync::Arc;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("Order not found")]
    NotFound(i64),

    #[error("Transition not allowed for your role")]
    NotAllowed {
        role: Role,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("storage failure: {0}")]
    Store(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CreateOrderError {
    #[error("order payload failed validation")]
    Invalid(Vec<String>),

    #[error("storage failure: {0}")]
    Store(String),
}

/// Orchestrates the order lifecycle: gates each requested status change by
/// role policy, applies the change, and triggers the side effects that hang
/// off specific transitions.
///
/// The load-check-update sequence is not atomic; concurrent transitions on
/// the same order race and the last write wins.
pub struct TransitionEngine {
    store: Arc<dyn OrderStore>,
    announcer: AnnouncementWriter,
    notifier: Notifier,
}

impl TransitionEngine {
    pub fn new(store: Arc<dyn OrderStore>, announcer: AnnouncementWriter, notifier: Notifier) -> Self {
        Self {
            store,
            announcer,
            notifier,
        }
    }

    /// Validates and persists a new order in SUBMITTED status, then notifies
    /// designers without awaiting the outcome.
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, CreateOrderError> {
        let fields = finalize_draft(draft).map_err(CreateOrderError::Invalid)?;

        let order = self
            .store
            .create(&fields)
            .await
            .map_err(|e| CreateOrderError::Store(e.to_string()))?;

        let notifier = self.notifier.clone();
        let created = order.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify_designers(&created).await {
                error!(order_id = created.id, "designer notification failed: {e}");
            }
        });

        Ok(order)
    }

    /// Moves an order to `target` on behalf of `role`.
    ///
    /// The payment-received transition additionally attempts announcement
    /// generation before the write (best-effort, the transition proceeds
    /// without text on failure) and notifies the receptionist after it
    /// (fire-and-forget).
    pub async fn transition_status(
        &self,
        order_id: i64,
        target: OrderStatus,
        role: Role,
        driver_name: Option<String>,
    ) -> Result<(), TransitionError> {
        let order = self
            .store
            .find_by_id(order_id)
            .await
            .map_err(|e| TransitionError::Store(e.to_string()))?
            .ok_or(TransitionError::NotFound(order_id))?;

        // The authorization gate. Enforced here regardless of what the
        // caller's UI offered.
        if !policy::is_transition_allowed(role, order.status, target) {
            return Err(TransitionError::NotAllowed {
                role,
                from: order.status,
                to: target,
            });
        }

        let mut patch = OrderPatch {
            status: target,
            // Accepted whenever supplied, not only on dispatch.
            driver_name: driver_name.filter(|n| !n.trim().is_empty()),
            announcement_text: None,
        };

        if target == OrderStatus::PaymentReceived {
            match self.announcer.generate(&order).await {
                Ok(text) => patch.announcement_text = Some(text),
                Err(e) => {
                    warn!(order_id, "announcement generation failed: {e}");
                }
            }
        }

        let updated = self
            .store
            .update(order_id, &patch)
            .await
            .map_err(|e| TransitionError::Store(e.to_string()))?;

        if target == OrderStatus::PaymentReceived {
            let notifier = self.notifier.clone();
            tokio::spawn(async move {
                if let Err(e) = notifier.notify_receptionist(&updated).await {
                    error!(order_id = updated.id, "receptionist notification failed: {e}");
                }
            });
        }

        Ok(())
    }
}

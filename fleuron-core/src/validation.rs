use fleuron_shared::{NewOrder, OrderDraft};
use rust_decimal::Decimal;

/// Outcome of checking a creation payload. Violations are collected in rule
/// order, never short-circuited, so the caller can surface all of them.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Checks required-field and numeric-range rules. Pure; callable without
/// any storage.
pub fn validate_draft(draft: &OrderDraft) -> ValidationReport {
    let mut errors = Vec::new();

    if blank(&draft.customer_name) {
        errors.push("Customer name is required".to_string());
    }
    if blank(&draft.contact_info) {
        errors.push("Contact info is required".to_string());
    }
    if blank(&draft.concierge_hotel) {
        errors.push("Concierge/hotel is required".to_string());
    }
    if blank(&draft.product_description) {
        errors.push("Product description is required".to_string());
    }
    if blank(&draft.delivery_address) {
        errors.push("Delivery address is required".to_string());
    }
    if draft.delivery_time.is_none() {
        errors.push("Delivery time is required".to_string());
    }
    if draft.order_amount.map_or(true, |a| a <= Decimal::ZERO) {
        errors.push("Order amount must be greater than zero".to_string());
    }
    if draft.quantity.map_or(true, |q| q < 1) {
        errors.push("Quantity must be at least 1".to_string());
    }

    ValidationReport { errors }
}

/// Validates a draft and converts it into persistable fields. Returns the
/// collected error list when any rule fails.
pub fn finalize_draft(draft: OrderDraft) -> Result<NewOrder, Vec<String>> {
    let report = validate_draft(&draft);
    if !report.success() {
        return Err(report.errors);
    }

    // Validation guarantees these are present; the match keeps that
    // guarantee explicit instead of unwrapping.
    match (
        draft.customer_name,
        draft.contact_info,
        draft.concierge_hotel,
        draft.product_description,
        draft.quantity,
        draft.delivery_address,
        draft.delivery_time,
        draft.order_amount,
    ) {
        (
            Some(customer_name),
            Some(contact_info),
            Some(concierge_hotel),
            Some(product_description),
            Some(quantity),
            Some(delivery_address),
            Some(delivery_time),
            Some(order_amount),
        ) => Ok(NewOrder {
            customer_name,
            contact_info,
            concierge_hotel,
            product_description,
            quantity,
            delivery_address,
            delivery_time,
            special_instructions: draft.special_instructions.filter(|s| !s.trim().is_empty()),
            order_amount,
            raw_notes: draft.raw_notes.filter(|s| !s.trim().is_empty()),
        }),
        _ => Err(vec!["Order payload is incomplete".to_string()]),
    }
}

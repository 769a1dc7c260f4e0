use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status in the fulfillment pipeline. Statuses only ever advance
/// forward along this sequence; the role policy decides who may move them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Submitted,
    InPreparation,
    PaymentReceived,
    Announced,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Submitted,
        OrderStatus::InPreparation,
        OrderStatus::PaymentReceived,
        OrderStatus::Announced,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Wire representation, matching the stored literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Submitted => "SUBMITTED",
            OrderStatus::InPreparation => "IN_PREPARATION",
            OrderStatus::PaymentReceived => "PAYMENT_RECEIVED",
            OrderStatus::Announced => "ANNOUNCED",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
        }
    }

    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s {
            "SUBMITTED" => Some(OrderStatus::Submitted),
            "IN_PREPARATION" => Some(OrderStatus::InPreparation),
            "PAYMENT_RECEIVED" => Some(OrderStatus::PaymentReceived),
            "ANNOUNCED" => Some(OrderStatus::Announced),
            "OUT_FOR_DELIVERY" => Some(OrderStatus::OutForDelivery),
            "DELIVERED" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    /// Human-readable label for dashboards and email bodies.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Submitted => "Submitted",
            OrderStatus::InPreparation => "In Preparation",
            OrderStatus::PaymentReceived => "Payment Received",
            OrderStatus::Announced => "Announced",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Canonical forward successor. DELIVERED is terminal.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Submitted => Some(OrderStatus::InPreparation),
            OrderStatus::InPreparation => Some(OrderStatus::PaymentReceived),
            OrderStatus::PaymentReceived => Some(OrderStatus::Announced),
            OrderStatus::Announced => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The central entity: one same-day floral order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub contact_info: String,
    pub concierge_hotel: String,
    pub product_description: String,
    pub quantity: i32,
    pub delivery_address: String,
    pub delivery_time: DateTime<Utc>,
    pub special_instructions: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_amount: Decimal,
    pub raw_notes: Option<String>,
    pub status: OrderStatus,
    /// Set once a delivery-dispatch transition supplies it.
    pub driver_name: Option<String>,
    /// Reserved for delivery-confirmation photo uploads.
    pub delivery_photo: Option<String>,
    /// AI-generated announcement, set by the payment-received transition.
    /// Stays absent when generation failed.
    pub announcement_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated creation payload. Every field is optional so the validator
/// can collect all violations instead of failing at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: Option<String>,
    pub contact_info: Option<String>,
    pub concierge_hotel: Option<String>,
    pub product_description: Option<String>,
    pub quantity: Option<i32>,
    pub delivery_address: Option<String>,
    pub delivery_time: Option<DateTime<Utc>>,
    pub special_instructions: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub order_amount: Option<Decimal>,
    pub raw_notes: Option<String>,
}

/// Validated creation fields. Status is forced to SUBMITTED by the store;
/// it is deliberately not part of this struct.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub contact_info: String,
    pub concierge_hotel: String,
    pub product_description: String,
    pub quantity: i32,
    pub delivery_address: String,
    pub delivery_time: DateTime<Utc>,
    pub special_instructions: Option<String>,
    pub order_amount: Decimal,
    pub raw_notes: Option<String>,
}

/// Partial update applied by the transition engine in a single write.
#[derive(Debug, Clone)]
pub struct OrderPatch {
    pub status: OrderStatus,
    pub driver_name: Option<String>,
    pub announcement_text: Option<String>,
}

impl OrderPatch {
    pub fn status_only(status: OrderStatus) -> Self {
        Self {
            status,
            driver_name: None,
            announcement_text: None,
        }
    }
}

/// Listing filter: creation-date window plus optional status.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub status: Option<OrderStatus>,
}

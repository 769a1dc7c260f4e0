use fleuron_shared::Order;

fn row(label: &str, value: &str) -> String {
    format!(
        r#"<tr><td style="padding: 8px 0; color: #6a4d40; font-weight: bold;">{label}</td><td>{value}</td></tr>"#
    )
}

fn format_time(order: &Order) -> String {
    order.delivery_time.format("%Y-%m-%d %H:%M %Z").to_string()
}

/// Fixed-structure body for the new-order notification sent to designers.
pub fn build_designer_html(order: &Order) -> String {
    let mut rows = String::new();
    rows.push_str(&row("Hotel/Concierge", &order.concierge_hotel));
    rows.push_str(&row("Product", &order.product_description));
    rows.push_str(&row("Quantity", &order.quantity.to_string()));
    rows.push_str(&row("Deliver To", &order.delivery_address));
    rows.push_str(&row("Delivery Time", &format_time(order)));
    if let Some(notes) = &order.special_instructions {
        rows.push_str(&format!(
            r#"<tr><td style="padding: 8px 0; color: #6a4d40; font-weight: bold;">Special Instructions</td><td style="color: #9c7258; font-style: italic;">{notes}</td></tr>"#
        ));
    }
    format!(
        r#"<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; padding: 24px;">
  <h1 style="color: #825d4a; border-bottom: 2px solid #e0d5c6; padding-bottom: 12px;">
    New Order &mdash; {customer}
  </h1>
  <table style="width: 100%; border-collapse: collapse;">{rows}</table>
</div>"#,
        customer = order.customer_name,
    )
}

/// Body for the payment-received notification sent to the receptionist,
/// with amount and, when present, the announcement text for review.
pub fn build_receptionist_html(order: &Order) -> String {
    let mut rows = String::new();
    rows.push_str(&row("Customer", &order.customer_name));
    rows.push_str(&row("Hotel/Concierge", &order.concierge_hotel));
    rows.push_str(&row("Amount", &format!("${}", order.order_amount)));
    rows.push_str(&row(
        "Delivery",
        &format!("{} by {}", order.delivery_address, format_time(order)),
    ));
    let announcement = match &order.announcement_text {
        Some(text) => format!(
            r#"
  <div style="margin-top: 24px; padding: 16px; background: #faf8f5; border-left: 4px solid #a98464;">
    <h3 style="color: #574136; margin-top: 0;">AI-Generated Announcement (review before sending)</h3>
    <pre style="white-space: pre-wrap; font-family: Georgia, serif; color: #6a4d40;">{text}</pre>
  </div>"#
        ),
        None => String::new(),
    };
    format!(
        r#"<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; padding: 24px;">
  <h1 style="color: #825d4a; border-bottom: 2px solid #e0d5c6; padding-bottom: 12px;">
    Payment Received &mdash; Ready for Announcement
  </h1>
  <table style="width: 100%; border-collapse: collapse;">{rows}</table>{announcement}
</div>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fleuron_shared::OrderStatus;
    use rust_decimal::Decimal;

    fn sample_order() -> Order {
        Order {
            id: 7,
            customer_name: "Mr. & Mrs. Park".to_string(),
            contact_info: "646-555-0202".to_string(),
            concierge_hotel: "Sofia at The Peninsula".to_string(),
            product_description: "6 low arrangements for dinner table".to_string(),
            quantity: 6,
            delivery_address: "The Peninsula, Rooftop Dining".to_string(),
            delivery_time: Utc.with_ymd_and_hms(2026, 2, 14, 17, 30, 0).unwrap(),
            special_instructions: None,
            order_amount: Decimal::from(1800),
            raw_notes: None,
            status: OrderStatus::PaymentReceived,
            driver_name: None,
            delivery_photo: None,
            announcement_text: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn designer_body_carries_order_fields() {
        let html = build_designer_html(&sample_order());
        assert!(html.contains("Mr. &amp; Mrs. Park") || html.contains("Mr. & Mrs. Park"));
        assert!(html.contains("Sofia at The Peninsula"));
        assert!(html.contains("6 low arrangements"));
        assert!(html.contains("Rooftop Dining"));
        assert!(!html.contains("Special Instructions"));
    }

    #[test]
    fn designer_body_includes_special_instructions_when_present() {
        let mut order = sample_order();
        order.special_instructions = Some("No strong scents".to_string());
        let html = build_designer_html(&order);
        assert!(html.contains("Special Instructions"));
        assert!(html.contains("No strong scents"));
    }

    #[test]
    fn receptionist_body_carries_amount_and_announcement() {
        let mut order = sample_order();
        order.announcement_text = Some("ORDER CONFIRMATION\n...".to_string());
        let html = build_receptionist_html(&order);
        assert!(html.contains("$1800"));
        assert!(html.contains("AI-Generated Announcement"));
        assert!(html.contains("ORDER CONFIRMATION"));
    }

    #[test]
    fn receptionist_body_omits_announcement_block_when_absent() {
        let html = build_receptionist_html(&sample_order());
        assert!(!html.contains("AI-Generated Announcement"));
    }
}

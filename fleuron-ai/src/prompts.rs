use fleuron_shared::Order;

/// Instruction for extracting structured order data from phone intake notes.
/// The model must return only a JSON object matching the schema.
pub fn build_order_parsing_prompt(raw_notes: &str) -> String {
    format!(
        r#"Extract structured order data from these phone notes. Return ONLY valid JSON matching this schema:

{{
  "customerName": "string",
  "contactInfo": "string (phone or email, use empty string if not mentioned)",
  "conciergeHotel": "string (concierge name and hotel)",
  "productDescription": "string (detailed floral description)",
  "quantity": number,
  "deliveryAddress": "string (full address)",
  "deliveryTime": "string (ISO 8601 datetime, assume today if no date given)",
  "specialInstructions": "string (any special notes, empty string if none)",
  "orderAmount": number (USD, 0 if not mentioned)
}}

Phone notes:
{raw_notes}"#
    )
}

/// Instruction for the internal finance/delivery-coordination announcement,
/// generated once payment is confirmed.
pub fn build_announcement_prompt(order: &Order) -> String {
    let special = match &order.special_instructions {
        Some(notes) => format!("\n- Special instructions: {notes}"),
        None => String::new(),
    };
    format!(
        r#"Generate a professional hard announcement for LUXLUF Event Flowers NYC. This is an internal record used for finance and delivery coordination.

Order details:
- Customer: {customer}
- Requesting concierge/hotel: {hotel}
- Product: {product}
- Quantity: {quantity}
- Delivery to: {address}
- Delivery time: {time}
- Amount: ${amount}{special}

Format the announcement with clear sections: ORDER CONFIRMATION, DELIVERY DETAILS, PRODUCT SPECIFICATIONS, and PAYMENT. Keep it concise and professional."#,
        customer = order.customer_name,
        hotel = order.concierge_hotel,
        product = order.product_description,
        quantity = order.quantity,
        address = order.delivery_address,
        time = order.delivery_time.format("%Y-%m-%d %H:%M %Z"),
        amount = order.order_amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sample_order() -> Order {
        Order {
            id: 1,
            customer_name: "Mrs. Chen".to_string(),
            contact_info: "212-555-0101".to_string(),
            concierge_hotel: "James at The Plaza".to_string(),
            product_description: "White peonies".to_string(),
            quantity: 2,
            delivery_address: "The Plaza, Suite 1201".to_string(),
            delivery_time: Utc.with_ymd_and_hms(2026, 2, 14, 14, 0, 0).unwrap(),
            special_instructions: Some("Include handwritten card.".to_string()),
            order_amount: Decimal::from(450),
            raw_notes: None,
            status: fleuron_shared::OrderStatus::PaymentReceived,
            driver_name: None,
            delivery_photo: None,
            announcement_text: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn announcement_prompt_embeds_order_fields() {
        let prompt = build_announcement_prompt(&sample_order());
        assert!(prompt.contains("Mrs. Chen"));
        assert!(prompt.contains("James at The Plaza"));
        assert!(prompt.contains("White peonies"));
        assert!(prompt.contains("Quantity: 2"));
        assert!(prompt.contains("$450"));
        assert!(prompt.contains("Special instructions: Include handwritten card."));
        assert!(prompt.contains("ORDER CONFIRMATION"));
    }

    #[test]
    fn announcement_prompt_omits_absent_special_instructions() {
        let mut order = sample_order();
        order.special_instructions = None;
        let prompt = build_announcement_prompt(&order);
        assert!(!prompt.contains("Special instructions"));
    }

    #[test]
    fn parsing_prompt_embeds_notes_and_schema() {
        let prompt = build_order_parsing_prompt("Plaza, 6 arrangements by 5pm");
        assert!(prompt.contains("Plaza, 6 arrangements by 5pm"));
        assert!(prompt.contains("\"customerName\""));
        assert!(prompt.contains("\"orderAmount\""));
    }
}

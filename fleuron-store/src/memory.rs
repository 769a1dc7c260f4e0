use async_trait::async_trait;
use chrono::Utc;
use fleuron_core::OrderStore;
use fleuron_shared::{NewOrder, Order, OrderFilter, OrderPatch, OrderStatus};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory `OrderStore` with sequential ids. Backs the engine and API
/// tests and local runs without a database.
pub struct MemoryOrderStore {
    inner: Mutex<Inner>,
}

struct Inner {
    orders: HashMap<i64, Order>,
    next_id: i64,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                orders: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.inner.lock().await.orders.get(&id).cloned())
    }

    async fn create(
        &self,
        fields: &NewOrder,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let order = Order {
            id,
            customer_name: fields.customer_name.clone(),
            contact_info: fields.contact_info.clone(),
            concierge_hotel: fields.concierge_hotel.clone(),
            product_description: fields.product_description.clone(),
            quantity: fields.quantity,
            delivery_address: fields.delivery_address.clone(),
            delivery_time: fields.delivery_time,
            special_instructions: fields.special_instructions.clone(),
            order_amount: fields.order_amount,
            raw_notes: fields.raw_notes.clone(),
            status: OrderStatus::Submitted,
            driver_name: None,
            delivery_photo: None,
            announcement_text: None,
            created_at: now,
            updated_at: now,
        };
        inner.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn update(
        &self,
        id: i64,
        patch: &OrderPatch,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().await;
        let order = inner
            .orders
            .get_mut(&id)
            .ok_or_else(|| format!("order {id} not found"))?;

        order.status = patch.status;
        if let Some(driver) = &patch.driver_name {
            order.driver_name = Some(driver.clone());
        }
        if let Some(text) = &patch.announcement_text {
            order.announcement_text = Some(text.clone());
        }
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn find_many(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.lock().await;
        let mut orders: Vec<Order> = inner
            .orders
            .values()
            .filter(|o| filter.created_after.map_or(true, |t| o.created_at >= t))
            .filter(|o| filter.created_before.map_or(true, |t| o.created_at < t))
            .filter(|o| filter.status.map_or(true, |s| o.status == s))
            .cloned()
            .collect();
        // Newest first; id breaks ties for orders created in the same instant.
        orders.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    fn fields(name: &str) -> NewOrder {
        NewOrder {
            customer_name: name.to_string(),
            contact_info: "212-555-0101".to_string(),
            concierge_hotel: "James at The Plaza".to_string(),
            product_description: "White peonies".to_string(),
            quantity: 1,
            delivery_address: "The Plaza".to_string(),
            delivery_time: Utc.with_ymd_and_hms(2026, 2, 14, 14, 0, 0).unwrap(),
            special_instructions: None,
            order_amount: Decimal::from(450),
            raw_notes: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_submitted_status() {
        let store = MemoryOrderStore::new();
        let first = store.create(&fields("A")).await.unwrap();
        let second = store.create(&fields("B")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, OrderStatus::Submitted);
    }

    #[tokio::test]
    async fn update_applies_patch_and_keeps_existing_optionals() {
        let store = MemoryOrderStore::new();
        let order = store.create(&fields("A")).await.unwrap();

        store
            .update(
                order.id,
                &OrderPatch {
                    status: OrderStatus::PaymentReceived,
                    driver_name: None,
                    announcement_text: Some("text".to_string()),
                },
            )
            .await
            .unwrap();

        // A later status-only patch must not clear the announcement.
        let updated = store
            .update(order.id, &OrderPatch::status_only(OrderStatus::Announced))
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Announced);
        assert_eq!(updated.announcement_text.as_deref(), Some("text"));
    }

    #[tokio::test]
    async fn find_many_filters_by_status_and_window() {
        let store = MemoryOrderStore::new();
        let a = store.create(&fields("A")).await.unwrap();
        let _b = store.create(&fields("B")).await.unwrap();
        store
            .update(a.id, &OrderPatch::status_only(OrderStatus::InPreparation))
            .await
            .unwrap();

        let in_prep = store
            .find_many(&OrderFilter {
                status: Some(OrderStatus::InPreparation),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(in_prep.len(), 1);
        assert_eq!(in_prep[0].id, a.id);

        let tomorrow = Utc::now() + Duration::days(1);
        let none = store
            .find_many(&OrderFilter {
                created_after: Some(tomorrow),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn find_many_returns_newest_first() {
        let store = MemoryOrderStore::new();
        store.create(&fields("A")).await.unwrap();
        store.create(&fields("B")).await.unwrap();
        store.create(&fields("C")).await.unwrap();

        let all = store.find_many(&OrderFilter::default()).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fleuron_core::OrderStore;
use fleuron_shared::{NewOrder, Order, OrderFilter, OrderPatch, OrderStatus};
use rust_decimal::Decimal;
use sqlx::PgPool;

const ORDER_COLUMNS: &str = "id, customer_name, contact_info, concierge_hotel, product_description, \
     quantity, delivery_address, delivery_time, special_instructions, order_amount, raw_notes, \
     status, driver_name, delivery_photo, announcement_text, created_at, updated_at";

pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_name: String,
    contact_info: String,
    concierge_hotel: String,
    product_description: String,
    quantity: i32,
    delivery_address: String,
    delivery_time: DateTime<Utc>,
    special_instructions: Option<String>,
    order_amount: Decimal,
    raw_notes: Option<String>,
    status: String,
    driver_name: Option<String>,
    delivery_photo: Option<String>,
    announcement_text: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let status = OrderStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown status value in store: {}", self.status))?;
        Ok(Order {
            id: self.id,
            customer_name: self.customer_name,
            contact_info: self.contact_info,
            concierge_hotel: self.concierge_hotel,
            product_description: self.product_description,
            quantity: self.quantity,
            delivery_address: self.delivery_address,
            delivery_time: self.delivery_time,
            special_instructions: self.special_instructions,
            order_amount: self.order_amount,
            raw_notes: self.raw_notes,
            status,
            driver_name: self.driver_name,
            delivery_photo: self.delivery_photo,
            announcement_text: self.announcement_text,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(OrderRow::into_order).transpose()
    }

    async fn create(
        &self,
        fields: &NewOrder,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "INSERT INTO orders (customer_name, contact_info, concierge_hotel, product_description, \
             quantity, delivery_address, delivery_time, special_instructions, order_amount, raw_notes, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'SUBMITTED') \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(&fields.customer_name)
        .bind(&fields.contact_info)
        .bind(&fields.concierge_hotel)
        .bind(&fields.product_description)
        .bind(fields.quantity)
        .bind(&fields.delivery_address)
        .bind(fields.delivery_time)
        .bind(&fields.special_instructions)
        .bind(fields.order_amount)
        .bind(&fields.raw_notes)
        .fetch_one(&self.pool)
        .await?;

        row.into_order()
    }

    async fn update(
        &self,
        id: i64,
        patch: &OrderPatch,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "UPDATE orders SET status = $1, \
             driver_name = COALESCE($2, driver_name), \
             announcement_text = COALESCE($3, announcement_text), \
             updated_at = NOW() \
             WHERE id = $4 \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(patch.status.as_str())
        .bind(&patch.driver_name)
        .bind(&patch.announcement_text)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        row.into_order()
    }

    async fn find_many(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders \
             WHERE ($1::timestamptz IS NULL OR created_at >= $1) \
             AND ($2::timestamptz IS NULL OR created_at < $2) \
             AND ($3::text IS NULL OR status = $3) \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(filter.created_after)
        .bind(filter.created_before)
        .bind(filter.status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }
}

use async_trait::async_trait;
use fleuron_shared::{NewOrder, Order, OrderFilter, OrderPatch};

/// Repository trait for order persistence. The transition engine only
/// touches orders through this boundary.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    /// Persists a new record. The store assigns the id and timestamps and
    /// forces status to SUBMITTED regardless of caller input.
    async fn create(
        &self,
        fields: &NewOrder,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>>;

    /// Applies the patch in a single update and returns the updated record.
    async fn update(
        &self,
        id: i64,
        patch: &OrderPatch,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>>;

    /// Lists orders matching the filter, newest first.
    async fn find_many(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;
}

pub mod order;
pub mod role;

pub use order::{NewOrder, Order, OrderDraft, OrderFilter, OrderPatch, OrderStatus};
pub use role::Role;

pub mod engine;
pub mod policy;

pub use engine::{CreateOrderError, TransitionEngine, TransitionError};
pub use policy::{allowed_next_statuses, can_create_order, is_transition_allowed};

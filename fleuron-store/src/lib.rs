pub mod app_config;
pub mod database;
pub mod memory;
pub mod pg;

pub use app_config::Config;
pub use memory::MemoryOrderStore;
pub use pg::PgOrderStore;

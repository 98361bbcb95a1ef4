//! 基础设施：配置、日志与存储实现

pub mod config;
pub mod database;
pub mod logger;
pub mod memory;

pub use config::{Config, ConfigError, StoreBackend};
pub use database::MongoUserStore;
pub use logger::Logger;
pub use memory::MemoryUserStore;

//! 运行配置，全部来自环境变量

use std::{net::SocketAddr, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("环境变量 {name} 的值无效: {value}")]
    Invalid { name: &'static str, value: String },
}

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    pub request_timeout: Duration,
    pub backend: StoreBackend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database: "test_db".to_string(),
            collection: "users".to_string(),
            request_timeout: Duration::from_secs(10),
            backend: StoreBackend::MongoDb,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 便于测试注入的读取方式
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => parse_value("BIND_ADDR", value)?,
            None => defaults.bind_addr,
        };
        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_value("REQUEST_TIMEOUT_SECS", value)?),
            None => defaults.request_timeout,
        };
        let backend = match lookup("STORE_BACKEND") {
            Some(value) => parse_value("STORE_BACKEND", value)?,
            None => defaults.backend,
        };

        Ok(Self {
            bind_addr,
            mongodb_uri: lookup("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database: lookup("MONGODB_DATABASE").unwrap_or(defaults.database),
            collection: lookup("MONGODB_COLLECTION").unwrap_or(defaults.collection),
            request_timeout,
            backend,
        })
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

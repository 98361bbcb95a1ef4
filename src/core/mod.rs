//! 核心模块：错误、提取器、分页与中间件

pub mod error;
pub mod extract;
pub mod identifier;
pub mod middleware;
pub mod pagination;

pub use error::{ApiError, ErrorResponse, StoreError};
pub use extract::ValidatedJson;
pub use identifier::{format_object_id, parse_object_id, UserId};
pub use pagination::{ListQuery, Pagination};

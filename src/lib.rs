//! # 用户服务
//!
//! 基于 Axum 和 MongoDB 的用户 CRUD 服务：
//! - `POST /users`、`GET /users?page=&limit=`
//! - `GET /users/:id`、`PUT /users/:id`、`DELETE /users/:id`
//!
//! 存储句柄通过 [`app::AppState`] 注入，不使用全局状态。

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, AppState};
pub use crate::core::ApiError;

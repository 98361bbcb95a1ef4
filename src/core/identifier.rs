//! 用户标识符编解码
//!
//! 外部标识符是 24 位十六进制字符串，内部使用 MongoDB 的 `ObjectId`。

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use mongodb::bson::oid::ObjectId;

use super::error::ApiError;

/// 外部标识符长度
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// 将 24 位十六进制字符串解析为 `ObjectId`
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    if raw.len() != OBJECT_ID_HEX_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ApiError::InvalidIdentifier(raw.to_string()));
    }

    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidIdentifier(raw.to_string()))
}

/// 小写十六进制形式
pub fn format_object_id(id: &ObjectId) -> String {
    id.to_hex()
}

/// 路径参数 `:id` 的提取器，在读取请求体之前完成校验
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub ObjectId);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidIdentifier(e.body_text()))?;

        parse_object_id(&raw).map(UserId)
    }
}

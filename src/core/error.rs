//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("数据库操作失败: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("插入结果中缺少 ObjectId")]
    MissingInsertedId,
}

/// 处理器边界上的错误类型
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("无效的用户标识符: {0}")]
    InvalidIdentifier(String),
    #[error("请求体格式错误: {0}")]
    MalformedPayload(String),
    #[error("用户 {0} 不存在")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidIdentifier(_) | ApiError::MalformedPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, user_message) = match &self {
            ApiError::InvalidIdentifier(_) => ("INVALID_IDENTIFIER", self.to_string()),
            ApiError::MalformedPayload(_) => ("MALFORMED_PAYLOAD", self.to_string()),
            ApiError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            ApiError::Store(e) => {
                // 驱动错误只写日志，不返回给客户端
                error!("Store error: {}", e);
                ("INTERNAL_SERVER_ERROR", "服务器内部错误".to_string())
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("字段 {} 校验失败", field))
                })
            })
            .collect();
        messages.sort();

        ApiError::MalformedPayload(messages.join(", "))
    }
}

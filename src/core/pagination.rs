//! 分页参数处理

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
/// 单页上限，避免无界结果集
pub const MAX_LIMIT: i64 = 100;

/// 列表查询参数，保持原始字符串以便对非数字输入回退到默认值
///
/// 重复的键只取第一个值，无法解析的查询串视为空，因此提取永不失败。
#[derive(Debug, Default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        Ok(ListQuery::from_pairs(pairs))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: i64,
}

impl Pagination {
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|limit| *limit >= 1)
            .map(|limit| limit.min(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT);

        // 页码从 1 开始，小于 1 时 skip 为 0
        let page = page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE as i64);
        let skip = page.saturating_sub(1).max(0).saturating_mul(limit) as u64;

        Self { skip, limit }
    }
}

impl From<&ListQuery> for Pagination {
    fn from(query: &ListQuery) -> Self {
        Self::from_query(query.page.as_deref(), query.limit.as_deref())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from_query(None, None)
    }
}

//! 用户存储抽象

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::model::{NewUser, UserChanges, UserRecord};
use crate::core::Pagination;

pub use crate::core::StoreError;

/// 单个集合上的存储句柄，启动时创建一次，所有请求共享
///
/// 每个方法对应一次存储往返，不做重试。
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    /// 按 `_id` 升序返回一页
    async fn list(&self, page: Pagination) -> Result<Vec<UserRecord>, StoreError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<UserRecord>, StoreError>;

    /// 返回更新后的文档；文档不存在时返回 `None`
    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, StoreError>;

    /// 是否删除了文档
    async fn delete_by_id(&self, id: ObjectId) -> Result<bool, StoreError>;
}

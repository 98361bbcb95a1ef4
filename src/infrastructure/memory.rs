//! 进程内用户存储，用于本地运行和测试

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::app::users::{NewUser, StoreError, UserChanges, UserRecord, UserStore};
use crate::core::Pagination;

/// 以 `ObjectId` 排序，与 MongoDB 存储的列表顺序一致
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<ObjectId, UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已知 id 写入一条记录，已存在时覆盖
    pub async fn seed(&self, record: UserRecord) {
        self.users.write().await.insert(record.id, record);
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = UserRecord {
            id: ObjectId::new(),
            name: user.name,
            age: user.age,
        };
        self.users.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list(&self, page: Pagination) -> Result<Vec<UserRecord>, StoreError> {
        let users = self.users.read().await;
        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(0);

        Ok(users.values().skip(skip).take(limit).cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, StoreError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&id).map(|record| {
            changes.apply_to(record);
            record.clone()
        }))
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<bool, StoreError> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}

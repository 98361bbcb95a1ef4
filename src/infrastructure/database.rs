//! 数据库基础设施：MongoDB 用户集合

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{ClientOptions, ReturnDocument},
    Client, Collection, Database,
};
use tracing::info;

use crate::app::users::{NewUser, StoreError, UserChanges, UserRecord, UserStore};
use crate::core::Pagination;
use crate::infrastructure::config::Config;

const APP_NAME: &str = "user-service";

pub struct MongoUserStore {
    collection: Collection<UserRecord>,
}

impl MongoUserStore {
    /// 连接并确认服务器可用
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(config.request_timeout);

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);
        db.run_command(doc! { "ping": 1 }).await?;

        info!(
            "Connected to MongoDB database {} (collection {})",
            config.database, config.collection
        );

        Ok(Self::new(&db, &config.collection))
    }

    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }

    pub fn collection(&self) -> &Collection<UserRecord> {
        &self.collection
    }
}

fn set_document(changes: UserChanges) -> Document {
    let mut set = Document::new();
    if let Some(name) = changes.name {
        set.insert("name", name);
    }
    if let Some(age) = changes.age {
        set.insert("age", i64::from(age));
    }
    set
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let result = self
            .collection
            .clone_with_type::<NewUser>()
            .insert_one(&user)
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingInsertedId)?;

        Ok(UserRecord {
            id,
            name: user.name,
            age: user.age,
        })
    }

    async fn list(&self, page: Pagination) -> Result<Vec<UserRecord>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(page.skip)
            .limit(page.limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, StoreError> {
        // 空的 $set 会被服务器拒绝，退化为一次读取
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_document(changes) })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_set_document_only_has_present_fields() {
        let set = set_document(UserChanges {
            name: None,
            age: Some(3),
        });
        assert_eq!(set, doc! { "age": 3_i64 });

        let set = set_document(UserChanges {
            name: Some("aboba".into()),
            age: None,
        });
        assert_eq!(set.get("name"), Some(&Bson::String("aboba".into())));
        assert!(!set.contains_key("_id"));
    }
}

//! 用户数据模型

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::{format_object_id, ApiError};

pub const NAME_MAX_LEN: usize = 100;

/// 对外返回的用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: u32,
}

/// 集合中保存的文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub age: u32,
}

/// 待插入的文档，`_id` 由存储分配
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub age: u32,
}

/// 部分更新，`None` 表示保持不变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub age: Option<u32>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }

    pub fn apply_to(self, record: &mut UserRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(age) = self.age {
            record.age = age;
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: format_object_id(&record.id),
            name: record.name,
            age: record.age,
        }
    }
}

// 创建用户请求
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "用户名不能为空"))]
    pub name: String,
    pub age: u32,
}

// 更新用户请求
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "用户名不能为空"))]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

fn normalize_name(name: &str) -> Result<String, ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::MalformedPayload("用户名不能为空".to_string()));
    }
    // 长度按去除首尾空白后的字符数计算
    if trimmed.chars().count() > NAME_MAX_LEN {
        return Err(ApiError::MalformedPayload(format!(
            "用户名长度不能超过 {} 个字符",
            NAME_MAX_LEN
        )));
    }
    Ok(trimmed.to_string())
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> Result<NewUser, ApiError> {
        Ok(NewUser {
            name: normalize_name(&self.name)?,
            age: self.age,
        })
    }
}

impl UpdateUserRequest {
    pub fn into_changes(self) -> Result<UserChanges, ApiError> {
        Ok(UserChanges {
            name: self.name.as_deref().map(normalize_name).transpose()?,
            age: self.age,
        })
    }
}

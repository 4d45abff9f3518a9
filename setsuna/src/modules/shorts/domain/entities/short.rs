use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::{ShortId, UserId};

/// 短视频实体 - 聚合根
///
/// Short 是 Shorts 模块的聚合根，归属于单个用户。
/// 标签关联与举报记录分别由各自仓储维护。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Short {
    /// 短视频唯一标识
    id: ShortId,
    /// 所属用户
    user_id: UserId,
    /// 标题
    title: String,
    /// 描述（可选）
    description: Option<String>,
    /// 创建时间
    created_at: DateTime<Utc>,
    /// 更新时间
    updated_at: DateTime<Utc>,
}

impl Short {
    /// 创建新短视频
    pub fn new(user_id: UserId, title: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ShortId::new(),
            user_id,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters
    pub fn id(&self) -> ShortId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // 业务方法

    /// 更新标题
    pub fn update_title(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
        self.touch();
    }

    /// 更新描述
    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    /// 更新修改时间
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

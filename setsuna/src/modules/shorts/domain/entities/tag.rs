use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::TagId;

/// 标签实体
///
/// 自由文本标签，与短视频是多对多关系。标签文本在仓储范围内唯一，
/// 与短视频的关联关系由标签仓储维护。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// 标签唯一标识
    id: TagId,
    /// 标签文本
    text: String,
    /// 创建时间
    created_at: DateTime<Utc>,
}

impl Tag {
    /// 创建新标签
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TagId::new(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    // Getters
    pub fn id(&self) -> TagId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 重命名标签
    pub fn rename(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tag() {
        let tag = Tag::new("funny");
        assert_eq!(tag.text(), "funny");
    }

    #[test]
    fn test_rename_tag() {
        let mut tag = Tag::new("funny");
        let id = tag.id();

        tag.rename("hilarious");

        assert_eq!(tag.text(), "hilarious");
        // 重命名不改变标识
        assert_eq!(tag.id(), id);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 短视频唯一标识符
///
/// 值对象：通过值而非引用比较，不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(Uuid);

impl ShortId {
    /// 生成新的短视频 ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 从 UUID 创建
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 从字符串解析
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// 获取内部 UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ShortId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ShortId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ShortId> for Uuid {
    fn from(id: ShortId) -> Self {
        id.0
    }
}

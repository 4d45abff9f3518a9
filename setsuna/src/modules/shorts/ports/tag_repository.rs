use async_trait::async_trait;

use super::super::domain::{ShortId, Tag, TagId};
use super::short_repository::RepositoryError;

/// 标签仓储端口
///
/// 同时维护标签实体与 (short, tag) 多对多关联。标签文本在仓储
/// 范围内唯一；没有任何关联的标签允许存在。
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// 根据 ID 获取标签
    async fn get(&self, id: TagId) -> Result<Option<Tag>, RepositoryError>;

    /// 根据文本精确查找标签
    async fn find_by_text(&self, text: &str) -> Result<Option<Tag>, RepositoryError>;

    /// 获取所有标签
    async fn find_all(&self) -> Result<Vec<Tag>, RepositoryError>;

    /// 获取指定短视频的所有标签
    async fn find_by_short(&self, short_id: ShortId) -> Result<Vec<Tag>, RepositoryError>;

    /// 获取带有指定标签的所有短视频 ID
    async fn find_shorts_by_tag(&self, tag_id: TagId) -> Result<Vec<ShortId>, RepositoryError>;

    /// 保存标签（创建或更新）
    async fn save(&self, tag: &Tag) -> Result<(), RepositoryError>;

    /// 建立关联；已存在时返回 false（幂等）
    async fn attach(&self, short_id: ShortId, tag_id: TagId) -> Result<bool, RepositoryError>;

    /// 解除关联；不存在时返回 false
    async fn detach(&self, short_id: ShortId, tag_id: TagId) -> Result<bool, RepositoryError>;

    /// 解除短视频的全部关联，返回解除数量
    async fn detach_all(&self, short_id: ShortId) -> Result<usize, RepositoryError>;

    /// 检查关联是否存在
    async fn is_attached(&self, short_id: ShortId, tag_id: TagId)
        -> Result<bool, RepositoryError>;

    /// 删除标签及其全部关联，返回删除的关联数量
    async fn delete(&self, tag_id: TagId) -> Result<usize, RepositoryError>;
}

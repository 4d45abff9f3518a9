use async_trait::async_trait;

use super::super::domain::{Report, ShortId, UserId};
use super::short_repository::RepositoryError;

/// 举报仓储端口
///
/// 举报以 (short_id, reporter_id) 复合键寻址，不使用代理 ID。
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// 根据复合键获取举报
    async fn get(
        &self,
        short_id: ShortId,
        reporter_id: UserId,
    ) -> Result<Option<Report>, RepositoryError>;

    /// 插入新举报
    ///
    /// 复合键已存在时返回 `Conflict`。检查与写入在同一临界区内完成，
    /// 并发插入同一键时恰有一个成功。
    async fn insert(&self, report: &Report) -> Result<(), RepositoryError>;

    /// 删除举报，返回被删除的记录
    async fn delete(
        &self,
        short_id: ShortId,
        reporter_id: UserId,
    ) -> Result<Option<Report>, RepositoryError>;

    /// 获取所有举报
    async fn find_all(&self) -> Result<Vec<Report>, RepositoryError>;

    /// 获取指定用户提交的所有举报
    async fn find_by_user(&self, reporter_id: UserId) -> Result<Vec<Report>, RepositoryError>;

    /// 获取针对指定短视频的所有举报
    async fn find_by_short(&self, short_id: ShortId) -> Result<Vec<Report>, RepositoryError>;

    /// 删除针对指定短视频的全部举报，返回删除数量
    async fn delete_by_short(&self, short_id: ShortId) -> Result<usize, RepositoryError>;

    /// 获取举报总数
    async fn count(&self) -> Result<usize, RepositoryError>;
}

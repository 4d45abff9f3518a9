use async_trait::async_trait;
use thiserror::Error;

use super::super::domain::{Short, ShortId, UserId};

/// 仓储错误类型
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// 分页参数
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn offset(&self) -> u32 {
        (self.page.saturating_sub(1)) * self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// 分页结果
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: usize, pagination: Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            limit: pagination.limit,
        }
    }

    pub fn has_next(&self) -> bool {
        (self.page as usize * self.limit as usize) < self.total
    }
}

/// 短视频仓储端口
///
/// 定义短视频持久化的抽象接口
#[async_trait]
pub trait ShortRepository: Send + Sync {
    /// 根据 ID 获取短视频
    async fn get(&self, id: ShortId) -> Result<Option<Short>, RepositoryError>;

    /// 保存短视频（创建或更新）
    async fn save(&self, short: &Short) -> Result<(), RepositoryError>;

    /// 删除短视频
    async fn delete(&self, id: ShortId) -> Result<(), RepositoryError>;

    /// 获取所有短视频（分页，按更新时间倒序）
    async fn find_all(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResult<Short>, RepositoryError>;

    /// 获取指定用户的所有短视频
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Short>, RepositoryError>;

    /// 批量按 ID 获取（保持传入顺序，缺失的 ID 跳过）
    async fn find_by_ids(&self, ids: &[ShortId]) -> Result<Vec<Short>, RepositoryError>;

    /// 检查短视频是否存在
    async fn exists(&self, id: ShortId) -> Result<bool, RepositoryError>;

    /// 获取短视频总数
    async fn count(&self) -> Result<usize, RepositoryError>;
}

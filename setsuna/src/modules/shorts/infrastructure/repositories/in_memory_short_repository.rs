use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::shorts::domain::{Short, ShortId, UserId};
use crate::modules::shorts::ports::{
    PaginatedResult, Pagination, RepositoryError, ShortRepository,
};

/// 内存短视频仓储
///
/// 用于开发和测试，后续可替换为数据库实现
pub struct InMemoryShortRepository {
    shorts: RwLock<HashMap<ShortId, Short>>,
}

impl InMemoryShortRepository {
    pub fn new() -> Self {
        Self {
            shorts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryShortRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortRepository for InMemoryShortRepository {
    async fn get(&self, id: ShortId) -> Result<Option<Short>, RepositoryError> {
        let shorts = self.shorts.read().await;
        Ok(shorts.get(&id).cloned())
    }

    async fn save(&self, short: &Short) -> Result<(), RepositoryError> {
        let mut shorts = self.shorts.write().await;
        shorts.insert(short.id(), short.clone());
        Ok(())
    }

    async fn delete(&self, id: ShortId) -> Result<(), RepositoryError> {
        let mut shorts = self.shorts.write().await;
        shorts.remove(&id);
        Ok(())
    }

    async fn find_all(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResult<Short>, RepositoryError> {
        let shorts = self.shorts.read().await;

        // 按更新时间排序（最新的在前）
        let mut all_shorts: Vec<Short> = shorts.values().cloned().collect();
        all_shorts.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));

        let total = all_shorts.len();
        let offset = pagination.offset() as usize;
        let limit = pagination.limit as usize;

        let items = if offset < total {
            all_shorts[offset..total.min(offset + limit)].to_vec()
        } else {
            Vec::new()
        };

        Ok(PaginatedResult::new(items, total, pagination))
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Short>, RepositoryError> {
        let shorts = self.shorts.read().await;

        let mut user_shorts: Vec<Short> = shorts
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect();
        user_shorts.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));

        Ok(user_shorts)
    }

    async fn find_by_ids(&self, ids: &[ShortId]) -> Result<Vec<Short>, RepositoryError> {
        let shorts = self.shorts.read().await;

        Ok(ids.iter().filter_map(|id| shorts.get(id).cloned()).collect())
    }

    async fn exists(&self, id: ShortId) -> Result<bool, RepositoryError> {
        let shorts = self.shorts.read().await;
        Ok(shorts.contains_key(&id))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let shorts = self.shorts.read().await;
        Ok(shorts.len())
    }
}

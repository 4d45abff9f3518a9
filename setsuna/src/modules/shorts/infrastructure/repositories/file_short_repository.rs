// 文件持久化短视频仓储实现
//
// 使用 JSON 文件存储短视频数据，提供简单的持久化方案
// 后续可切换为 SQLite 实现以支持更复杂的查询需求

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::modules::shorts::domain::{Short, ShortId, UserId};
use crate::modules::shorts::ports::{
    PaginatedResult, Pagination, RepositoryError, ShortRepository,
};

/// 持久化数据结构
#[derive(Debug, Serialize, Deserialize, Default)]
struct ShortStore {
    shorts: HashMap<String, Short>,
}

/// 文件持久化短视频仓储
///
/// 将短视频数据存储到 JSON 文件中，提供跨进程的数据持久化
pub struct FileShortRepository {
    store: RwLock<ShortStore>,
    file_path: PathBuf,
}

impl FileShortRepository {
    /// 创建新的文件短视频仓储
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    pub async fn new(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let file_path = data_dir.join("shorts.json");

        // 确保目录存在
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        }

        // 尝试加载现有数据
        let store = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

            serde_json::from_str(&content).unwrap_or_default()
        } else {
            ShortStore::default()
        };

        Ok(Self {
            store: RwLock::new(store),
            file_path,
        })
    }

    /// 将数据持久化到文件
    async fn persist(&self) -> Result<(), RepositoryError> {
        let store = self.store.read().await;
        let content = serde_json::to_string_pretty(&*store)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&self.file_path, content)
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ShortRepository for FileShortRepository {
    async fn get(&self, id: ShortId) -> Result<Option<Short>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.shorts.get(&id.to_string()).cloned())
    }

    async fn save(&self, short: &Short) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            store.shorts.insert(short.id().to_string(), short.clone());
        }
        self.persist().await
    }

    async fn delete(&self, id: ShortId) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            store.shorts.remove(&id.to_string());
        }
        self.persist().await
    }

    async fn find_all(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResult<Short>, RepositoryError> {
        let store = self.store.read().await;

        // 按更新时间排序（最新的在前）
        let mut all_shorts: Vec<Short> = store.shorts.values().cloned().collect();
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
        let store = self.store.read().await;

        let mut user_shorts: Vec<Short> = store
            .shorts
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect();
        user_shorts.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));

        Ok(user_shorts)
    }

    async fn find_by_ids(&self, ids: &[ShortId]) -> Result<Vec<Short>, RepositoryError> {
        let store = self.store.read().await;

        Ok(ids
            .iter()
            .filter_map(|id| store.shorts.get(&id.to_string()).cloned())
            .collect())
    }

    async fn exists(&self, id: ShortId) -> Result<bool, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.shorts.contains_key(&id.to_string()))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.shorts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileShortRepository::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        let short = Short::new(UserId::new(), "Test".to_string(), None);
        let id = short.id();

        repo.save(&short).await.unwrap();
        let retrieved = repo.get(id).await.unwrap();

        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().title(), "Test");
    }

    #[tokio::test]
    async fn test_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_path_buf();

        // 创建并保存短视频
        let short = Short::new(UserId::new(), "Persistent".to_string(), None);
        let id = short.id();

        {
            let repo = FileShortRepository::new(path.clone()).await.unwrap();
            repo.save(&short).await.unwrap();
        }

        // 重新加载仓储，验证数据持久化
        {
            let repo = FileShortRepository::new(path).await.unwrap();
            let retrieved = repo.get(id).await.unwrap();

            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().title(), "Persistent");
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileShortRepository::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        let short = Short::new(UserId::new(), "ToDelete".to_string(), None);
        let id = short.id();

        repo.save(&short).await.unwrap();
        assert!(repo.exists(id).await.unwrap());

        repo.delete(id).await.unwrap();
        assert!(!repo.exists(id).await.unwrap());
    }
}

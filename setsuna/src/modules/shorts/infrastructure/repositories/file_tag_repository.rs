// 文件持久化标签仓储实现
//
// 标签实体与 (short, tag) 关联存储在同一个 JSON 文件中，
// 与内存实现保持一致的原子性语义

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::modules::shorts::domain::{ShortId, Tag, TagId};
use crate::modules::shorts::ports::{RepositoryError, TagRepository};

/// 短视频与标签的关联记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagLink {
    short_id: ShortId,
    tag_id: TagId,
}

/// 持久化数据结构
#[derive(Debug, Serialize, Deserialize, Default)]
struct TagStore {
    tags: HashMap<String, Tag>,
    links: Vec<TagLink>,
}

/// 文件持久化标签仓储
pub struct FileTagRepository {
    store: RwLock<TagStore>,
    file_path: PathBuf,
}

impl FileTagRepository {
    /// 创建新的文件标签仓储
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    pub async fn new(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let file_path = data_dir.join("tags.json");

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        }

        let store = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

            serde_json::from_str(&content).unwrap_or_default()
        } else {
            TagStore::default()
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
impl TagRepository for FileTagRepository {
    async fn get(&self, id: TagId) -> Result<Option<Tag>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.tags.get(&id.to_string()).cloned())
    }

    async fn find_by_text(&self, text: &str) -> Result<Option<Tag>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.tags.values().find(|t| t.text() == text).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let store = self.store.read().await;

        let mut tags: Vec<Tag> = store.tags.values().cloned().collect();
        tags.sort_by(|a, b| a.text().cmp(b.text()));

        Ok(tags)
    }

    async fn find_by_short(&self, short_id: ShortId) -> Result<Vec<Tag>, RepositoryError> {
        let store = self.store.read().await;

        let mut tags: Vec<Tag> = store
            .links
            .iter()
            .filter(|link| link.short_id == short_id)
            .filter_map(|link| store.tags.get(&link.tag_id.to_string()).cloned())
            .collect();
        tags.sort_by(|a, b| a.text().cmp(b.text()));

        Ok(tags)
    }

    async fn find_shorts_by_tag(&self, tag_id: TagId) -> Result<Vec<ShortId>, RepositoryError> {
        let store = self.store.read().await;

        Ok(store
            .links
            .iter()
            .filter(|link| link.tag_id == tag_id)
            .map(|link| link.short_id)
            .collect())
    }

    async fn save(&self, tag: &Tag) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            store.tags.insert(tag.id().to_string(), tag.clone());
        }
        self.persist().await
    }

    async fn attach(&self, short_id: ShortId, tag_id: TagId) -> Result<bool, RepositoryError> {
        let inserted = {
            let mut store = self.store.write().await;

            if !store.tags.contains_key(&tag_id.to_string()) {
                return Err(RepositoryError::NotFound(format!("Tag: {}", tag_id)));
            }

            let link = TagLink { short_id, tag_id };
            if store.links.contains(&link) {
                false
            } else {
                store.links.push(link);
                true
            }
        };

        if inserted {
            self.persist().await?;
        }
        Ok(inserted)
    }

    async fn detach(&self, short_id: ShortId, tag_id: TagId) -> Result<bool, RepositoryError> {
        let removed = {
            let mut store = self.store.write().await;
            let before = store.links.len();
            store
                .links
                .retain(|link| !(link.short_id == short_id && link.tag_id == tag_id));
            before != store.links.len()
        };

        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn detach_all(&self, short_id: ShortId) -> Result<usize, RepositoryError> {
        let removed = {
            let mut store = self.store.write().await;
            let before = store.links.len();
            store.links.retain(|link| link.short_id != short_id);
            before - store.links.len()
        };

        if removed > 0 {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn is_attached(
        &self,
        short_id: ShortId,
        tag_id: TagId,
    ) -> Result<bool, RepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .links
            .iter()
            .any(|link| link.short_id == short_id && link.tag_id == tag_id))
    }

    async fn delete(&self, tag_id: TagId) -> Result<usize, RepositoryError> {
        let removed = {
            let mut store = self.store.write().await;

            store.tags.remove(&tag_id.to_string());
            let before = store.links.len();
            store.links.retain(|link| link.tag_id != tag_id);
            before - store.links.len()
        };

        self.persist().await?;
        Ok(removed)
    }
}

// 文件持久化举报仓储实现
//
// 以 "short_id/reporter_id" 组合串作为存储键，
// 与内存实现保持一致的复合键语义

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::modules::shorts::domain::{Report, ShortId, UserId};
use crate::modules::shorts::ports::{ReportRepository, RepositoryError};

/// 持久化数据结构
#[derive(Debug, Serialize, Deserialize, Default)]
struct ReportStore {
    reports: HashMap<String, Report>,
}

fn storage_key(short_id: ShortId, reporter_id: UserId) -> String {
    format!("{}/{}", short_id, reporter_id)
}

/// 文件持久化举报仓储
pub struct FileReportRepository {
    store: RwLock<ReportStore>,
    file_path: PathBuf,
}

impl FileReportRepository {
    /// 创建新的文件举报仓储
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    pub async fn new(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let file_path = data_dir.join("reports.json");

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
            ReportStore::default()
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
impl ReportRepository for FileReportRepository {
    async fn get(
        &self,
        short_id: ShortId,
        reporter_id: UserId,
    ) -> Result<Option<Report>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.reports.get(&storage_key(short_id, reporter_id)).cloned())
    }

    async fn insert(&self, report: &Report) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            let key = storage_key(report.short_id(), report.reporter_id());

            if store.reports.contains_key(&key) {
                return Err(RepositoryError::Conflict(format!(
                    "Report already exists for short {} by user {}",
                    report.short_id(),
                    report.reporter_id()
                )));
            }

            store.reports.insert(key, report.clone());
        }
        self.persist().await
    }

    async fn delete(
        &self,
        short_id: ShortId,
        reporter_id: UserId,
    ) -> Result<Option<Report>, RepositoryError> {
        let removed = {
            let mut store = self.store.write().await;
            store.reports.remove(&storage_key(short_id, reporter_id))
        };

        if removed.is_some() {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn find_all(&self) -> Result<Vec<Report>, RepositoryError> {
        let store = self.store.read().await;

        let mut all_reports: Vec<Report> = store.reports.values().cloned().collect();
        all_reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(all_reports)
    }

    async fn find_by_user(&self, reporter_id: UserId) -> Result<Vec<Report>, RepositoryError> {
        let store = self.store.read().await;

        let mut user_reports: Vec<Report> = store
            .reports
            .values()
            .filter(|r| r.reporter_id() == reporter_id)
            .cloned()
            .collect();
        user_reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(user_reports)
    }

    async fn find_by_short(&self, short_id: ShortId) -> Result<Vec<Report>, RepositoryError> {
        let store = self.store.read().await;

        let mut short_reports: Vec<Report> = store
            .reports
            .values()
            .filter(|r| r.short_id() == short_id)
            .cloned()
            .collect();
        short_reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(short_reports)
    }

    async fn delete_by_short(&self, short_id: ShortId) -> Result<usize, RepositoryError> {
        let removed = {
            let mut store = self.store.write().await;
            let before = store.reports.len();
            store.reports.retain(|_, r| r.short_id() != short_id);
            before - store.reports.len()
        };

        if removed > 0 {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.reports.len())
    }
}

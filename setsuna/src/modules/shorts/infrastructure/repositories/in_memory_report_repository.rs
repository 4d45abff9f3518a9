use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::shorts::domain::{Report, ShortId, UserId};
use crate::modules::shorts::ports::{ReportRepository, RepositoryError};

/// 内存举报仓储
///
/// 以 (short_id, reporter_id) 复合键存储。插入时的键检查与写入
/// 在同一把写锁内完成，并发插入同一键恰有一个成功。
pub struct InMemoryReportRepository {
    reports: RwLock<HashMap<(ShortId, UserId), Report>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryReportRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn get(
        &self,
        short_id: ShortId,
        reporter_id: UserId,
    ) -> Result<Option<Report>, RepositoryError> {
        let reports = self.reports.read().await;
        Ok(reports.get(&(short_id, reporter_id)).cloned())
    }

    async fn insert(&self, report: &Report) -> Result<(), RepositoryError> {
        let mut reports = self.reports.write().await;

        if reports.contains_key(&report.key()) {
            return Err(RepositoryError::Conflict(format!(
                "Report already exists for short {} by user {}",
                report.short_id(),
                report.reporter_id()
            )));
        }

        reports.insert(report.key(), report.clone());
        Ok(())
    }

    async fn delete(
        &self,
        short_id: ShortId,
        reporter_id: UserId,
    ) -> Result<Option<Report>, RepositoryError> {
        let mut reports = self.reports.write().await;
        Ok(reports.remove(&(short_id, reporter_id)))
    }

    async fn find_all(&self) -> Result<Vec<Report>, RepositoryError> {
        let reports = self.reports.read().await;

        let mut all_reports: Vec<Report> = reports.values().cloned().collect();
        all_reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(all_reports)
    }

    async fn find_by_user(&self, reporter_id: UserId) -> Result<Vec<Report>, RepositoryError> {
        let reports = self.reports.read().await;

        let mut user_reports: Vec<Report> = reports
            .values()
            .filter(|r| r.reporter_id() == reporter_id)
            .cloned()
            .collect();
        user_reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(user_reports)
    }

    async fn find_by_short(&self, short_id: ShortId) -> Result<Vec<Report>, RepositoryError> {
        let reports = self.reports.read().await;

        let mut short_reports: Vec<Report> = reports
            .values()
            .filter(|r| r.short_id() == short_id)
            .cloned()
            .collect();
        short_reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(short_reports)
    }

    async fn delete_by_short(&self, short_id: ShortId) -> Result<usize, RepositoryError> {
        let mut reports = self.reports.write().await;

        let before = reports.len();
        reports.retain(|(sid, _), _| *sid != short_id);

        Ok(before - reports.len())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let reports = self.reports.read().await;
        Ok(reports.len())
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::{Report, ShortId};
use crate::modules::shorts::ports::ReportRepository;

/// 按短视频列出举报查询
#[derive(Debug, Clone)]
pub struct ListReportsByShortQuery {
    pub short_id: ShortId,
}

impl ListReportsByShortQuery {
    pub fn new(short_id: ShortId) -> Self {
        Self { short_id }
    }
}

impl Query for ListReportsByShortQuery {
    type Output = ListReportsByShortResponse;
}

/// 按短视频列出举报响应
#[derive(Debug, Clone)]
pub struct ListReportsByShortResponse {
    pub reports: Vec<Report>,
}

/// 按短视频列出举报查询处理器
pub struct ListReportsByShortHandler {
    report_repository: Arc<dyn ReportRepository>,
}

impl ListReportsByShortHandler {
    pub fn new(report_repository: Arc<dyn ReportRepository>) -> Self {
        Self { report_repository }
    }
}

#[async_trait]
impl QueryHandler<ListReportsByShortQuery> for ListReportsByShortHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        query: ListReportsByShortQuery,
    ) -> Result<ListReportsByShortResponse, ApplicationError> {
        let reports = self.report_repository.find_by_short(query.short_id).await?;

        Ok(ListReportsByShortResponse { reports })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::domain::UserId;
    use crate::modules::shorts::infrastructure::InMemoryReportRepository;

    #[tokio::test]
    async fn test_list_reports_by_short() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let handler = ListReportsByShortHandler::new(repo.clone());
        let short_id = ShortId::new();

        for _ in 0..2 {
            repo.insert(&Report::new(short_id, UserId::new(), None))
                .await
                .unwrap();
        }

        let response = handler
            .handle(ListReportsByShortQuery::new(short_id))
            .await
            .unwrap();
        assert_eq!(response.reports.len(), 2);

        // 没有举报的短视频返回空序列
        let empty = handler
            .handle(ListReportsByShortQuery::new(ShortId::new()))
            .await
            .unwrap();
        assert!(empty.reports.is_empty());
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::{Report, UserId};
use crate::modules::shorts::ports::ReportRepository;

/// 按用户列出举报查询
#[derive(Debug, Clone)]
pub struct ListReportsByUserQuery {
    pub user_id: UserId,
}

impl ListReportsByUserQuery {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl Query for ListReportsByUserQuery {
    type Output = ListReportsByUserResponse;
}

/// 按用户列出举报响应
#[derive(Debug, Clone)]
pub struct ListReportsByUserResponse {
    pub reports: Vec<Report>,
}

/// 按用户列出举报查询处理器
pub struct ListReportsByUserHandler {
    report_repository: Arc<dyn ReportRepository>,
}

impl ListReportsByUserHandler {
    pub fn new(report_repository: Arc<dyn ReportRepository>) -> Self {
        Self { report_repository }
    }
}

#[async_trait]
impl QueryHandler<ListReportsByUserQuery> for ListReportsByUserHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        query: ListReportsByUserQuery,
    ) -> Result<ListReportsByUserResponse, ApplicationError> {
        let reports = self.report_repository.find_by_user(query.user_id).await?;

        Ok(ListReportsByUserResponse { reports })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::domain::ShortId;
    use crate::modules::shorts::infrastructure::InMemoryReportRepository;

    #[tokio::test]
    async fn test_list_reports_by_user() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let handler = ListReportsByUserHandler::new(repo.clone());
        let reporter = UserId::new();

        repo.insert(&Report::new(ShortId::new(), reporter, None))
            .await
            .unwrap();
        repo.insert(&Report::new(ShortId::new(), UserId::new(), None))
            .await
            .unwrap();

        let response = handler
            .handle(ListReportsByUserQuery::new(reporter))
            .await
            .unwrap();
        assert_eq!(response.reports.len(), 1);

        // 没有举报的用户返回空序列
        let empty = handler
            .handle(ListReportsByUserQuery::new(UserId::new()))
            .await
            .unwrap();
        assert!(empty.reports.is_empty());
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::Report;
use crate::modules::shorts::ports::ReportRepository;

/// 列出所有举报查询
#[derive(Debug, Clone, Default)]
pub struct ListReportsQuery;

impl ListReportsQuery {
    pub fn new() -> Self {
        Self
    }
}

impl Query for ListReportsQuery {
    type Output = ListReportsResponse;
}

/// 列出所有举报响应
#[derive(Debug, Clone)]
pub struct ListReportsResponse {
    pub reports: Vec<Report>,
}

/// 列出所有举报查询处理器
pub struct ListReportsHandler {
    report_repository: Arc<dyn ReportRepository>,
}

impl ListReportsHandler {
    pub fn new(report_repository: Arc<dyn ReportRepository>) -> Self {
        Self { report_repository }
    }
}

#[async_trait]
impl QueryHandler<ListReportsQuery> for ListReportsHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        _query: ListReportsQuery,
    ) -> Result<ListReportsResponse, ApplicationError> {
        let reports = self.report_repository.find_all().await?;

        Ok(ListReportsResponse { reports })
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::{Report, ShortId, UserId};
use crate::modules::shorts::ports::ReportRepository;

/// 获取单条举报查询
///
/// 以 (short_id, user_id) 复合键寻址
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub short_id: ShortId,
    pub user_id: UserId,
}

impl GetReportQuery {
    pub fn new(short_id: ShortId, user_id: UserId) -> Self {
        Self { short_id, user_id }
    }
}

impl Query for GetReportQuery {
    type Output = GetReportResponse;
}

/// 获取单条举报响应
///
/// 举报不存在时 report 为 None，不是错误
#[derive(Debug, Clone)]
pub struct GetReportResponse {
    pub report: Option<Report>,
}

/// 获取单条举报查询处理器
pub struct GetReportHandler {
    report_repository: Arc<dyn ReportRepository>,
}

impl GetReportHandler {
    pub fn new(report_repository: Arc<dyn ReportRepository>) -> Self {
        Self { report_repository }
    }
}

#[async_trait]
impl QueryHandler<GetReportQuery> for GetReportHandler {
    type Error = ApplicationError;

    async fn handle(&self, query: GetReportQuery) -> Result<GetReportResponse, ApplicationError> {
        let report = self
            .report_repository
            .get(query.short_id, query.user_id)
            .await?;

        Ok(GetReportResponse { report })
    }
}

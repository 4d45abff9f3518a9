use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::{Report, ShortId, UserId};
use crate::modules::shorts::ports::ReportRepository;

/// 删除举报命令
///
/// 以 (short_id, user_id) 复合键寻址
#[derive(Debug, Clone)]
pub struct DeleteReportCommand {
    pub short_id: ShortId,
    pub user_id: UserId,
}

impl DeleteReportCommand {
    pub fn new(short_id: ShortId, user_id: UserId) -> Self {
        Self { short_id, user_id }
    }
}

impl Command for DeleteReportCommand {
    type Output = DeleteReportResponse;
}

/// 删除举报命令响应
#[derive(Debug, Clone)]
pub struct DeleteReportResponse {
    /// 被删除的举报
    pub report: Report,
}

/// 删除举报命令处理器
pub struct DeleteReportHandler {
    report_repository: Arc<dyn ReportRepository>,
}

impl DeleteReportHandler {
    pub fn new(report_repository: Arc<dyn ReportRepository>) -> Self {
        Self { report_repository }
    }
}

#[async_trait]
impl CommandHandler<DeleteReportCommand> for DeleteReportHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        command: DeleteReportCommand,
    ) -> Result<DeleteReportResponse, ApplicationError> {
        let report = self
            .report_repository
            .delete(command.short_id, command.user_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::ReportNotFound(format!(
                    "short {} by user {}",
                    command.short_id, command.user_id
                ))
            })?;

        Ok(DeleteReportResponse { report })
    }
}

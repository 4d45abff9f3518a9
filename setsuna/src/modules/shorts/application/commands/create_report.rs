use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::{Report, ShortId, UserId};
use crate::modules::shorts::ports::{ReportRepository, RepositoryError, ShortRepository};

/// 创建举报命令
///
/// 同一用户对同一短视频至多一条举报。并发提交同一复合键时
/// 由仓储的原子插入保证恰有一个成功。
#[derive(Debug, Clone)]
pub struct CreateReportCommand {
    pub short_id: ShortId,
    /// 举报人（由调用方解析身份后传入）
    pub user_id: UserId,
    pub reason: Option<String>,
}

impl CreateReportCommand {
    pub fn new(short_id: ShortId, user_id: UserId, reason: Option<String>) -> Self {
        Self {
            short_id,
            user_id,
            reason,
        }
    }
}

impl Command for CreateReportCommand {
    type Output = CreateReportResponse;
}

/// 创建举报命令响应
#[derive(Debug, Clone)]
pub struct CreateReportResponse {
    pub report: Report,
}

/// 创建举报命令处理器
pub struct CreateReportHandler {
    short_repository: Arc<dyn ShortRepository>,
    report_repository: Arc<dyn ReportRepository>,
}

impl CreateReportHandler {
    pub fn new(
        short_repository: Arc<dyn ShortRepository>,
        report_repository: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            short_repository,
            report_repository,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateReportCommand> for CreateReportHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        command: CreateReportCommand,
    ) -> Result<CreateReportResponse, ApplicationError> {
        // 验证短视频存在
        let exists = self.short_repository.exists(command.short_id).await?;
        if !exists {
            return Err(ApplicationError::ShortNotFound(command.short_id.to_string()));
        }

        let report = Report::new(command.short_id, command.user_id, command.reason);

        // 复合键冲突映射为应用层 Conflict
        match self.report_repository.insert(&report).await {
            Ok(()) => Ok(CreateReportResponse { report }),
            Err(RepositoryError::Conflict(msg)) => Err(ApplicationError::Conflict(msg)),
            Err(err) => Err(err.into()),
        }
    }
}

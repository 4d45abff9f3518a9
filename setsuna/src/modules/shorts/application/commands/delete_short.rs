use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::{Short, ShortId};
use crate::modules::shorts::ports::{ReportRepository, ShortRepository, TagRepository};

/// 删除短视频命令
#[derive(Debug, Clone)]
pub struct DeleteShortCommand {
    pub short_id: ShortId,
}

impl DeleteShortCommand {
    pub fn new(short_id: ShortId) -> Self {
        Self { short_id }
    }
}

impl Command for DeleteShortCommand {
    type Output = DeleteShortResponse;
}

/// 删除短视频命令响应
#[derive(Debug, Clone)]
pub struct DeleteShortResponse {
    /// 被删除的短视频
    pub short: Short,
    /// 解除的标签关联数量
    pub detached_tags: usize,
    /// 删除的举报数量
    pub deleted_reports: usize,
}

/// 删除短视频命令处理器
///
/// 级联清理是本处理器的单一职责：标签关联与举报随短视频一并删除，
/// 调用方无须再串联多个删除命令。
pub struct DeleteShortHandler {
    short_repository: Arc<dyn ShortRepository>,
    tag_repository: Arc<dyn TagRepository>,
    report_repository: Arc<dyn ReportRepository>,
}

impl DeleteShortHandler {
    pub fn new(
        short_repository: Arc<dyn ShortRepository>,
        tag_repository: Arc<dyn TagRepository>,
        report_repository: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            short_repository,
            tag_repository,
            report_repository,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteShortCommand> for DeleteShortHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        command: DeleteShortCommand,
    ) -> Result<DeleteShortResponse, ApplicationError> {
        // 验证短视频存在
        let short = self
            .short_repository
            .get(command.short_id)
            .await?
            .ok_or_else(|| ApplicationError::ShortNotFound(command.short_id.to_string()))?;

        // 级联：先清理关联数据，最后删除实体本身
        let detached_tags = self.tag_repository.detach_all(command.short_id).await?;
        let deleted_reports = self
            .report_repository
            .delete_by_short(command.short_id)
            .await?;

        self.short_repository.delete(command.short_id).await?;

        tracing::info!(
            "Deleted short {} ({} tag links, {} reports)",
            command.short_id,
            detached_tags,
            deleted_reports
        );

        Ok(DeleteShortResponse {
            short,
            detached_tags,
            deleted_reports,
        })
    }
}

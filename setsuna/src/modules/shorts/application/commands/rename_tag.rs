use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::ports::TagRepository;

/// 全局重命名标签命令
///
/// 所有带旧文本标签的短视频在重命名后统一显示新文本。
#[derive(Debug, Clone)]
pub struct RenameTagCommand {
    pub old_text: String,
    pub new_text: String,
}

impl RenameTagCommand {
    pub fn new(old_text: String, new_text: String) -> Self {
        Self { old_text, new_text }
    }
}

impl Command for RenameTagCommand {
    type Output = RenameTagResponse;
}

/// 全局重命名标签响应
#[derive(Debug, Clone)]
pub struct RenameTagResponse {
    pub status: String,
}

/// 全局重命名标签处理器
pub struct RenameTagHandler {
    tag_repository: Arc<dyn TagRepository>,
}

impl RenameTagHandler {
    pub fn new(tag_repository: Arc<dyn TagRepository>) -> Self {
        Self { tag_repository }
    }
}

#[async_trait]
impl CommandHandler<RenameTagCommand> for RenameTagHandler {
    type Error = ApplicationError;

    async fn handle(&self, command: RenameTagCommand) -> Result<RenameTagResponse, ApplicationError> {
        let new_text = command.new_text.trim();
        if new_text.is_empty() {
            return Err(ApplicationError::ValidationError(
                "Tag text must not be empty".to_string(),
            ));
        }

        let mut tag = self
            .tag_repository
            .find_by_text(command.old_text.trim())
            .await?
            .ok_or_else(|| ApplicationError::TagNotFound(command.old_text.clone()))?;

        // 目标文本已被其他标签占用时拒绝，避免产生重复文本
        if new_text != tag.text() {
            if let Some(existing) = self.tag_repository.find_by_text(new_text).await? {
                if existing.id() != tag.id() {
                    return Err(ApplicationError::Conflict(format!(
                        "Tag '{}' already exists",
                        new_text
                    )));
                }
            }
        }

        let affected = self.tag_repository.find_shorts_by_tag(tag.id()).await?.len();

        tag.rename(new_text);
        self.tag_repository.save(&tag).await?;

        Ok(RenameTagResponse {
            status: format!(
                "Renamed tag '{}' to '{}' ({} shorts affected)",
                command.old_text.trim(),
                new_text,
                affected
            ),
        })
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::{ShortId, Tag};
use crate::modules::shorts::ports::{ShortRepository, TagRepository};

/// 创建标签命令
///
/// 在指定短视频上打标签。标签文本全局唯一：文本已存在时复用现有
/// 标签，只新建关联；同一短视频重复打同一标签是幂等无操作。
#[derive(Debug, Clone)]
pub struct CreateTagCommand {
    pub short_id: ShortId,
    pub text: String,
}

impl CreateTagCommand {
    pub fn new(short_id: ShortId, text: String) -> Self {
        Self { short_id, text }
    }
}

impl Command for CreateTagCommand {
    type Output = CreateTagResponse;
}

/// 创建标签命令响应
#[derive(Debug, Clone)]
pub struct CreateTagResponse {
    pub tag: Tag,
    /// 是否建立了新关联（false 表示幂等无操作）
    pub attached: bool,
}

/// 创建标签命令处理器
pub struct CreateTagHandler {
    short_repository: Arc<dyn ShortRepository>,
    tag_repository: Arc<dyn TagRepository>,
}

impl CreateTagHandler {
    pub fn new(
        short_repository: Arc<dyn ShortRepository>,
        tag_repository: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            short_repository,
            tag_repository,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateTagCommand> for CreateTagHandler {
    type Error = ApplicationError;

    async fn handle(&self, command: CreateTagCommand) -> Result<CreateTagResponse, ApplicationError> {
        let text = command.text.trim();
        if text.is_empty() {
            return Err(ApplicationError::ValidationError(
                "Tag text must not be empty".to_string(),
            ));
        }

        // 验证短视频存在
        let exists = self.short_repository.exists(command.short_id).await?;
        if !exists {
            return Err(ApplicationError::ShortNotFound(command.short_id.to_string()));
        }

        // 复用已有标签或创建新标签
        let tag = match self.tag_repository.find_by_text(text).await? {
            Some(tag) => tag,
            None => {
                let tag = Tag::new(text);
                self.tag_repository.save(&tag).await?;
                tag
            }
        };

        let attached = self.tag_repository.attach(command.short_id, tag.id()).await?;

        Ok(CreateTagResponse { tag, attached })
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::{ShortId, Tag};
use crate::modules::shorts::ports::TagRepository;

/// 单个短视频上重命名标签命令
///
/// 只影响指定短视频：解除与旧标签的关联，换绑到新文本的标签
/// （不存在时创建）。其他短视频上的旧标签不受影响。
#[derive(Debug, Clone)]
pub struct RenameTagOnShortCommand {
    pub short_id: ShortId,
    pub old_text: String,
    pub new_text: String,
}

impl RenameTagOnShortCommand {
    pub fn new(short_id: ShortId, old_text: String, new_text: String) -> Self {
        Self {
            short_id,
            old_text,
            new_text,
        }
    }
}

impl Command for RenameTagOnShortCommand {
    type Output = RenameTagOnShortResponse;
}

/// 单个短视频上重命名标签响应
#[derive(Debug, Clone)]
pub struct RenameTagOnShortResponse {
    pub status: String,
}

/// 单个短视频上重命名标签处理器
pub struct RenameTagOnShortHandler {
    tag_repository: Arc<dyn TagRepository>,
}

impl RenameTagOnShortHandler {
    pub fn new(tag_repository: Arc<dyn TagRepository>) -> Self {
        Self { tag_repository }
    }
}

#[async_trait]
impl CommandHandler<RenameTagOnShortCommand> for RenameTagOnShortHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        command: RenameTagOnShortCommand,
    ) -> Result<RenameTagOnShortResponse, ApplicationError> {
        let new_text = command.new_text.trim();
        if new_text.is_empty() {
            return Err(ApplicationError::ValidationError(
                "Tag text must not be empty".to_string(),
            ));
        }

        // (short, tag) 关联必须存在
        let old_tag = self
            .tag_repository
            .find_by_text(command.old_text.trim())
            .await?
            .ok_or_else(|| ApplicationError::TagNotFound(command.old_text.clone()))?;

        let attached = self
            .tag_repository
            .is_attached(command.short_id, old_tag.id())
            .await?;
        if !attached {
            return Err(ApplicationError::TagNotFound(format!(
                "Tag '{}' is not attached to short {}",
                command.old_text.trim(),
                command.short_id
            )));
        }

        self.tag_repository
            .detach(command.short_id, old_tag.id())
            .await?;

        // 换绑到新文本的标签，不存在时创建
        let new_tag = match self.tag_repository.find_by_text(new_text).await? {
            Some(tag) => tag,
            None => {
                let tag = Tag::new(new_text);
                self.tag_repository.save(&tag).await?;
                tag
            }
        };
        self.tag_repository
            .attach(command.short_id, new_tag.id())
            .await?;

        Ok(RenameTagOnShortResponse {
            status: format!(
                "Renamed tag '{}' to '{}' on short {}",
                command.old_text.trim(),
                new_text,
                command.short_id
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::infrastructure::InMemoryTagRepository;

    #[tokio::test]
    async fn test_rename_affects_only_target_short() {
        let repo = Arc::new(InMemoryTagRepository::new());
        let handler = RenameTagOnShortHandler::new(repo.clone());

        let tag = Tag::new("funny");
        repo.save(&tag).await.unwrap();
        let s1 = ShortId::new();
        let s2 = ShortId::new();
        repo.attach(s1, tag.id()).await.unwrap();
        repo.attach(s2, tag.id()).await.unwrap();

        let command =
            RenameTagOnShortCommand::new(s1, "funny".to_string(), "hilarious".to_string());
        handler.handle(command).await.unwrap();

        // s1 换绑到新标签
        let s1_tags = repo.find_by_short(s1).await.unwrap();
        assert_eq!(s1_tags.len(), 1);
        assert_eq!(s1_tags[0].text(), "hilarious");

        // s2 仍保留旧标签
        let s2_tags = repo.find_by_short(s2).await.unwrap();
        assert_eq!(s2_tags[0].text(), "funny");
    }

    #[tokio::test]
    async fn test_rename_missing_pair() {
        let repo = Arc::new(InMemoryTagRepository::new());
        let handler = RenameTagOnShortHandler::new(repo.clone());

        // 标签存在但未关联到该短视频
        let tag = Tag::new("funny");
        repo.save(&tag).await.unwrap();

        let command = RenameTagOnShortCommand::new(
            ShortId::new(),
            "funny".to_string(),
            "hilarious".to_string(),
        );
        let result = handler.handle(command).await;

        assert!(matches!(result, Err(ApplicationError::TagNotFound(_))));
    }
}

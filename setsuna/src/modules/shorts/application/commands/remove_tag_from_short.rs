use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::ShortId;
use crate::modules::shorts::ports::TagRepository;

/// 移除短视频单个标签命令
///
/// 只解除指定短视频与该标签的关联，标签实体及其他关联保留。
#[derive(Debug, Clone)]
pub struct RemoveTagFromShortCommand {
    pub short_id: ShortId,
    pub text: String,
}

impl RemoveTagFromShortCommand {
    pub fn new(short_id: ShortId, text: String) -> Self {
        Self { short_id, text }
    }
}

impl Command for RemoveTagFromShortCommand {
    type Output = RemoveTagFromShortResponse;
}

/// 移除短视频单个标签响应
#[derive(Debug, Clone)]
pub struct RemoveTagFromShortResponse {
    pub status: String,
}

/// 移除短视频单个标签处理器
pub struct RemoveTagFromShortHandler {
    tag_repository: Arc<dyn TagRepository>,
}

impl RemoveTagFromShortHandler {
    pub fn new(tag_repository: Arc<dyn TagRepository>) -> Self {
        Self { tag_repository }
    }
}

#[async_trait]
impl CommandHandler<RemoveTagFromShortCommand> for RemoveTagFromShortHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        command: RemoveTagFromShortCommand,
    ) -> Result<RemoveTagFromShortResponse, ApplicationError> {
        let tag = self
            .tag_repository
            .find_by_text(command.text.trim())
            .await?
            .ok_or_else(|| ApplicationError::TagNotFound(command.text.clone()))?;

        let removed = self.tag_repository.detach(command.short_id, tag.id()).await?;
        if !removed {
            return Err(ApplicationError::TagNotFound(format!(
                "Tag '{}' is not attached to short {}",
                command.text.trim(),
                command.short_id
            )));
        }

        Ok(RemoveTagFromShortResponse {
            status: format!(
                "Removed tag '{}' from short {}",
                command.text.trim(),
                command.short_id
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::domain::Tag;
    use crate::modules::shorts::infrastructure::InMemoryTagRepository;

    #[tokio::test]
    async fn test_remove_tag_from_short() {
        let repo = Arc::new(InMemoryTagRepository::new());
        let handler = RemoveTagFromShortHandler::new(repo.clone());

        let tag = Tag::new("funny");
        repo.save(&tag).await.unwrap();
        let s1 = ShortId::new();
        let s2 = ShortId::new();
        repo.attach(s1, tag.id()).await.unwrap();
        repo.attach(s2, tag.id()).await.unwrap();

        let command = RemoveTagFromShortCommand::new(s1, "funny".to_string());
        handler.handle(command).await.unwrap();

        // 只影响目标短视频
        assert!(repo.find_by_short(s1).await.unwrap().is_empty());
        assert_eq!(repo.find_by_short(s2).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_unattached_tag() {
        let repo = Arc::new(InMemoryTagRepository::new());
        let handler = RemoveTagFromShortHandler::new(repo.clone());

        let tag = Tag::new("funny");
        repo.save(&tag).await.unwrap();

        let command = RemoveTagFromShortCommand::new(ShortId::new(), "funny".to_string());
        let result = handler.handle(command).await;

        assert!(matches!(result, Err(ApplicationError::TagNotFound(_))));
    }
}

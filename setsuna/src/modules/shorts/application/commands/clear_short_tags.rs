use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::ShortId;
use crate::modules::shorts::ports::{ShortRepository, TagRepository};

/// 清空短视频标签命令
///
/// 解除指定短视频的全部标签关联，标签实体保留。
#[derive(Debug, Clone)]
pub struct ClearShortTagsCommand {
    pub short_id: ShortId,
}

impl ClearShortTagsCommand {
    pub fn new(short_id: ShortId) -> Self {
        Self { short_id }
    }
}

impl Command for ClearShortTagsCommand {
    type Output = ClearShortTagsResponse;
}

/// 清空短视频标签响应
#[derive(Debug, Clone)]
pub struct ClearShortTagsResponse {
    pub status: String,
}

/// 清空短视频标签处理器
pub struct ClearShortTagsHandler {
    short_repository: Arc<dyn ShortRepository>,
    tag_repository: Arc<dyn TagRepository>,
}

impl ClearShortTagsHandler {
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
impl CommandHandler<ClearShortTagsCommand> for ClearShortTagsHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        command: ClearShortTagsCommand,
    ) -> Result<ClearShortTagsResponse, ApplicationError> {
        // 验证短视频存在
        let exists = self.short_repository.exists(command.short_id).await?;
        if !exists {
            return Err(ApplicationError::ShortNotFound(command.short_id.to_string()));
        }

        // 没有标签时是无操作
        let detached = self.tag_repository.detach_all(command.short_id).await?;

        Ok(ClearShortTagsResponse {
            status: format!(
                "Cleared {} tags from short {}",
                detached, command.short_id
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::domain::{Short, Tag, UserId};
    use crate::modules::shorts::infrastructure::{InMemoryShortRepository, InMemoryTagRepository};

    #[tokio::test]
    async fn test_clear_short_tags() {
        let short_repo = Arc::new(InMemoryShortRepository::new());
        let tag_repo = Arc::new(InMemoryTagRepository::new());
        let handler = ClearShortTagsHandler::new(short_repo.clone(), tag_repo.clone());

        let short = Short::new(UserId::new(), "Test".to_string(), None);
        let short_id = short.id();
        short_repo.save(&short).await.unwrap();

        for text in ["funny", "cats"] {
            let tag = Tag::new(text);
            tag_repo.save(&tag).await.unwrap();
            tag_repo.attach(short_id, tag.id()).await.unwrap();
        }

        let response = handler
            .handle(ClearShortTagsCommand::new(short_id))
            .await
            .unwrap();

        assert!(response.status.starts_with("Cleared 2 tags"));
        assert!(tag_repo.find_by_short(short_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_untagged_short_is_noop() {
        let short_repo = Arc::new(InMemoryShortRepository::new());
        let tag_repo = Arc::new(InMemoryTagRepository::new());
        let handler = ClearShortTagsHandler::new(short_repo.clone(), tag_repo);

        let short = Short::new(UserId::new(), "Bare".to_string(), None);
        let short_id = short.id();
        short_repo.save(&short).await.unwrap();

        let response = handler
            .handle(ClearShortTagsCommand::new(short_id))
            .await
            .unwrap();

        assert!(response.status.starts_with("Cleared 0 tags"));
    }

    #[tokio::test]
    async fn test_clear_unknown_short() {
        let short_repo = Arc::new(InMemoryShortRepository::new());
        let tag_repo = Arc::new(InMemoryTagRepository::new());
        let handler = ClearShortTagsHandler::new(short_repo, tag_repo);

        let result = handler
            .handle(ClearShortTagsCommand::new(ShortId::new()))
            .await;

        assert!(matches!(result, Err(ApplicationError::ShortNotFound(_))));
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::ports::TagRepository;

/// 全局删除标签命令
///
/// 删除标签实体及其在所有短视频上的关联。
#[derive(Debug, Clone)]
pub struct DeleteTagCommand {
    pub text: String,
}

impl DeleteTagCommand {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

impl Command for DeleteTagCommand {
    type Output = DeleteTagResponse;
}

/// 全局删除标签响应
#[derive(Debug, Clone)]
pub struct DeleteTagResponse {
    pub status: String,
}

/// 全局删除标签处理器
pub struct DeleteTagHandler {
    tag_repository: Arc<dyn TagRepository>,
}

impl DeleteTagHandler {
    pub fn new(tag_repository: Arc<dyn TagRepository>) -> Self {
        Self { tag_repository }
    }
}

#[async_trait]
impl CommandHandler<DeleteTagCommand> for DeleteTagHandler {
    type Error = ApplicationError;

    async fn handle(&self, command: DeleteTagCommand) -> Result<DeleteTagResponse, ApplicationError> {
        let tag = self
            .tag_repository
            .find_by_text(command.text.trim())
            .await?
            .ok_or_else(|| ApplicationError::TagNotFound(command.text.clone()))?;

        let removed_links = self.tag_repository.delete(tag.id()).await?;

        Ok(DeleteTagResponse {
            status: format!(
                "Deleted tag '{}' ({} links removed)",
                command.text.trim(),
                removed_links
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::domain::{ShortId, Tag};
    use crate::modules::shorts::infrastructure::InMemoryTagRepository;

    #[tokio::test]
    async fn test_delete_tag_globally() {
        let repo = Arc::new(InMemoryTagRepository::new());
        let handler = DeleteTagHandler::new(repo.clone());

        let tag = Tag::new("funny");
        repo.save(&tag).await.unwrap();
        repo.attach(ShortId::new(), tag.id()).await.unwrap();
        repo.attach(ShortId::new(), tag.id()).await.unwrap();

        let command = DeleteTagCommand::new("funny".to_string());
        let response = handler.handle(command).await.unwrap();

        assert_eq!(response.status, "Deleted tag 'funny' (2 links removed)");
        assert!(repo.find_by_text("funny").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_tag() {
        let repo = Arc::new(InMemoryTagRepository::new());
        let handler = DeleteTagHandler::new(repo);

        let command = DeleteTagCommand::new("missing".to_string());
        let result = handler.handle(command).await;

        assert!(matches!(result, Err(ApplicationError::TagNotFound(_))));
    }
}

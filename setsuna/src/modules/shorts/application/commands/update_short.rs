use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::{Short, ShortId};
use crate::modules::shorts::ports::ShortRepository;

/// 更新短视频命令
///
/// None 表示字段保持不变
#[derive(Debug, Clone)]
pub struct UpdateShortCommand {
    pub short_id: ShortId,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdateShortCommand {
    pub fn new(
        short_id: ShortId,
        title: Option<String>,
        description: Option<Option<String>>,
    ) -> Self {
        Self {
            short_id,
            title,
            description,
        }
    }
}

impl Command for UpdateShortCommand {
    type Output = UpdateShortResponse;
}

/// 更新短视频响应
#[derive(Debug, Clone)]
pub struct UpdateShortResponse {
    pub short: Short,
}

/// 更新短视频处理器
pub struct UpdateShortHandler {
    short_repository: Arc<dyn ShortRepository>,
}

impl UpdateShortHandler {
    pub fn new(short_repository: Arc<dyn ShortRepository>) -> Self {
        Self { short_repository }
    }
}

#[async_trait]
impl CommandHandler<UpdateShortCommand> for UpdateShortHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        command: UpdateShortCommand,
    ) -> Result<UpdateShortResponse, ApplicationError> {
        // 获取现有短视频
        let mut short = self
            .short_repository
            .get(command.short_id)
            .await?
            .ok_or_else(|| ApplicationError::ShortNotFound(command.short_id.to_string()))?;

        // 更新字段
        if let Some(title) = command.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(ApplicationError::ValidationError(
                    "Title must not be empty".to_string(),
                ));
            }
            short.update_title(title);
        }

        if let Some(description) = command.description {
            short.update_description(description);
        }

        // 保存
        self.short_repository.save(&short).await?;

        Ok(UpdateShortResponse { short })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::domain::UserId;
    use crate::modules::shorts::infrastructure::InMemoryShortRepository;

    #[tokio::test]
    async fn test_update_short_title() {
        let repo = Arc::new(InMemoryShortRepository::new());
        let handler = UpdateShortHandler::new(repo.clone());

        let short = Short::new(UserId::new(), "Old Title".to_string(), None);
        let short_id = short.id();
        repo.save(&short).await.unwrap();

        let command =
            UpdateShortCommand::new(short_id, Some("New Title".to_string()), None);
        let response = handler.handle(command).await.unwrap();

        assert_eq!(response.short.title(), "New Title");
    }

    #[tokio::test]
    async fn test_update_nonexistent_short() {
        let repo = Arc::new(InMemoryShortRepository::new());
        let handler = UpdateShortHandler::new(repo);

        let command = UpdateShortCommand::new(ShortId::new(), Some("Title".to_string()), None);
        let result = handler.handle(command).await;

        assert!(matches!(result, Err(ApplicationError::ShortNotFound(_))));
    }

    #[tokio::test]
    async fn test_clear_description() {
        let repo = Arc::new(InMemoryShortRepository::new());
        let handler = UpdateShortHandler::new(repo.clone());

        let short = Short::new(
            UserId::new(),
            "Title".to_string(),
            Some("desc".to_string()),
        );
        let short_id = short.id();
        repo.save(&short).await.unwrap();

        // Some(None) 表示清空描述
        let command = UpdateShortCommand::new(short_id, None, Some(None));
        let response = handler.handle(command).await.unwrap();

        assert!(response.short.description().is_none());
    }
}

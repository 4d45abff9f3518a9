use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Command, CommandHandler};
use crate::modules::shorts::domain::{Short, UserId};
use crate::modules::shorts::ports::ShortRepository;

/// 标题最大长度（字符数）
const MAX_TITLE_LENGTH: usize = 200;

/// 创建短视频命令
#[derive(Debug, Clone)]
pub struct CreateShortCommand {
    /// 所属用户（由调用方解析身份后传入）
    pub user_id: UserId,
    /// 标题
    pub title: String,
    /// 描述（可选）
    pub description: Option<String>,
}

impl CreateShortCommand {
    pub fn new(user_id: UserId, title: String, description: Option<String>) -> Self {
        Self {
            user_id,
            title,
            description,
        }
    }
}

impl Command for CreateShortCommand {
    type Output = CreateShortResponse;
}

/// 创建短视频命令响应
#[derive(Debug, Clone)]
pub struct CreateShortResponse {
    pub short: Short,
}

/// 创建短视频命令处理器
pub struct CreateShortHandler {
    short_repository: Arc<dyn ShortRepository>,
}

impl CreateShortHandler {
    pub fn new(short_repository: Arc<dyn ShortRepository>) -> Self {
        Self { short_repository }
    }
}

#[async_trait]
impl CommandHandler<CreateShortCommand> for CreateShortHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        command: CreateShortCommand,
    ) -> Result<CreateShortResponse, ApplicationError> {
        // 校验载荷
        let title = command.title.trim();
        if title.is_empty() {
            return Err(ApplicationError::ValidationError(
                "Title must not be empty".to_string(),
            ));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ApplicationError::ValidationError(format!(
                "Title exceeds {} characters",
                MAX_TITLE_LENGTH
            )));
        }

        let short = Short::new(command.user_id, title.to_string(), command.description);

        // 持久化
        self.short_repository.save(&short).await?;

        Ok(CreateShortResponse { short })
    }
}

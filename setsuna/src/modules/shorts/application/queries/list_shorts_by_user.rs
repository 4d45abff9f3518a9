use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::{Short, UserId};
use crate::modules::shorts::ports::ShortRepository;

/// 按用户列出短视频查询
#[derive(Debug, Clone)]
pub struct ListShortsByUserQuery {
    pub user_id: UserId,
}

impl ListShortsByUserQuery {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl Query for ListShortsByUserQuery {
    type Output = ListShortsByUserResponse;
}

/// 按用户列出短视频响应
#[derive(Debug, Clone)]
pub struct ListShortsByUserResponse {
    pub shorts: Vec<Short>,
}

/// 按用户列出短视频查询处理器
pub struct ListShortsByUserHandler {
    short_repository: Arc<dyn ShortRepository>,
}

impl ListShortsByUserHandler {
    pub fn new(short_repository: Arc<dyn ShortRepository>) -> Self {
        Self { short_repository }
    }
}

#[async_trait]
impl QueryHandler<ListShortsByUserQuery> for ListShortsByUserHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        query: ListShortsByUserQuery,
    ) -> Result<ListShortsByUserResponse, ApplicationError> {
        let shorts = self.short_repository.find_by_user(query.user_id).await?;

        Ok(ListShortsByUserResponse { shorts })
    }
}

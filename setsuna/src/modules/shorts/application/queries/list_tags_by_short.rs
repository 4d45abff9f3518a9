use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::{ShortId, Tag};
use crate::modules::shorts::ports::TagRepository;

/// 按短视频列出标签查询
#[derive(Debug, Clone)]
pub struct ListTagsByShortQuery {
    pub short_id: ShortId,
}

impl ListTagsByShortQuery {
    pub fn new(short_id: ShortId) -> Self {
        Self { short_id }
    }
}

impl Query for ListTagsByShortQuery {
    type Output = ListTagsByShortResponse;
}

/// 按短视频列出标签响应
#[derive(Debug, Clone)]
pub struct ListTagsByShortResponse {
    pub tags: Vec<Tag>,
}

/// 按短视频列出标签查询处理器
pub struct ListTagsByShortHandler {
    tag_repository: Arc<dyn TagRepository>,
}

impl ListTagsByShortHandler {
    pub fn new(tag_repository: Arc<dyn TagRepository>) -> Self {
        Self { tag_repository }
    }
}

#[async_trait]
impl QueryHandler<ListTagsByShortQuery> for ListTagsByShortHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        query: ListTagsByShortQuery,
    ) -> Result<ListTagsByShortResponse, ApplicationError> {
        let tags = self.tag_repository.find_by_short(query.short_id).await?;

        Ok(ListTagsByShortResponse { tags })
    }
}

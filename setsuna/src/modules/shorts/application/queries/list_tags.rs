use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::Tag;
use crate::modules::shorts::ports::TagRepository;

/// 列出所有标签查询
#[derive(Debug, Clone, Default)]
pub struct ListTagsQuery;

impl ListTagsQuery {
    pub fn new() -> Self {
        Self
    }
}

impl Query for ListTagsQuery {
    type Output = ListTagsResponse;
}

/// 列出所有标签响应
#[derive(Debug, Clone)]
pub struct ListTagsResponse {
    pub tags: Vec<Tag>,
}

/// 列出所有标签查询处理器
pub struct ListTagsHandler {
    tag_repository: Arc<dyn TagRepository>,
}

impl ListTagsHandler {
    pub fn new(tag_repository: Arc<dyn TagRepository>) -> Self {
        Self { tag_repository }
    }
}

#[async_trait]
impl QueryHandler<ListTagsQuery> for ListTagsHandler {
    type Error = ApplicationError;

    async fn handle(&self, _query: ListTagsQuery) -> Result<ListTagsResponse, ApplicationError> {
        let tags = self.tag_repository.find_all().await?;

        Ok(ListTagsResponse { tags })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::infrastructure::InMemoryTagRepository;

    #[tokio::test]
    async fn test_list_tags() {
        let repo = Arc::new(InMemoryTagRepository::new());
        let handler = ListTagsHandler::new(repo.clone());

        for text in ["funny", "cats"] {
            repo.save(&Tag::new(text)).await.unwrap();
        }

        let response = handler.handle(ListTagsQuery::new()).await.unwrap();
        assert_eq!(response.tags.len(), 2);
    }
}

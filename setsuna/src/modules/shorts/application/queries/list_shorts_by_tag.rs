use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::{Short, TagId};
use crate::modules::shorts::ports::{ShortRepository, TagRepository};

/// 按标签列出短视频查询
#[derive(Debug, Clone)]
pub struct ListShortsByTagQuery {
    pub tag_id: TagId,
}

impl ListShortsByTagQuery {
    pub fn new(tag_id: TagId) -> Self {
        Self { tag_id }
    }
}

impl Query for ListShortsByTagQuery {
    type Output = ListShortsByTagResponse;
}

/// 按标签列出短视频响应
#[derive(Debug, Clone)]
pub struct ListShortsByTagResponse {
    pub shorts: Vec<Short>,
}

/// 按标签列出短视频查询处理器
pub struct ListShortsByTagHandler {
    short_repository: Arc<dyn ShortRepository>,
    tag_repository: Arc<dyn TagRepository>,
}

impl ListShortsByTagHandler {
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
impl QueryHandler<ListShortsByTagQuery> for ListShortsByTagHandler {
    type Error = ApplicationError;

    async fn handle(
        &self,
        query: ListShortsByTagQuery,
    ) -> Result<ListShortsByTagResponse, ApplicationError> {
        // 未使用的标签返回空序列，不是错误
        let short_ids = self.tag_repository.find_shorts_by_tag(query.tag_id).await?;
        let shorts = self.short_repository.find_by_ids(&short_ids).await?;

        Ok(ListShortsByTagResponse { shorts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::domain::{Tag, UserId};
    use crate::modules::shorts::infrastructure::{InMemoryShortRepository, InMemoryTagRepository};

    #[tokio::test]
    async fn test_list_shorts_by_tag() {
        let short_repo = Arc::new(InMemoryShortRepository::new());
        let tag_repo = Arc::new(InMemoryTagRepository::new());
        let handler = ListShortsByTagHandler::new(short_repo.clone(), tag_repo.clone());

        let tag = Tag::new("funny");
        tag_repo.save(&tag).await.unwrap();

        let tagged = Short::new(UserId::new(), "Tagged".to_string(), None);
        short_repo.save(&tagged).await.unwrap();
        tag_repo.attach(tagged.id(), tag.id()).await.unwrap();

        let untagged = Short::new(UserId::new(), "Untagged".to_string(), None);
        short_repo.save(&untagged).await.unwrap();

        let response = handler
            .handle(ListShortsByTagQuery::new(tag.id()))
            .await
            .unwrap();

        assert_eq!(response.shorts.len(), 1);
        assert_eq!(response.shorts[0].id(), tagged.id());
    }

    #[tokio::test]
    async fn test_unknown_tag_returns_empty() {
        let short_repo = Arc::new(InMemoryShortRepository::new());
        let tag_repo = Arc::new(InMemoryTagRepository::new());
        let handler = ListShortsByTagHandler::new(short_repo, tag_repo);

        let response = handler
            .handle(ListShortsByTagQuery::new(TagId::new()))
            .await
            .unwrap();

        assert!(response.shorts.is_empty());
    }
}
